//! Movie search handler.
//!
//! ```text
//! GET /api/v1/movies/search?query=alien&page=2&lang=en-GB&adult=no&pry=1979
//! ```
//!
//! Only `query` is required. Numeric parameters that fail to parse are
//! dropped rather than rejected, so a sloppy client still gets results.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ports::SearchMoviesRequest;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::cache_control::public_short_lived_header;
use crate::inbound::http::schemas::{ErrorSchema, MoviePageSchema};
use crate::inbound::http::state::HttpState;

/// Raw query string parameters for `GET /api/v1/movies/search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchParamsQuery {
    /// Free-text title search.
    pub query: Option<String>,
    /// 1-based result page; values below 1 fall back to 1.
    pub page: Option<String>,
    /// Result language, e.g. `en-GB`.
    pub lang: Option<String>,
    /// Include adult titles: `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
    pub adult: Option<String>,
    /// Restrict to a release year.
    pub year: Option<String>,
    /// Restrict to a primary release year.
    pub pry: Option<String>,
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

// Unknown spellings count as `false` once the parameter is present.
fn parse_flag(raw: &str) -> bool {
    matches!(raw, "true" | "1" | "yes" | "on")
}

fn parse_year(raw: Option<&str>) -> Option<i32> {
    raw.filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

impl MovieSearchParamsQuery {
    fn into_request(self) -> Result<SearchMoviesRequest, Error> {
        let query = non_empty(self.query).ok_or_else(|| Error::invalid_request("query is required"))?;
        Ok(SearchMoviesRequest {
            query,
            page: Some(parse_page(self.page.as_deref())),
            language: non_empty(self.lang),
            include_adult: non_empty(self.adult).map(|value| parse_flag(&value)),
            year: parse_year(self.year.as_deref()),
            primary_release_year: parse_year(self.pry.as_deref()),
        })
    }
}

/// Search the movie catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/movies/search",
    params(MovieSearchParamsQuery),
    responses(
        (status = 200, description = "Search results", body = MoviePageSchema,
            headers(("Cache-Control" = String, description = "public, max-age=60"))),
        (status = 400, description = "Missing query", body = ErrorSchema),
        (status = 503, description = "Catalogue unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "searchMovies"
)]
#[get("/movies/search")]
pub async fn search_movies(
    state: web::Data<HttpState>,
    params: web::Query<MovieSearchParamsQuery>,
) -> ApiResult<HttpResponse> {
    let request = params.into_inner().into_request()?;
    let page = state.movies.search_movies(request).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_short_lived_header())
        .json(page))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{FixtureClubCommand, MockMovieSearchQuery};
    use crate::domain::{Movie, Paged};

    fn alien() -> Movie {
        Movie {
            id: 348,
            title: "Alien".to_owned(),
            overview: "In space no one can hear you scream.".to_owned(),
            release_date: "1979-05-25".to_owned(),
            poster_url: Some("https://image.tmdb.org/t/p/w342/alien.jpg".to_owned()),
            backdrop_url: None,
            vote_average: 8.1,
            vote_count: 15000,
        }
    }

    async fn get(movies: MockMovieSearchQuery, uri: &str) -> (StatusCode, Option<String>, Value) {
        let state = HttpState::new(Arc::new(FixtureClubCommand), Arc::new(movies));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(search_movies)),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let cache = res
            .headers()
            .get("Cache-Control")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = actix_test::read_body_json(res).await;
        (status, cache, body)
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_page_with_cache_header() {
        let mut movies = MockMovieSearchQuery::new();
        movies
            .expect_search_movies()
            .withf(|request| request.query == "alien" && request.page == Some(1))
            .times(1)
            .return_once(|_| {
                Ok(Paged {
                    page: 1,
                    total_pages: 1,
                    total_results: 1,
                    results: vec![alien()],
                })
            });

        let (status, cache, body) = get(movies, "/api/v1/movies/search?query=alien").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("public, max-age=60"));
        assert_eq!(body["totalResults"], json!(1));
        assert_eq!(body["results"][0]["title"], json!("Alien"));
        assert_eq!(body["results"][0]["backdropUrl"], Value::Null);
    }

    #[rstest]
    #[actix_web::test]
    async fn parses_optional_parameters() {
        let mut movies = MockMovieSearchQuery::new();
        movies
            .expect_search_movies()
            .withf(|request| {
                request.page == Some(2)
                    && request.language.as_deref() == Some("fr-FR")
                    && request.include_adult == Some(true)
                    && request.year == Some(1979)
                    && request.primary_release_year == Some(1980)
            })
            .times(1)
            .return_once(|_| Ok(Paged::empty(2)));

        let (status, _, _) = get(
            movies,
            "/api/v1/movies/search?query=alien&page=2&lang=fr-FR&adult=yes&year=1979&pry=1980",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_numbers_fall_back() {
        let mut movies = MockMovieSearchQuery::new();
        movies
            .expect_search_movies()
            .withf(|request| {
                request.page == Some(1)
                    && request.year.is_none()
                    && request.primary_release_year.is_none()
                    && request.language.is_none()
                    && request.include_adult.is_none()
            })
            .times(1)
            .return_once(|_| Ok(Paged::empty(1)));

        let (status, _, _) = get(
            movies,
            "/api/v1/movies/search?query=alien&page=-3&year=old&pry=&lang=",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("0"), 1)]
    #[case(Some("7"), 7)]
    #[case(Some("x"), 1)]
    fn page_parsing(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(parse_page(raw), expected);
    }

    #[rstest]
    #[case("true", true)]
    #[case("on", true)]
    #[case("0", false)]
    #[case("off", false)]
    #[case("maybe", false)]
    fn flag_parsing(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_flag(raw), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_query_is_rejected() {
        let mut movies = MockMovieSearchQuery::new();
        movies.expect_search_movies().times(0);

        let (status, _, body) = get(movies, "/api/v1/movies/search?page=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("query is required"));
    }

    #[rstest]
    #[actix_web::test]
    async fn upstream_outage_is_service_unavailable() {
        let mut movies = MockMovieSearchQuery::new();
        movies.expect_search_movies().times(1).return_once(|_| {
            Err(Error::service_unavailable(
                "movie catalogue unavailable: rate limited",
            ))
        });

        let (status, cache, body) = get(movies, "/api/v1/movies/search?query=alien").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(cache.is_none());
        assert_eq!(body["code"], json!("service_unavailable"));
    }
}
