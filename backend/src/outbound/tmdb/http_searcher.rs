//! Reqwest-backed TMDB movie search adapter.
//!
//! This adapter owns transport details only: query encoding, authentication,
//! timeout and HTTP error mapping, and decoding into domain movies.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use tracing::debug;

use super::dto::{MovieDto, SearchResponseDto};
use crate::domain::ports::{MovieSearchParams, MovieSearcher, MovieSearcherError};
use crate::domain::{Movie, Paged};

/// Image base and size segments used to build artwork URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbImageSizes {
    /// e.g. `https://image.tmdb.org/t/p`
    pub image_base: String,
    /// e.g. `w342`
    pub poster: String,
    /// e.g. `w780`
    pub backdrop: String,
}

/// Movie searcher calling `GET {base}/search/movie`.
pub struct TmdbMovieSearcher {
    client: Client,
    search_url: Url,
    api_key: String,
    images: TmdbImageSizes,
}

impl TmdbMovieSearcher {
    /// Build an adapter with an explicit request timeout.
    ///
    /// `api_key` may be a v3 API key (sent as the `api_key` query parameter)
    /// or a v4 read access token (sent as a bearer token).
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: &Url,
        api_key: impl Into<String>,
        images: TmdbImageSizes,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            search_url: search_endpoint(base_url),
            api_key: api_key.into(),
            images,
        })
    }

    fn authorise(&self, request: RequestBuilder) -> RequestBuilder {
        if is_read_access_token(&self.api_key) {
            request.bearer_auth(&self.api_key)
        } else {
            request.query(&[("api_key", self.api_key.as_str())])
        }
    }

    fn image_url(&self, path: Option<&str>, size: &str) -> Option<String> {
        image_url(&self.images.image_base, size, path)
    }

    fn to_domain(&self, movie: MovieDto) -> Movie {
        Movie {
            id: movie.id,
            poster_url: self.image_url(movie.poster_path.as_deref(), &self.images.poster),
            backdrop_url: self.image_url(movie.backdrop_path.as_deref(), &self.images.backdrop),
            title: movie.title,
            overview: movie.overview,
            release_date: movie.release_date,
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
        }
    }
}

#[async_trait]
impl MovieSearcher for TmdbMovieSearcher {
    async fn search_movies(
        &self,
        params: &MovieSearchParams,
    ) -> Result<Paged<Movie>, MovieSearcherError> {
        let request = self
            .client
            .get(self.search_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&query_pairs(params));
        let response = self
            .authorise(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let decoded: SearchResponseDto = serde_json::from_slice(body.as_ref()).map_err(|error| {
            MovieSearcherError::decode(format!("invalid TMDB search payload: {error}"))
        })?;
        debug!(
            page = decoded.page,
            results = decoded.results.len(),
            "TMDB search completed"
        );
        Ok(Paged {
            page: decoded.page,
            total_pages: decoded.total_pages,
            total_results: decoded.total_results,
            results: decoded
                .results
                .into_iter()
                .map(|movie| self.to_domain(movie))
                .collect(),
        })
    }
}

fn search_endpoint(base_url: &Url) -> Url {
    let mut url = base_url.clone();
    {
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/search/movie"));
    }
    url
}

/// v4 read access tokens are JWTs; v3 keys are 32 hex characters.
fn is_read_access_token(api_key: &str) -> bool {
    api_key.split('.').count() == 3
}

fn query_pairs(params: &MovieSearchParams) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("query", params.query.clone()),
        ("page", params.page.max(1).to_string()),
        ("include_adult", params.include_adult.to_string()),
    ];
    if !params.language.is_empty() {
        pairs.push(("language", params.language.clone()));
    }
    if let Some(year) = params.year {
        pairs.push(("year", year.to_string()));
    }
    if let Some(year) = params.primary_release_year {
        pairs.push(("primary_release_year", year.to_string()));
    }
    pairs
}

fn image_url(image_base: &str, size: &str, path: Option<&str>) -> Option<String> {
    match path {
        None | Some("") => None,
        Some(path) => Some(format!("{image_base}/{size}{path}")),
    }
}

fn map_transport_error(error: reqwest::Error) -> MovieSearcherError {
    if error.is_timeout() {
        MovieSearcherError::timeout(error.to_string())
    } else if error.is_decode() {
        MovieSearcherError::decode(error.to_string())
    } else {
        MovieSearcherError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> MovieSearcherError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => MovieSearcherError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            MovieSearcherError::timeout(message)
        }
        _ if status.is_client_error() => MovieSearcherError::invalid_request(message),
        _ => MovieSearcherError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
