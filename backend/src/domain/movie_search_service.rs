//! Movie search service applying configured defaults.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    MovieSearchParams, MovieSearchQuery, MovieSearcher, MovieSearcherError, SearchMoviesRequest,
};
use crate::domain::{Error, Movie, Paged};

/// Values used when a search request leaves a field unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieSearchDefaults {
    pub language: String,
    pub include_adult: bool,
}

fn map_searcher_error(error: MovieSearcherError) -> Error {
    match error {
        MovieSearcherError::Transport { message }
        | MovieSearcherError::Timeout { message }
        | MovieSearcherError::RateLimited { message } => {
            Error::service_unavailable(format!("movie catalogue unavailable: {message}"))
        }
        MovieSearcherError::InvalidRequest { message } => {
            Error::invalid_request(format!("movie catalogue rejected search: {message}"))
        }
        MovieSearcherError::Decode { message } => {
            Error::internal(format!("movie catalogue response invalid: {message}"))
        }
    }
}

/// Domain service implementing [`MovieSearchQuery`].
#[derive(Clone)]
pub struct MovieSearchService<S> {
    searcher: Arc<S>,
    defaults: MovieSearchDefaults,
}

impl<S> MovieSearchService<S> {
    /// Create a new search service.
    pub fn new(searcher: Arc<S>, defaults: MovieSearchDefaults) -> Self {
        Self { searcher, defaults }
    }

    fn resolve(&self, request: SearchMoviesRequest) -> MovieSearchParams {
        MovieSearchParams {
            query: request.query,
            page: request.page.unwrap_or(1).max(1),
            include_adult: request
                .include_adult
                .unwrap_or(self.defaults.include_adult),
            language: request
                .language
                .filter(|language| !language.is_empty())
                .unwrap_or_else(|| self.defaults.language.clone()),
            year: request.year,
            primary_release_year: request.primary_release_year,
        }
    }
}

#[async_trait]
impl<S> MovieSearchQuery for MovieSearchService<S>
where
    S: MovieSearcher,
{
    async fn search_movies(&self, request: SearchMoviesRequest) -> Result<Paged<Movie>, Error> {
        if request.query.trim().is_empty() {
            return Err(Error::invalid_request("query is required"));
        }
        let params = self.resolve(request);
        debug!(page = params.page, language = %params.language, "searching movie catalogue");
        self.searcher
            .search_movies(&params)
            .await
            .map_err(map_searcher_error)
    }
}
