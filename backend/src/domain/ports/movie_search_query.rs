//! Driving port for movie search.

use async_trait::async_trait;

use crate::domain::{Error, Movie, Paged};

/// Search request as received from a client; omitted fields take the
/// service defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchMoviesRequest {
    pub query: String,
    pub page: Option<u32>,
    pub language: Option<String>,
    pub include_adult: Option<bool>,
    pub year: Option<i32>,
    pub primary_release_year: Option<i32>,
}

/// Driving port for movie search reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSearchQuery: Send + Sync {
    /// Search the catalogue, classifying upstream failures into [`Error`].
    async fn search_movies(&self, request: SearchMoviesRequest) -> Result<Paged<Movie>, Error>;
}

/// Fixture query returning an empty page.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMovieSearchQuery;

#[async_trait]
impl MovieSearchQuery for FixtureMovieSearchQuery {
    async fn search_movies(&self, request: SearchMoviesRequest) -> Result<Paged<Movie>, Error> {
        Ok(Paged::empty(i64::from(request.page.unwrap_or(1).max(1))))
    }
}
