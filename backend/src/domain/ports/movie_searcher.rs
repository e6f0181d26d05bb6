//! Driven port for the external movie catalogue.

use async_trait::async_trait;

use crate::domain::{Movie, Paged};

use super::define_port_error;

/// Fully resolved search parameters sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSearchParams {
    pub query: String,
    /// One-based page number; always at least 1.
    pub page: u32,
    pub include_adult: bool,
    /// Upstream locale tag; empty means the upstream default.
    pub language: String,
    pub year: Option<i32>,
    pub primary_release_year: Option<i32>,
}

define_port_error! {
    /// Errors surfaced while calling the movie catalogue.
    pub enum MovieSearcherError {
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "movie catalogue transport failed: {message}",
        /// Upstream call exceeded its timeout.
        Timeout { message: String } =>
            "movie catalogue timeout: {message}",
        /// Upstream rate-limited the request.
        RateLimited { message: String } =>
            "movie catalogue rate limited request: {message}",
        /// Upstream response could not be decoded.
        Decode { message: String } =>
            "movie catalogue response decode failed: {message}",
        /// Upstream rejected the request.
        InvalidRequest { message: String } =>
            "movie catalogue rejected request: {message}",
    }
}

/// Port for searching the movie catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSearcher: Send + Sync {
    /// Search movies by title.
    async fn search_movies(
        &self,
        params: &MovieSearchParams,
    ) -> Result<Paged<Movie>, MovieSearcherError>;
}

/// Fixture searcher returning an empty page.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMovieSearcher;

#[async_trait]
impl MovieSearcher for FixtureMovieSearcher {
    async fn search_movies(
        &self,
        params: &MovieSearchParams,
    ) -> Result<Paged<Movie>, MovieSearcherError> {
        Ok(Paged::empty(i64::from(params.page)))
    }
}
