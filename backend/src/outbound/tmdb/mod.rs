//! TMDB outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `MovieSearcher`
//! port against the TMDB v3 search API.

mod dto;
mod http_searcher;

pub use http_searcher::{TmdbImageSizes, TmdbMovieSearcher};
