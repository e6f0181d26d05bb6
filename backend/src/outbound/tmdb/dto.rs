//! DTOs for decoding TMDB search responses.
//!
//! TMDB omits or nulls fields freely, so everything except the identifier
//! defaults when absent.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    #[serde(default)]
    pub(super) page: i64,
    #[serde(default)]
    pub(super) total_pages: i64,
    #[serde(default)]
    pub(super) total_results: i64,
    #[serde(default)]
    pub(super) results: Vec<MovieDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MovieDto {
    pub(super) id: i64,
    #[serde(default)]
    pub(super) title: String,
    #[serde(default)]
    pub(super) overview: String,
    #[serde(default)]
    pub(super) release_date: String,
    #[serde(default)]
    pub(super) poster_path: Option<String>,
    #[serde(default)]
    pub(super) backdrop_path: Option<String>,
    #[serde(default)]
    pub(super) vote_average: f32,
    #[serde(default)]
    pub(super) vote_count: i64,
}
