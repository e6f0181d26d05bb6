//! Movie catalogue types returned by the search integration.

use serde::{Deserialize, Serialize};

/// Movie summary as returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Upstream catalogue identifier.
    pub id: i64,
    pub title: String,
    pub overview: String,
    /// Release date as reported upstream (`YYYY-MM-DD`), possibly empty.
    pub release_date: String,
    /// Absolute poster URL, absent when the upstream has no artwork.
    pub poster_url: Option<String>,
    /// Absolute backdrop URL, absent when the upstream has no artwork.
    pub backdrop_url: Option<String>,
    pub vote_average: f32,
    pub vote_count: i64,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub page: i64,
    pub total_pages: i64,
    pub total_results: i64,
    pub results: Vec<T>,
}

impl<T> Paged<T> {
    /// An empty page, e.g. for fixtures.
    pub fn empty(page: i64) -> Self {
        Self {
            page,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
        }
    }
}
