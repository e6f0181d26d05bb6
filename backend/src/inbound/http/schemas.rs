//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers here mirror their
//! serialised shape so the adapter layer owns the documentation concern.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No caller identity is available.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// A backing store or upstream service cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "club name is required")]
    message: String,
    /// Correlation identifier of the failing request.
    #[schema(example = "0192a6f0-7c1e-7b8a-9d2f-3e4a5b6c7d8e")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the failing creation step.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Movie`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Movie, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MovieSchema {
    #[schema(example = 348)]
    id: i64,
    #[schema(example = "Alien")]
    title: String,
    overview: String,
    #[schema(example = "1979-05-25")]
    release_date: String,
    poster_url: Option<String>,
    backdrop_url: Option<String>,
    #[schema(example = 8.1)]
    vote_average: f32,
    vote_count: i64,
}

/// One page of movie search results.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MoviePageSchema {
    #[schema(example = 1)]
    page: i64,
    total_pages: i64,
    total_results: i64,
    results: Vec<MovieSchema>,
}
