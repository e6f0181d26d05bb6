//! Film club backend library.
//!
//! Layout follows ports and adapters: [`domain`] holds the club model, the
//! creation orchestrator and the port traits; [`inbound`] exposes them over
//! HTTP; [`outbound`] implements the driven ports for PostgreSQL, memory and
//! TMDB.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
