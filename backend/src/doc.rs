//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the HTTP endpoints of the inbound layer together with
//! the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. The document backs Swagger UI in debug
//! builds and is printed by the `openapi-dump` binary.

use crate::inbound::http::clubs::{CreateClubBody, CreatedClubBody};
use crate::inbound::http::health::ServiceInfo;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, MoviePageSchema, MovieSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the development identity header.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "DevUser",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Dev-UserID",
                "Overrides the development identity; non-production only.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Film club API",
        description = "Club creation, movie search and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("DevUser" = [])),
    paths(
        crate::inbound::http::clubs::create_club,
        crate::inbound::http::movies::search_movies,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateClubBody,
        CreatedClubBody,
        MovieSchema,
        MoviePageSchema,
        ServiceInfo,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "clubs", description = "Film club management"),
        (name = "movies", description = "Movie catalogue search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
