//! Club API handlers.
//!
//! ```text
//! POST /api/v1/clubs {"name":"Giallo Nights","ownerName":"Dario"}
//! ```

use actix_web::{HttpResponse, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::CreateClubRequest;
use crate::domain::{ApiResult, Error};
use crate::inbound::http::auth::CurrentUser;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/clubs`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubBody {
    /// Club name; must contain a non-whitespace character.
    #[schema(example = "Giallo Nights")]
    pub name: String,
    /// Owner display name shown in the member list.
    #[serde(default)]
    #[schema(example = "Dario")]
    pub owner_name: Option<String>,
}

/// Response body for a created club.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClubBody {
    pub club_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Create a club owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/clubs",
    request_body = CreateClubBody,
    responses(
        (status = 201, description = "Club created", body = CreatedClubBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "No caller identity", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["clubs"],
    operation_id = "createClub"
)]
#[post("/clubs")]
pub async fn create_club(
    state: web::Data<HttpState>,
    user: CurrentUser,
    payload: web::Json<CreateClubBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let created = state
        .clubs
        .create_club(CreateClubRequest {
            owner_id: user.user_id(),
            name: body.name,
            owner_display_name: body.owner_name,
        })
        .await?;

    Ok(HttpResponse::Created()
        .insert_header(no_store_header())
        .json(CreatedClubBody {
            club_id: created.club_id.into(),
            created_at: created.created_at,
        }))
}

/// JSON extractor configuration answering malformed bodies with the domain
/// error payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    })
}

#[cfg(test)]
#[path = "clubs_tests.rs"]
mod tests;
