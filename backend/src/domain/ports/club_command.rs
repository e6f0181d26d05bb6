//! Driving port for club creation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ClubId, ClubName, Error, UserId};

/// Request to create a club owned by an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubRequest {
    pub owner_id: UserId,
    pub name: String,
    /// Owner display name copied into the members-by-club view.
    #[serde(default)]
    pub owner_display_name: Option<String>,
}

/// Identity and creation time of a new club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubResponse {
    pub club_id: ClubId,
    pub created_at: DateTime<Utc>,
}

/// Driving port for club write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubCommand: Send + Sync {
    /// Create a club and enrol its owner.
    ///
    /// Returns `InvalidRequest` for an empty name before anything is written.
    /// Storage failures after the club row is written leave partial state in
    /// place; callers may retry.
    async fn create_club(&self, request: CreateClubRequest) -> Result<CreateClubResponse, Error>;
}

/// Fixture command that validates the name and echoes a nil club id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClubCommand;

#[async_trait]
impl ClubCommand for FixtureClubCommand {
    async fn create_club(&self, request: CreateClubRequest) -> Result<CreateClubResponse, Error> {
        ClubName::new(request.name).map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(CreateClubResponse {
            club_id: ClubId::from_uuid(uuid::Uuid::nil()),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
    }
}
