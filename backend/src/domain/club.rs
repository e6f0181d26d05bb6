//! Club aggregate and its denormalised membership views.
//!
//! A club is written once to the club-by-id view. Each membership is written
//! twice, once partitioned by club and once partitioned by user; both copies
//! carry the same [`JoinId`], which the membership guard makes canonical.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

macro_rules! uuid_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

uuid_newtype! {
    /// Time-ordered club identifier; doubles as the club's creation marker.
    ClubId
}

uuid_newtype! {
    /// Identifier of one enrolment event of a user in a club.
    ///
    /// Time ordered, so it also orders members within a club partition.
    JoinId
}

/// Validation errors for [`ClubName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClubValidationError {
    /// The name was empty.
    #[error("club name is required")]
    EmptyName,
}

/// Non-empty club name.
///
/// # Examples
/// ```
/// use filmclub::domain::ClubName;
///
/// assert!(ClubName::new("Friday Noir").is_ok());
/// assert!(ClubName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClubName(String);

impl ClubName {
    /// Validate and construct a club name.
    pub fn new(name: impl Into<String>) -> Result<Self, ClubValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ClubValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ClubName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ClubName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ClubName> for String {
    fn from(value: ClubName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ClubName {
    type Error = ClubValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role a user holds within a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ClubRole {
    /// The user who created the club.
    Owner,
}

impl ClubRole {
    /// Stable persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
        }
    }
}

impl fmt::Display for ClubRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable club record stored in the club-by-id view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: ClubId,
    pub name: ClubName,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Membership row partitioned by club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubMember {
    pub club_id: ClubId,
    pub user_id: UserId,
    pub join_id: JoinId,
    pub role: ClubRole,
    /// Copy of the user's display name at join time; may be empty.
    pub display_name: String,
}

/// Membership row partitioned by user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserClub {
    pub user_id: UserId,
    pub join_id: JoinId,
    pub club_id: ClubId,
    pub role: ClubRole,
    /// Copy of the club name at join time.
    pub club_name: ClubName,
}
