//! Port for the clubs-by-user view.

use async_trait::async_trait;

use crate::domain::UserClub;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user club repository adapters.
    pub enum UserClubRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user club repository connection failed: {message}",
        /// Write failed during execution.
        Query { message: String } =>
            "user club repository query failed: {message}",
    }
}

/// Write side of the clubs-by-user view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserClubRepository: Send + Sync {
    /// Upsert a membership row keyed by user, join id and club.
    async fn insert_user_club(&self, entry: &UserClub) -> Result<(), UserClubRepositoryError>;
}

/// Fixture implementation that accepts every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserClubRepository;

#[async_trait]
impl UserClubRepository for FixtureUserClubRepository {
    async fn insert_user_club(&self, _entry: &UserClub) -> Result<(), UserClubRepositoryError> {
        Ok(())
    }
}
