//! Port for the club-by-id view.

use async_trait::async_trait;

use crate::domain::Club;

use super::define_port_error;

define_port_error! {
    /// Errors raised by club repository adapters.
    pub enum ClubRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "club repository connection failed: {message}",
        /// Write failed during execution.
        Query { message: String } =>
            "club repository query failed: {message}",
    }
}

/// Write side of the club-by-id view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Persist a freshly created club.
    ///
    /// Writing the same club twice re-asserts the row rather than failing.
    async fn insert_club(&self, club: &Club) -> Result<(), ClubRepositoryError>;
}

/// Fixture implementation that accepts every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClubRepository;

#[async_trait]
impl ClubRepository for FixtureClubRepository {
    async fn insert_club(&self, _club: &Club) -> Result<(), ClubRepositoryError> {
        Ok(())
    }
}
