//! Port for the members-by-club view.

use async_trait::async_trait;

use crate::domain::ClubMember;

use super::define_port_error;

define_port_error! {
    /// Errors raised by club member repository adapters.
    pub enum ClubMemberRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "club member repository connection failed: {message}",
        /// Write failed during execution.
        Query { message: String } =>
            "club member repository query failed: {message}",
    }
}

/// Write side of the members-by-club view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubMemberRepository: Send + Sync {
    /// Upsert a membership row keyed by club, join id and user.
    async fn insert_member(&self, member: &ClubMember) -> Result<(), ClubMemberRepositoryError>;
}

/// Fixture implementation that accepts every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClubMemberRepository;

#[async_trait]
impl ClubMemberRepository for FixtureClubMemberRepository {
    async fn insert_member(&self, _member: &ClubMember) -> Result<(), ClubMemberRepositoryError> {
        Ok(())
    }
}
