//! Club creation orchestration.
//!
//! Creating a club touches four collections with no shared transaction:
//! 1. the club-by-id view;
//! 2. the membership guard, which fixes the owner's canonical join id;
//! 3. the members-by-club and clubs-by-user views, written concurrently with
//!    the guard's winning join id.
//!
//! Each step runs at most once and the first failure is returned. Rows
//! written before a failure stay in place; a retry re-asserts them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ClubCommand, ClubMemberRepository, ClubMemberRepositoryError, ClubRepository,
    ClubRepositoryError, CreateClubRequest, CreateClubResponse, MembershipGuard,
    MembershipGuardError, UserClubRepository, UserClubRepositoryError,
};
use crate::domain::{
    Club, ClubId, ClubMember, ClubName, ClubRole, Error, IdGenerator, JoinId, UserClub,
};

/// Write step of a club creation, reported when the creation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationStep {
    /// Inserting the club-by-id row.
    WriteClub,
    /// Resolving the join id through the membership guard.
    EstablishMembership,
    /// Writing the owner into the members-by-club view.
    WriteMemberView,
    /// Writing the club into the owner's clubs-by-user view.
    WriteUserClubView,
}

impl CreationStep {
    /// Stable label used in logs and error details.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WriteClub => "write_club",
            Self::EstablishMembership => "establish_membership",
            Self::WriteMemberView => "write_member_view",
            Self::WriteUserClubView => "write_user_club_view",
        }
    }
}

impl fmt::Display for CreationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn map_club_error(error: ClubRepositoryError) -> Error {
    match error {
        ClubRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("club repository unavailable: {message}"))
        }
        ClubRepositoryError::Query { message } => {
            Error::internal(format!("club repository error: {message}"))
        }
    }
}

fn map_guard_error(error: MembershipGuardError) -> Error {
    match error {
        MembershipGuardError::Connection { message } => {
            Error::service_unavailable(format!("membership guard unavailable: {message}"))
        }
        MembershipGuardError::Query { message } => {
            Error::internal(format!("membership guard error: {message}"))
        }
        missing @ MembershipGuardError::EntryMissing { .. } => {
            Error::internal(format!("membership consistency violation: {missing}"))
        }
    }
}

fn map_member_error(error: ClubMemberRepositoryError) -> Error {
    match error {
        ClubMemberRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("club member repository unavailable: {message}"))
        }
        ClubMemberRepositoryError::Query { message } => {
            Error::internal(format!("club member repository error: {message}"))
        }
    }
}

fn map_user_club_error(error: UserClubRepositoryError) -> Error {
    match error {
        UserClubRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user club repository unavailable: {message}"))
        }
        UserClubRepositoryError::Query { message } => {
            Error::internal(format!("user club repository error: {message}"))
        }
    }
}

fn failed_at(step: CreationStep, club: &Club, error: Error) -> Error {
    warn!(
        step = %step,
        club_id = %club.id,
        owner_id = %club.owner_id,
        code = ?error.code(),
        error = %error,
        "club creation failed"
    );
    error.with_details(json!({ "step": step, "clubId": club.id }))
}

/// Domain service implementing [`ClubCommand`].
#[derive(Clone)]
pub struct ClubCreationService<C, M, U, G> {
    clubs: Arc<C>,
    members: Arc<M>,
    user_clubs: Arc<U>,
    guard: Arc<G>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<C, M, U, G> ClubCreationService<C, M, U, G> {
    /// Create a service over the three view repositories and the guard.
    pub fn new(
        clubs: Arc<C>,
        members: Arc<M>,
        user_clubs: Arc<U>,
        guard: Arc<G>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            clubs,
            members,
            user_clubs,
            guard,
            ids,
            clock,
        }
    }
}

impl<C, M, U, G> ClubCreationService<C, M, U, G>
where
    C: ClubRepository,
    M: ClubMemberRepository,
    U: UserClubRepository,
    G: MembershipGuard,
{
    async fn resolve_join_id(&self, club: &Club, candidate: JoinId) -> Result<JoinId, Error> {
        let outcome = match self
            .guard
            .try_establish(&club.id, &club.owner_id, candidate)
            .await
        {
            Ok(outcome) => outcome,
            Err(guard_error) => {
                if guard_error.is_consistency_violation() {
                    error!(
                        consistency_violation = true,
                        club_id = %club.id,
                        user_id = %club.owner_id,
                        error = %guard_error,
                        "membership guard entry missing after rejected insert"
                    );
                }
                return Err(failed_at(
                    CreationStep::EstablishMembership,
                    club,
                    map_guard_error(guard_error),
                ));
            }
        };

        if outcome.applied {
            return Ok(candidate);
        }
        warn!(
            club_id = %club.id,
            user_id = %club.owner_id,
            candidate = %candidate,
            winner = %outcome.winning_join_id,
            "membership guard resolved to existing join id"
        );
        Ok(outcome.winning_join_id)
    }

    async fn write_member_view(&self, club: &Club, member: &ClubMember) -> Result<(), Error> {
        self.members
            .insert_member(member)
            .await
            .map_err(|err| failed_at(CreationStep::WriteMemberView, club, map_member_error(err)))
    }

    async fn write_user_club_view(&self, club: &Club, entry: &UserClub) -> Result<(), Error> {
        self.user_clubs
            .insert_user_club(entry)
            .await
            .map_err(|err| {
                failed_at(
                    CreationStep::WriteUserClubView,
                    club,
                    map_user_club_error(err),
                )
            })
    }
}

#[async_trait]
impl<C, M, U, G> ClubCommand for ClubCreationService<C, M, U, G>
where
    C: ClubRepository,
    M: ClubMemberRepository,
    U: UserClubRepository,
    G: MembershipGuard,
{
    async fn create_club(&self, request: CreateClubRequest) -> Result<CreateClubResponse, Error> {
        let name = ClubName::new(request.name).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
        })?;

        let club = Club {
            id: ClubId::from_uuid(self.ids.next_id()),
            name,
            owner_id: request.owner_id,
            created_at: self.clock.utc(),
        };
        let candidate = JoinId::from_uuid(self.ids.next_id());

        self.clubs
            .insert_club(&club)
            .await
            .map_err(|err| failed_at(CreationStep::WriteClub, &club, map_club_error(err)))?;

        let join_id = self.resolve_join_id(&club, candidate).await?;

        let member = ClubMember {
            club_id: club.id,
            user_id: club.owner_id,
            join_id,
            role: ClubRole::Owner,
            display_name: request.owner_display_name.unwrap_or_default(),
        };
        let user_club = UserClub {
            user_id: club.owner_id,
            join_id,
            club_id: club.id,
            role: ClubRole::Owner,
            club_name: club.name.clone(),
        };

        // The first error drops the sibling future and its in-flight write.
        tokio::try_join!(
            self.write_member_view(&club, &member),
            self.write_user_club_view(&club, &user_club),
        )?;

        info!(
            club_id = %club.id,
            owner_id = %club.owner_id,
            join_id = %join_id,
            "club created"
        );
        Ok(CreateClubResponse {
            club_id: club.id,
            created_at: club.created_at,
        })
    }
}

#[cfg(test)]
#[path = "club_creation_service_tests.rs"]
mod tests;
