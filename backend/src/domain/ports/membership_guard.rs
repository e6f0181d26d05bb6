//! Compare-and-swap port establishing one canonical join id per membership.
//!
//! The guard owns a write-once table keyed by `(club, user)`. Establishing an
//! entry is a single conditional insert; when the insert is rejected the
//! adapter reads the existing value back and reports it as the winner. An
//! adapter must never fall back to read-then-write.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ClubId, JoinId, UserId};

use super::define_port_error;

/// Result of a guard attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    /// `true` when this call created the entry.
    pub applied: bool,
    /// Join id stored in the entry after the call.
    ///
    /// Equals the candidate when `applied` is `true`.
    pub winning_join_id: JoinId,
}

impl GuardOutcome {
    /// Outcome for a conditional insert that created the entry.
    pub fn applied(candidate: JoinId) -> Self {
        Self {
            applied: true,
            winning_join_id: candidate,
        }
    }

    /// Outcome for a rejected insert that observed an existing entry.
    pub fn existing(winner: JoinId) -> Self {
        Self {
            applied: false,
            winning_join_id: winner,
        }
    }
}

define_port_error! {
    /// Errors raised by membership guard adapters.
    pub enum MembershipGuardError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "membership guard connection failed: {message}",
        /// Conditional insert or follow-up read failed during execution.
        Query { message: String } =>
            "membership guard query failed: {message}",
        /// The conditional insert was rejected but no entry could be read back.
        EntryMissing { club_id: Uuid, user_id: Uuid } =>
            "membership guard rejected insert for club {club_id} user {user_id} but no entry exists",
    }
}

impl MembershipGuardError {
    /// Whether the failure is an invariant breach rather than an outage.
    pub fn is_consistency_violation(&self) -> bool {
        matches!(self, Self::EntryMissing { .. })
    }
}

/// Port for establishing the canonical join id of a membership.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipGuard: Send + Sync {
    /// Atomically record `candidate` for `(club_id, user_id)` unless an entry
    /// already exists, and report which join id won.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use filmclub::domain::{ClubId, JoinId, UserId};
    /// use filmclub::domain::ports::{FixtureMembershipGuard, MembershipGuard};
    /// use uuid::Uuid;
    ///
    /// # async fn example() -> Result<(), filmclub::domain::ports::MembershipGuardError> {
    /// let candidate = JoinId::from_uuid(Uuid::now_v7());
    /// let outcome = FixtureMembershipGuard
    ///     .try_establish(&ClubId::from_uuid(Uuid::now_v7()), &UserId::random(), candidate)
    ///     .await?;
    /// assert!(outcome.applied);
    /// assert_eq!(outcome.winning_join_id, candidate);
    /// # Ok(())
    /// # }
    /// ```
    async fn try_establish(
        &self,
        club_id: &ClubId,
        user_id: &UserId,
        candidate: JoinId,
    ) -> Result<GuardOutcome, MembershipGuardError>;
}

/// Fixture guard that reports every candidate as applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMembershipGuard;

#[async_trait]
impl MembershipGuard for FixtureMembershipGuard {
    async fn try_establish(
        &self,
        _club_id: &ClubId,
        _user_id: &UserId,
        candidate: JoinId,
    ) -> Result<GuardOutcome, MembershipGuardError> {
        Ok(GuardOutcome::applied(candidate))
    }
}
