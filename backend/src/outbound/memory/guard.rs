//! In-memory `MembershipGuard`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{GuardOutcome, MembershipGuard, MembershipGuardError};
use crate::domain::{ClubId, JoinId, UserId};

use super::{lock_table, read_table};

/// Write-once guard table keyed by `(club, user)`.
#[derive(Debug, Default)]
pub struct InMemoryMembershipGuard {
    entries: Mutex<HashMap<(ClubId, UserId), JoinId>>,
}

impl InMemoryMembershipGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the established join id for a membership, if any.
    pub fn entry(&self, club_id: &ClubId, user_id: &UserId) -> Option<JoinId> {
        read_table(&self.entries)
            .get(&(*club_id, *user_id))
            .copied()
    }
}

#[async_trait]
impl MembershipGuard for InMemoryMembershipGuard {
    async fn try_establish(
        &self,
        club_id: &ClubId,
        user_id: &UserId,
        candidate: JoinId,
    ) -> Result<GuardOutcome, MembershipGuardError> {
        let mut entries = lock_table(&self.entries, MembershipGuardError::query)?;
        match entries.entry((*club_id, *user_id)) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
                Ok(GuardOutcome::applied(candidate))
            }
            Entry::Occupied(existing) => Ok(GuardOutcome::existing(*existing.get())),
        }
    }
}
