//! PostgreSQL-backed `MembershipGuard` using a conditional insert.
//!
//! `INSERT ... ON CONFLICT DO NOTHING` is the compare-and-swap: one affected
//! row means this call created the entry, zero means another writer got there
//! first and the existing join id is read back on the same connection.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{GuardOutcome, MembershipGuard, MembershipGuardError};
use crate::domain::{ClubId, JoinId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewMembershipGuardRow;
use super::pool::{DbPool, PoolError};
use super::schema::membership_guards;

/// Diesel-backed implementation of the membership guard port.
#[derive(Clone)]
pub struct DieselMembershipGuard {
    pool: DbPool,
}

impl DieselMembershipGuard {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MembershipGuardError {
    map_basic_pool_error(error, MembershipGuardError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MembershipGuardError {
    map_basic_diesel_error(
        error,
        MembershipGuardError::query,
        MembershipGuardError::connection,
    )
}

/// Interpret the affected-row count of the conditional insert.
fn insert_applied(affected: usize) -> Result<bool, MembershipGuardError> {
    match affected {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(MembershipGuardError::query(format!(
            "conditional insert affected {other} rows"
        ))),
    }
}

#[async_trait]
impl MembershipGuard for DieselMembershipGuard {
    async fn try_establish(
        &self,
        club_id: &ClubId,
        user_id: &UserId,
        candidate: JoinId,
    ) -> Result<GuardOutcome, MembershipGuardError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewMembershipGuardRow {
            club_id: *club_id.as_uuid(),
            user_id: *user_id.as_uuid(),
            join_id: *candidate.as_uuid(),
        };

        let affected = diesel::insert_into(membership_guards::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if insert_applied(affected)? {
            return Ok(GuardOutcome::applied(candidate));
        }

        let existing = membership_guards::table
            .filter(membership_guards::club_id.eq(row.club_id))
            .filter(membership_guards::user_id.eq(row.user_id))
            .select(membership_guards::join_id)
            .first::<Uuid>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match existing {
            Some(winner) => {
                debug!(%club_id, %user_id, %winner, "membership guard insert rejected");
                Ok(GuardOutcome::existing(JoinId::from_uuid(winner)))
            }
            None => Err(MembershipGuardError::entry_missing(row.club_id, row.user_id)),
        }
    }
}
