//! PostgreSQL-backed `ClubMemberRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ClubMember;
use crate::domain::ports::{ClubMemberRepository, ClubMemberRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ClubMemberUpdate, NewClubMemberRow};
use super::pool::{DbPool, PoolError};
use super::schema::club_members_by_club;

/// Diesel-backed implementation of the members-by-club view.
#[derive(Clone)]
pub struct DieselClubMemberRepository {
    pool: DbPool,
}

impl DieselClubMemberRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClubMemberRepositoryError {
    map_basic_pool_error(error, ClubMemberRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ClubMemberRepositoryError {
    map_basic_diesel_error(
        error,
        ClubMemberRepositoryError::query,
        ClubMemberRepositoryError::connection,
    )
}

#[async_trait]
impl ClubMemberRepository for DieselClubMemberRepository {
    async fn insert_member(&self, member: &ClubMember) -> Result<(), ClubMemberRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewClubMemberRow {
            club_id: *member.club_id.as_uuid(),
            user_id: *member.user_id.as_uuid(),
            join_id: *member.join_id.as_uuid(),
            role: member.role.as_str(),
            display_name: &member.display_name,
        };
        let update = ClubMemberUpdate {
            join_id: row.join_id,
            role: row.role,
            display_name: row.display_name,
        };

        diesel::insert_into(club_members_by_club::table)
            .values(&row)
            .on_conflict((club_members_by_club::club_id, club_members_by_club::user_id))
            .do_update()
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
