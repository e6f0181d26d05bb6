//! PostgreSQL-backed `ClubRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::Club;
use crate::domain::ports::{ClubRepository, ClubRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewClubRow;
use super::pool::{DbPool, PoolError};
use super::schema::film_clubs_by_id;

/// Diesel-backed implementation of the club-by-id view.
#[derive(Clone)]
pub struct DieselClubRepository {
    pool: DbPool,
}

impl DieselClubRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClubRepositoryError {
    map_basic_pool_error(error, ClubRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ClubRepositoryError {
    map_basic_diesel_error(
        error,
        ClubRepositoryError::query,
        ClubRepositoryError::connection,
    )
}

#[async_trait]
impl ClubRepository for DieselClubRepository {
    async fn insert_club(&self, club: &Club) -> Result<(), ClubRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewClubRow {
            club_id: *club.id.as_uuid(),
            name: club.name.as_ref(),
            owner_id: *club.owner_id.as_uuid(),
            created_at: club.created_at,
        };

        // Clubs are immutable, so a repeated write keeps the first row.
        diesel::insert_into(film_clubs_by_id::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
