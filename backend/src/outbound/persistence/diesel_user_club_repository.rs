//! PostgreSQL-backed `UserClubRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::UserClub;
use crate::domain::ports::{UserClubRepository, UserClubRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserClubRow, UserClubUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::user_clubs_by_user;

/// Diesel-backed implementation of the clubs-by-user view.
#[derive(Clone)]
pub struct DieselUserClubRepository {
    pool: DbPool,
}

impl DieselUserClubRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserClubRepositoryError {
    map_basic_pool_error(error, UserClubRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserClubRepositoryError {
    map_basic_diesel_error(
        error,
        UserClubRepositoryError::query,
        UserClubRepositoryError::connection,
    )
}

#[async_trait]
impl UserClubRepository for DieselUserClubRepository {
    async fn insert_user_club(&self, entry: &UserClub) -> Result<(), UserClubRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserClubRow {
            user_id: *entry.user_id.as_uuid(),
            club_id: *entry.club_id.as_uuid(),
            join_id: *entry.join_id.as_uuid(),
            role: entry.role.as_str(),
            club_name: entry.club_name.as_ref(),
        };
        let update = UserClubUpdate {
            join_id: row.join_id,
            role: row.role,
            club_name: row.club_name,
        };

        diesel::insert_into(user_clubs_by_user::table)
            .values(&row)
            .on_conflict((user_clubs_by_user::user_id, user_clubs_by_user::club_id))
            .do_update()
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
