//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{club_members_by_club, film_clubs_by_id, membership_guards, user_clubs_by_user};

/// Insertable struct for the club-by-id view.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = film_clubs_by_id)]
pub(crate) struct NewClubRow<'a> {
    pub club_id: Uuid,
    pub name: &'a str,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for the members-by-club view.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = club_members_by_club)]
pub(crate) struct NewClubMemberRow<'a> {
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub join_id: Uuid,
    pub role: &'a str,
    pub display_name: &'a str,
}

/// Changeset re-asserting a member row on conflict.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = club_members_by_club)]
pub(crate) struct ClubMemberUpdate<'a> {
    pub join_id: Uuid,
    pub role: &'a str,
    pub display_name: &'a str,
}

/// Insertable struct for the clubs-by-user view.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_clubs_by_user)]
pub(crate) struct NewUserClubRow<'a> {
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub join_id: Uuid,
    pub role: &'a str,
    pub club_name: &'a str,
}

/// Changeset re-asserting a user club row on conflict.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = user_clubs_by_user)]
pub(crate) struct UserClubUpdate<'a> {
    pub join_id: Uuid,
    pub role: &'a str,
    pub club_name: &'a str,
}

/// Insertable struct for a guard entry; `established_at` uses the column
/// default.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = membership_guards)]
pub(crate) struct NewMembershipGuardRow {
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub join_id: Uuid,
}
