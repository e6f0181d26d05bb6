//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Club-by-id view. One immutable row per club.
    film_clubs_by_id (club_id) {
        club_id -> Uuid,
        name -> Text,
        owner_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Members-by-club view, keyed by `(club_id, user_id)`.
    club_members_by_club (club_id, user_id) {
        club_id -> Uuid,
        user_id -> Uuid,
        /// Canonical join id from `membership_guards`; orders members.
        join_id -> Uuid,
        role -> Text,
        display_name -> Text,
    }
}

diesel::table! {
    /// Clubs-by-user view, keyed by `(user_id, club_id)`.
    user_clubs_by_user (user_id, club_id) {
        user_id -> Uuid,
        club_id -> Uuid,
        join_id -> Uuid,
        role -> Text,
        club_name -> Text,
    }
}

diesel::table! {
    /// Write-once guard entries establishing one join id per membership.
    membership_guards (club_id, user_id) {
        club_id -> Uuid,
        user_id -> Uuid,
        join_id -> Uuid,
        established_at -> Timestamptz,
    }
}
