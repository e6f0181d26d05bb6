//! In-memory club views.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{
    ClubMemberRepository, ClubMemberRepositoryError, ClubRepository, ClubRepositoryError,
    UserClubRepository, UserClubRepositoryError,
};
use crate::domain::{Club, ClubId, ClubMember, UserClub, UserId};

use super::{lock_table, read_table};

/// Club-by-id view.
#[derive(Debug, Default)]
pub struct InMemoryClubRepository {
    clubs: Mutex<HashMap<ClubId, Club>>,
}

impl InMemoryClubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, club_id: &ClubId) -> Option<Club> {
        read_table(&self.clubs).get(club_id).cloned()
    }

    /// Every stored club, oldest first.
    pub fn all(&self) -> Vec<Club> {
        let mut clubs: Vec<Club> = read_table(&self.clubs).values().cloned().collect();
        clubs.sort_by_key(|club| (club.created_at, club.id));
        clubs
    }

    pub fn len(&self) -> usize {
        read_table(&self.clubs).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ClubRepository for InMemoryClubRepository {
    async fn insert_club(&self, club: &Club) -> Result<(), ClubRepositoryError> {
        let mut clubs = lock_table(&self.clubs, ClubRepositoryError::query)?;
        clubs.entry(club.id).or_insert_with(|| club.clone());
        Ok(())
    }
}

/// Members-by-club view, one row per `(club, user)`.
#[derive(Debug, Default)]
pub struct InMemoryClubMemberRepository {
    members: Mutex<HashMap<(ClubId, UserId), ClubMember>>,
}

impl InMemoryClubMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Members of a club ordered by join id.
    pub fn members_of(&self, club_id: &ClubId) -> Vec<ClubMember> {
        let mut members: Vec<ClubMember> = read_table(&self.members)
            .values()
            .filter(|member| member.club_id == *club_id)
            .cloned()
            .collect();
        members.sort_by_key(|member| member.join_id);
        members
    }
}

#[async_trait]
impl ClubMemberRepository for InMemoryClubMemberRepository {
    async fn insert_member(&self, member: &ClubMember) -> Result<(), ClubMemberRepositoryError> {
        let mut members = lock_table(&self.members, ClubMemberRepositoryError::query)?;
        members.insert((member.club_id, member.user_id), member.clone());
        Ok(())
    }
}

/// Clubs-by-user view, one row per `(user, club)`.
#[derive(Debug, Default)]
pub struct InMemoryUserClubRepository {
    entries: Mutex<HashMap<(UserId, ClubId), UserClub>>,
}

impl InMemoryUserClubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clubs a user belongs to ordered by join id.
    pub fn clubs_of(&self, user_id: &UserId) -> Vec<UserClub> {
        let mut entries: Vec<UserClub> = read_table(&self.entries)
            .values()
            .filter(|entry| entry.user_id == *user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.join_id);
        entries
    }
}

#[async_trait]
impl UserClubRepository for InMemoryUserClubRepository {
    async fn insert_user_club(&self, entry: &UserClub) -> Result<(), UserClubRepositoryError> {
        let mut entries = lock_table(&self.entries, UserClubRepositoryError::query)?;
        entries.insert((entry.user_id, entry.club_id), entry.clone());
        Ok(())
    }
}
