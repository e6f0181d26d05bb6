//! Concurrency checks for the membership guard and the views it feeds.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use filmclub::domain::ports::{ClubCommand, CreateClubRequest, MembershipGuard};
use filmclub::domain::{ClubCreationService, ClubId, IdGenerator, JoinId, UserId};
use filmclub::outbound::memory::{
    InMemoryClubMemberRepository, InMemoryClubRepository, InMemoryMembershipGuard,
    InMemoryUserClubRepository,
};
use futures::future::join_all;
use mockable::DefaultClock;
use rstest::rstest;
use uuid::Uuid;

const CLUB: Uuid = Uuid::from_u128(0x0192_a6f0_7c1e_7b8a_9d2f_3e4a_5b6c_7d8e);

/// Every creation targets the same club; join candidates stay distinct.
struct SameClubIds {
    calls: AtomicU64,
}

impl IdGenerator for SameClubIds {
    fn next_id(&self) -> Uuid {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call % 2 == 0 {
            CLUB
        } else {
            Uuid::from_u128(u128::from(call))
        }
    }
}

struct Stores {
    clubs: Arc<InMemoryClubRepository>,
    members: Arc<InMemoryClubMemberRepository>,
    user_clubs: Arc<InMemoryUserClubRepository>,
    guard: Arc<InMemoryMembershipGuard>,
}

impl Stores {
    fn new() -> Self {
        Self {
            clubs: Arc::new(InMemoryClubRepository::new()),
            members: Arc::new(InMemoryClubMemberRepository::new()),
            user_clubs: Arc::new(InMemoryUserClubRepository::new()),
            guard: Arc::new(InMemoryMembershipGuard::new()),
        }
    }

    fn service(&self) -> Arc<dyn ClubCommand> {
        Arc::new(ClubCreationService::new(
            self.clubs.clone(),
            self.members.clone(),
            self.user_clubs.clone(),
            self.guard.clone(),
            Arc::new(SameClubIds {
                calls: AtomicU64::new(0),
            }),
            Arc::new(DefaultClock),
        ))
    }
}

#[rstest]
#[case(2)]
#[case(16)]
// Current-thread runtime: each creation draws its club and candidate ids
// without yielding in between, so the pairs never interleave.
#[tokio::test]
async fn racing_creations_share_one_join_id(#[case] racers: usize) {
    let stores = Stores::new();
    let service = stores.service();
    let owner = UserId::random();

    let tasks = (0..racers).map(|_| {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .create_club(CreateClubRequest {
                    owner_id: owner,
                    name: "Giallo Nights".to_owned(),
                    owner_display_name: None,
                })
                .await
        })
    });
    let results = join_all(tasks).await;

    let club_id = ClubId::from_uuid(CLUB);
    for result in results {
        let created = result.expect("task joins").expect("creation succeeds");
        assert_eq!(created.club_id, club_id);
    }

    let canonical = stores
        .guard
        .entry(&club_id, &owner)
        .expect("guard entry exists");
    let members = stores.members.members_of(&club_id);
    let user_clubs = stores.user_clubs.clubs_of(&owner);
    assert_eq!(members.len(), 1);
    assert_eq!(user_clubs.len(), 1);
    assert_eq!(members[0].join_id, canonical);
    assert_eq!(user_clubs[0].join_id, canonical);
    assert_eq!(stores.clubs.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn guard_applies_exactly_one_candidate_under_contention() {
    let guard = Arc::new(InMemoryMembershipGuard::new());
    let club_id = ClubId::from_uuid(CLUB);
    let owner = UserId::random();

    let tasks = (1..=32u128).map(|n| {
        let guard = guard.clone();
        tokio::spawn(async move {
            let candidate = JoinId::from_uuid(Uuid::from_u128(n));
            let outcome = guard
                .try_establish(&club_id, &owner, candidate)
                .await
                .expect("guard answers");
            (candidate, outcome)
        })
    });
    let outcomes: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.expect("task joins"))
        .collect();

    let applied: Vec<_> = outcomes.iter().filter(|(_, outcome)| outcome.applied).collect();
    assert_eq!(applied.len(), 1);
    let (winner, _) = applied[0];
    assert!(
        outcomes
            .iter()
            .all(|(_, outcome)| outcome.winning_join_id == *winner)
    );
    assert_eq!(guard.entry(&club_id, &owner), Some(*winner));
}

#[rstest]
#[tokio::test]
async fn separate_owners_get_separate_memberships() {
    let stores = Stores::new();
    let club_id = ClubId::from_uuid(CLUB);
    let first = UserId::random();
    let second = UserId::random();

    let first_join = stores
        .guard
        .try_establish(&club_id, &first, JoinId::from_uuid(Uuid::from_u128(1)))
        .await
        .expect("guard answers");
    let second_join = stores
        .guard
        .try_establish(&club_id, &second, JoinId::from_uuid(Uuid::from_u128(2)))
        .await
        .expect("guard answers");

    assert!(first_join.applied);
    assert!(second_join.applied);
    assert_ne!(first_join.winning_join_id, second_join.winning_join_id);
}
