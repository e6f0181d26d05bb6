//! Integration tests for the Diesel club views against embedded PostgreSQL.
//!
//! Repeated writes must re-assert a row rather than duplicate it: the club
//! view keeps its first row, the membership views upsert on their natural
//! keys. A full creation over every Diesel adapter checks that both
//! membership views carry the guard's join id.

use std::sync::Arc;

use chrono::Utc;
use filmclub::domain::ports::{
    ClubCommand, ClubMemberRepository, ClubRepository, CreateClubRequest, UserClubRepository,
};
use filmclub::domain::{
    Club, ClubCreationService, ClubId, ClubMember, ClubName, ClubRole, JoinId,
    TimeOrderedIdGenerator, UserClub, UserId,
};
use filmclub::outbound::persistence::{
    DbPool, DieselClubMemberRepository, DieselClubRepository, DieselMembershipGuard,
    DieselUserClubRepository, PoolConfig,
};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{count_rows, format_postgres_error, handle_cluster_setup_failure, reset_database};

const TEST_DB: &str = "diesel_club_views_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    database_url: String,
    pool: DbPool,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database_url = reset_database(&cluster, TEST_DB)?;

    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(&database_url).with_max_size(4)))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        database_url,
        pool,
    })
}

#[fixture]
fn views_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn club(name: &str) -> Club {
    Club {
        id: ClubId::from_uuid(Uuid::now_v7()),
        name: ClubName::new(name).expect("valid name"),
        owner_id: UserId::random(),
        created_at: Utc::now(),
    }
}

fn single_text(database_url: &str, query: &str, id: &Uuid) -> String {
    let mut client = Client::connect(database_url, NoTls)
        .map_err(|err| format_postgres_error(&err))
        .expect("connect for assertions");
    client
        .query_one(query, &[id])
        .map(|row| row.get::<_, String>(0))
        .map_err(|err| format_postgres_error(&err))
        .expect("single row")
}

#[rstest]
fn repeated_club_write_keeps_the_first_row(views_context: Option<TestContext>) {
    let Some(context) = views_context else {
        eprintln!("SKIP-TEST-CLUSTER: repeated_club_write_keeps_the_first_row skipped");
        return;
    };
    let repository = DieselClubRepository::new(context.pool.clone());
    let original = club("Ozu Sundays");
    let mut renamed = original.clone();
    renamed.name = ClubName::new("Naruse Mondays").expect("valid name");

    context.runtime.block_on(async {
        repository.insert_club(&original).await.expect("first write");
        repository.insert_club(&renamed).await.expect("repeat write");
    });

    let rows = count_rows(
        &context.database_url,
        "SELECT COUNT(*) FROM film_clubs_by_id WHERE club_id = $1",
        &[original.id.as_uuid()],
    )
    .expect("count clubs");
    assert_eq!(rows, 1);
    let name = single_text(
        &context.database_url,
        "SELECT name FROM film_clubs_by_id WHERE club_id = $1",
        original.id.as_uuid(),
    );
    assert_eq!(name, "Ozu Sundays");
}

#[rstest]
fn repeated_member_write_leaves_one_row(views_context: Option<TestContext>) {
    let Some(context) = views_context else {
        eprintln!("SKIP-TEST-CLUSTER: repeated_member_write_leaves_one_row skipped");
        return;
    };
    let repository = DieselClubMemberRepository::new(context.pool.clone());
    let owned = club("Ozu Sundays");
    let member = ClubMember {
        club_id: owned.id,
        user_id: owned.owner_id,
        join_id: JoinId::from_uuid(Uuid::now_v7()),
        role: ClubRole::Owner,
        display_name: "Setsuko".to_owned(),
    };

    context.runtime.block_on(async {
        repository.insert_member(&member).await.expect("first write");
        repository.insert_member(&member).await.expect("repeat write");
    });

    let rows = count_rows(
        &context.database_url,
        "SELECT COUNT(*) FROM club_members_by_club WHERE club_id = $1 AND user_id = $2 AND join_id = $3",
        &[
            member.club_id.as_uuid(),
            member.user_id.as_uuid(),
            member.join_id.as_uuid(),
        ],
    )
    .expect("count members");
    assert_eq!(rows, 1);
}

#[rstest]
fn repeated_user_club_write_leaves_one_row(views_context: Option<TestContext>) {
    let Some(context) = views_context else {
        eprintln!("SKIP-TEST-CLUSTER: repeated_user_club_write_leaves_one_row skipped");
        return;
    };
    let repository = DieselUserClubRepository::new(context.pool.clone());
    let owned = club("Ozu Sundays");
    let entry = UserClub {
        user_id: owned.owner_id,
        join_id: JoinId::from_uuid(Uuid::now_v7()),
        club_id: owned.id,
        role: ClubRole::Owner,
        club_name: owned.name.clone(),
    };

    context.runtime.block_on(async {
        repository.insert_user_club(&entry).await.expect("first write");
        repository
            .insert_user_club(&entry)
            .await
            .expect("repeat write");
    });

    let rows = count_rows(
        &context.database_url,
        "SELECT COUNT(*) FROM user_clubs_by_user WHERE user_id = $1 AND club_id = $2 AND join_id = $3",
        &[
            entry.user_id.as_uuid(),
            entry.club_id.as_uuid(),
            entry.join_id.as_uuid(),
        ],
    )
    .expect("count user clubs");
    assert_eq!(rows, 1);
}

#[rstest]
fn creation_writes_every_view_with_the_guard_join_id(views_context: Option<TestContext>) {
    let Some(context) = views_context else {
        eprintln!("SKIP-TEST-CLUSTER: creation_writes_every_view_with_the_guard_join_id skipped");
        return;
    };
    let pool = context.pool.clone();
    let service = ClubCreationService::new(
        Arc::new(DieselClubRepository::new(pool.clone())),
        Arc::new(DieselClubMemberRepository::new(pool.clone())),
        Arc::new(DieselUserClubRepository::new(pool.clone())),
        Arc::new(DieselMembershipGuard::new(pool)),
        Arc::new(TimeOrderedIdGenerator),
        Arc::new(DefaultClock),
    );
    let owner = UserId::random();

    let created = context
        .runtime
        .block_on(service.create_club(CreateClubRequest {
            owner_id: owner,
            name: "Giallo Nights".to_owned(),
            owner_display_name: Some("Dario".to_owned()),
        }))
        .expect("club creation succeeds");

    let consistent = count_rows(
        &context.database_url,
        "SELECT COUNT(*) FROM membership_guards g \
         JOIN club_members_by_club m \
           ON m.club_id = g.club_id AND m.user_id = g.user_id AND m.join_id = g.join_id \
         JOIN user_clubs_by_user u \
           ON u.club_id = g.club_id AND u.user_id = g.user_id AND u.join_id = g.join_id \
         WHERE g.club_id = $1 AND g.user_id = $2",
        &[created.club_id.as_uuid(), owner.as_uuid()],
    )
    .expect("count consistent views");
    assert_eq!(consistent, 1);
    let role = single_text(
        &context.database_url,
        "SELECT role FROM club_members_by_club WHERE club_id = $1",
        created.club_id.as_uuid(),
    );
    assert_eq!(role, "owner");
}
