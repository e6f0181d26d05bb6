//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each club view and the membership guard has one adapter over a shared
//! [`DbPool`]. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use filmclub::outbound::persistence::{DbPool, DieselMembershipGuard, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/filmclub")).await?;
//! let guard = DieselMembershipGuard::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_club_member_repository;
mod diesel_club_repository;
mod diesel_membership_guard;
mod diesel_user_club_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_club_member_repository::DieselClubMemberRepository;
pub use diesel_club_repository::DieselClubRepository;
pub use diesel_membership_guard::DieselMembershipGuard;
pub use diesel_user_club_repository::DieselUserClubRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
