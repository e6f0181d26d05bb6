//! In-process adapters for the club views and the membership guard.
//!
//! Used by tests and by servers started without a database URL. Each table is
//! a `Mutex<HashMap>`; the guard checks and inserts under one lock, which
//! gives it the same compare-and-swap semantics as the conditional insert of
//! the PostgreSQL adapter.

mod guard;
mod views;

pub use guard::InMemoryMembershipGuard;
pub use views::{InMemoryClubMemberRepository, InMemoryClubRepository, InMemoryUserClubRepository};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a table, reporting poisoning through the adapter's query error.
fn lock_table<'a, T, E>(
    table: &'a Mutex<T>,
    query: impl FnOnce(&'static str) -> E,
) -> Result<MutexGuard<'a, T>, E> {
    table.lock().map_err(|_| query("in-memory table lock poisoned"))
}

/// Lock a table for the read accessors.
///
/// A poisoned lock still yields the table. Writers replace whole rows under
/// the lock, so a reader never sees a half-written entry.
fn read_table<T>(table: &Mutex<T>) -> MutexGuard<'_, T> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}
