//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed club views and membership guard
//! - **memory**: in-process equivalents for tests and database-less runs
//! - **tmdb**: reqwest-backed movie catalogue search
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod tmdb;
