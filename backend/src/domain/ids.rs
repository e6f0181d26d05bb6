//! Identifier generation.
//!
//! Club and join identifiers are UUID v7 values: unique, and ordered by the
//! millisecond they were minted in, so they double as creation markers.

use uuid::Uuid;

/// Source of fresh, time-ordered identifiers.
pub trait IdGenerator: Send + Sync {
    /// Mint a new identifier.
    fn next_id(&self) -> Uuid;
}

/// UUID v7 generator.
///
/// `uuid` keeps a process-wide counter for v7 values, so identifiers minted
/// within the same millisecond still sort in creation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeOrderedIdGenerator;

impl IdGenerator for TimeOrderedIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}
