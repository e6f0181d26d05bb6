//! Shared Diesel error mapping for the club view and guard adapters.
//!
//! Every adapter port error exposes `Connection` and `Query` constructors;
//! these helpers route pool and Diesel failures onto them.

use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure onto the adapter's connection error.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map a Diesel failure onto the adapter's query or connection error.
///
/// Closed connections and unreachable servers are connection faults; every
/// other failure is a query fault. Database messages are logged at debug and
/// not propagated, so constraint details stay out of API responses.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::BrokenTransactionManager => connection("database connection error"),
        DieselError::NotFound => query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            query("unique constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            query("check constraint violated")
        }
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn query(message: &'static str) -> Mapped {
        Mapped::Query(message.to_owned())
    }

    fn connection(message: &'static str) -> Mapped {
        Mapped::Connection(message.to_owned())
    }

    #[rstest]
    fn pool_checkout_maps_to_connection() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), |message| {
            Mapped::Connection(message)
        });
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }

    #[rstest]
    fn not_found_maps_to_query() {
        let mapped = map_basic_diesel_error(diesel::result::Error::NotFound, query, connection);
        assert_eq!(mapped, Mapped::Query("record not found".to_owned()));
    }

    #[rstest]
    fn broken_transaction_manager_maps_to_connection() {
        let mapped = map_basic_diesel_error(
            diesel::result::Error::BrokenTransactionManager,
            query,
            connection,
        );
        assert_eq!(mapped, Mapped::Connection("database connection error".to_owned()));
    }
}
