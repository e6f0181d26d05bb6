//! Database reset, schema setup and row inspection for embedded PostgreSQL.
//!
//! Reset uses the plain `postgres` client because `DROP DATABASE` cannot run
//! inside the transaction Diesel opens. The schema comes from the same
//! embedded migrations the server applies at startup.

use filmclub::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::types::ToSql;
use postgres::{Client, NoTls};

use super::format_postgres_error;

/// Recreate `name` on the cluster, apply migrations and return its URL.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // One statement per call: a multi-statement batch runs as an implicit
    // transaction, which DROP DATABASE refuses.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        admin
            .batch_execute(&statement)
            .map_err(|err| format_postgres_error(&err))?;
    }

    let database_url = cluster.connection().database_url(name);
    run_pending_migrations(&database_url).map_err(|err| err.to_string())?;
    Ok(database_url)
}

/// Count rows matching `query`, which must select a single `COUNT(*)`.
pub fn count_rows(
    database_url: &str,
    query: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<i64, String> {
    let mut client = Client::connect(database_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .query_one(query, params)
        .map(|row| row.get::<_, i64>(0))
        .map_err(|err| format_postgres_error(&err))
}
