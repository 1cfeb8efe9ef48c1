//! Schema migration registry for the daykeep store.
//!
//! # Responsibility
//! - Carry every schema step the store has shipped, labeled and in order.
//! - Bring an opened connection from its recorded version to the latest.
//!
//! # Invariants
//! - Registry versions are strictly increasing.
//! - Each step's DDL and its `user_version` bump commit in one transaction.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// One shipped schema step.
#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    label: &'static str,
    sql: &'static str,
}

const REGISTRY: &[Migration] = &[
    Migration {
        version: 1,
        label: "items_and_tasks",
        sql: include_str!("0001_init.sql"),
    },
    Migration {
        version: 2,
        label: "tags_and_links",
        sql: include_str!("0002_tags.sql"),
    },
];

/// Latest schema version this build can produce.
pub fn latest_version() -> u32 {
    REGISTRY.last().map_or(0, |step| step.version)
}

/// Brings `conn` up to [`latest_version`], applying pending steps in order.
///
/// A database recorded at a version this build does not know is refused
/// rather than touched.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::SchemaAhead { found, supported });
    }
    if found == supported {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in REGISTRY.iter().filter(|step| step.version > found) {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
        log::info!(
            "event=db_migrate module=db status=applied version={} label={}",
            step.version,
            step.label
        );
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version recorded on the connection.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}
