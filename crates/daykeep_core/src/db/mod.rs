//! SQLite bootstrap for the daykeep item store.
//!
//! # Responsibility
//! - Open and configure connections to the store database.
//! - Keep the on-disk schema current through the migration registry.
//!
//! # Invariants
//! - Schema state is recorded in `PRAGMA user_version` and must match the
//!   registry before any item or tag access.
//! - Connections come back with `foreign_keys=ON`; task rows and tag links
//!   cascade with their item only while that holds.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the store database.
#[derive(Debug)]
pub enum DbError {
    /// Underlying SQLite failure, passed through unchanged.
    Sqlite(rusqlite::Error),
    /// The database was last written by a newer build; refused untouched.
    SchemaAhead { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaAhead { found, supported } => write!(
                f,
                "store schema user_version {found} is ahead of this build \
                 (latest known migration is {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaAhead { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
