//! School-identity repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load/save the single persisted `SchoolIdentity` JSON record.
//! - Keep SQL and JSON shape details inside the persistence boundary.
//!
//! # Invariants
//! - Exactly one record lives under the fixed key `school_identity`.
//! - `load` degrades to `SchoolIdentity::default()` on a missing row or
//!   malformed JSON; only DB transport errors are returned to callers.

use crate::db::DbError;
use crate::model::identity::SchoolIdentity;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key of the identity record, matching the source
/// application's storage name.
pub const IDENTITY_STORE_KEY: &str = "school_identity";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for identity persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize identity record: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Repository interface for the persisted school identity.
pub trait IdentityRepository {
    /// Loads the stored identity, substituting the default when nothing
    /// usable is stored.
    fn load(&self) -> RepoResult<SchoolIdentity>;
    /// Overwrites the stored identity record.
    fn save(&self, identity: &SchoolIdentity) -> RepoResult<()>;
    /// Removes the stored record, so the next `load` yields the default.
    fn clear(&self) -> RepoResult<()>;
}

/// SQLite-backed identity repository storing one JSON document.
pub struct SqliteIdentityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteIdentityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl IdentityRepository for SqliteIdentityRepository<'_> {
    fn load(&self) -> RepoResult<SchoolIdentity> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM app_store WHERE key = ?1;",
                params![IDENTITY_STORE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = stored else {
            info!("event=identity_load module=repo status=ok source=default reason=missing");
            return Ok(SchoolIdentity::default());
        };

        match serde_json::from_str::<SchoolIdentity>(&raw) {
            Ok(identity) => {
                info!("event=identity_load module=repo status=ok source=store");
                Ok(identity)
            }
            Err(err) => {
                // Corrupt data is recovered, not surfaced; the record gets
                // rewritten on the next explicit save.
                warn!(
                    "event=identity_load module=repo status=recovered source=default reason=corrupt error={err}"
                );
                Ok(SchoolIdentity::default())
            }
        }
    }

    fn save(&self, identity: &SchoolIdentity) -> RepoResult<()> {
        let raw = serde_json::to_string(identity)?;

        self.conn.execute(
            "INSERT INTO app_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![IDENTITY_STORE_KEY, raw],
        )?;

        info!("event=identity_save module=repo status=ok");
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM app_store WHERE key = ?1;",
            params![IDENTITY_STORE_KEY],
        )?;

        info!("event=identity_clear module=repo status=ok");
        Ok(())
    }
}
