//! Key-value repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist string values under `(namespace, key)` pairs.
//! - Provide an atomic read-modify-write primitive for one key.
//! - Offer typed reads/writes through `KvCodec`.
//!
//! # Invariants
//! - All access to one repository is serialized on its connection lock.
//! - `update` runs inside an IMMEDIATE transaction; a failed closure or
//!   write leaves the previously committed value untouched.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::codec::KvCodec;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for key-value persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// A previous writer panicked while holding the connection.
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted value: {message}"),
            Self::LockPoisoned => write!(f, "settings connection lock is poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::LockPoisoned => None,
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

/// Address of one persisted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KvKey {
    /// Named durable store, e.g. `favorites`.
    pub namespace: &'static str,
    pub name: &'static str,
}

impl KvKey {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }
}

/// Repository interface for namespaced string entries.
pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: KvKey) -> RepoResult<Option<String>>;
    fn put(&self, key: KvKey, value: &str) -> RepoResult<()>;
    /// Returns whether an entry was removed.
    fn remove(&self, key: KvKey) -> RepoResult<bool>;
    /// Atomically replaces one entry with `apply(current)`.
    ///
    /// `apply` returning `None` deletes the entry. Returns the committed value.
    fn update(
        &self,
        key: KvKey,
        apply: &mut dyn FnMut(Option<&str>) -> Option<String>,
    ) -> RepoResult<Option<String>>;
}

/// Reads and decodes one typed entry.
///
/// Missing entries and undecodable values both yield `Ok(None)`; the latter
/// is logged so stale data never blocks startup.
pub fn read_typed<T: KvCodec, R: KeyValueRepository + ?Sized>(
    repo: &R,
    key: KvKey,
) -> RepoResult<Option<T>> {
    let Some(raw) = repo.get(key)? else {
        return Ok(None);
    };
    let decoded = T::decode(&raw);
    if decoded.is_none() {
        warn!(
            "event=kv_decode module=repo status=fallback namespace={} key={}",
            key.namespace, key.name
        );
    }
    Ok(decoded)
}

/// Encodes and writes one typed entry.
pub fn write_typed<T: KvCodec, R: KeyValueRepository + ?Sized>(
    repo: &R,
    key: KvKey,
    value: &T,
) -> RepoResult<()> {
    repo.put(key, &value.encode())
}

/// SQLite-backed key-value repository over the `kv_entries` table.
pub struct SqliteKeyValueRepository {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueRepository {
    /// Wraps a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: KvKey) -> RepoResult<Option<String>> {
        let conn = self.lock()?;
        select_value(&conn, key)
    }

    fn put(&self, key: KvKey, value: &str) -> RepoResult<()> {
        let conn = self.lock()?;
        upsert_value(&conn, key, value)
    }

    fn remove(&self, key: KvKey) -> RepoResult<bool> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "DELETE FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
            params![key.namespace, key.name],
        )?;
        Ok(changed > 0)
    }

    fn update(
        &self,
        key: KvKey,
        apply: &mut dyn FnMut(Option<&str>) -> Option<String>,
    ) -> RepoResult<Option<String>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let current = select_value(&tx, key)?;
        let next = apply(current.as_deref());

        match next.as_deref() {
            Some(value) => upsert_value(&tx, key, value)?,
            None => {
                tx.execute(
                    "DELETE FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
                    params![key.namespace, key.name],
                )?;
            }
        }

        tx.commit()?;
        Ok(next)
    }
}

fn select_value(conn: &Connection, key: KvKey) -> RepoResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
            params![key.namespace, key.name],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

fn upsert_value(conn: &Connection, key: KvKey, value: &str) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO kv_entries (namespace, key, value, updated_at)
         VALUES (?1, ?2, ?3, strftime('%s', 'now') * 1000)
         ON CONFLICT (namespace, key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at;",
        params![key.namespace, key.name, value],
    )?;
    Ok(())
}
