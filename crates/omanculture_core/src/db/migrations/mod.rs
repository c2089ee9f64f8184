//! Schema history of the settings database.
//!
//! Version 1 creates `kv_entries`, the single namespaced key-value table
//! backing onboarding, language, theme and favorites. Every persisted value
//! is a string, so later settings need no schema change.
//!
//! # Invariants
//! - Versions only grow; a file newer than this build is refused, never
//!   downgraded.
//! - Pending versions apply in one transaction together with
//!   `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Newest schema version this build can read and write.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings a settings database up to [`latest_version`].
///
/// A fresh file starts at version 0 and receives `kv_entries`.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stored = stored_schema_version(conn)?;
    let latest = latest_version();

    match stored.cmp(&latest) {
        std::cmp::Ordering::Equal => return Ok(()),
        std::cmp::Ordering::Greater => {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version: stored,
                latest_supported: latest,
            })
        }
        std::cmp::Ordering::Less => {}
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().skip_while(|m| m.version <= stored) {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={stored} to_version={latest}");
    Ok(())
}

fn stored_schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}
