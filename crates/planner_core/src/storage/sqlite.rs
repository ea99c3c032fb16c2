//! SQLite-backed key-value storage over the `kv_entries` table.
//!
//! # Invariants
//! - Connections must come from `db::open_db*` so the table exists.
//! - `set` is a single upsert statement; SQLite makes it atomic per key.

use super::{KeyValueStorage, StorageError, StorageResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Key-value storage borrowing a migrated planner connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection after checking its schema is current.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let supported = latest_version();
        if found != supported {
            return Err(StorageError::Unavailable(format!(
                "kv schema version {found} does not match {supported}; open via db::open_db"
            )));
        }
        Ok(Self { conn })
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_entries ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStorage for SqliteStorage<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
