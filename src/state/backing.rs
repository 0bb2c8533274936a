/// Key-value backing for the persisted content store
///
/// The store itself only ever sees `KeyValueBacking`, so the durable
/// mechanism is swappable: SQLite on disk in production, a plain map in
/// tests. Each collection lives as one JSON string under one fixed key.

use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backing store error: {0}")]
    Backing(#[from] rusqlite::Error),
    #[error("failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable string-to-string map. Writes replace the whole value under
/// the key; last writer wins.
pub trait KeyValueBacking {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Production backing: a single `kv` table in a SQLite database under the
/// user's data directory.
///
/// - Linux: ~/.local/share/anson-studio/studio.db
/// - macOS: ~/Library/Application Support/anson-studio/studio.db
/// - Windows: %APPDATA%\anson-studio\studio.db
pub struct SqliteBacking {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteBacking {
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_db_path())
    }

    pub fn open(db_path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;

        println!("📁 Content database initialized at: {}", db_path.display());

        Ok(SqliteBacking { conn, db_path })
    }

    fn default_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        path.push("anson-studio");
        path.push("studio.db");
        path
    }

    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }
}

impl KeyValueBacking for SqliteBacking {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }
}

impl std::fmt::Debug for SqliteBacking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBacking")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// In-memory backing for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemoryBacking {
    entries: HashMap<String, String>,
}

impl KeyValueBacking for MemoryBacking {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
