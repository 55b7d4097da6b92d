//! libSQL backend — async `ProfileStore` implementation.
//!
//! Supports local file and in-memory databases. The schema is a single
//! `profiles` table keyed by the derived profile key; `put` is an
//! `INSERT OR REPLACE`, which is what makes re-storage idempotent.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libsql::{Connection, Database, params};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::store::profile::UserProfile;
use crate::store::traits::ProfileStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS profiles (
    key          TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    locality     TEXT NOT NULL,
    latitude     REAL NOT NULL,
    longitude    REAL NOT NULL,
    last_updated TEXT NOT NULL
)";

/// libSQL profile store.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlStore {
    #[allow(dead_code)]
    db: Arc<Database>,
    conn: Connection,
}

impl LibSqlStore {
    /// Open (or create) a local database file and initialize the schema.
    pub async fn new_local(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Open(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        info!(path = %path.display(), "Profile database opened");
        Ok(store)
    }

    /// Create an in-memory database (for tests and throwaway runs).
    pub async fn new_memory() -> Result<Self, StorageError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        self.conn
            .execute(SCHEMA, ())
            .await
            .map_err(|e| StorageError::Query(format!("Schema init failed: {e}")))?;
        Ok(())
    }
}

/// Parse the RFC 3339 timestamp we write in `put`.
fn parse_timestamp(key: &str, s: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::CorruptRow {
            key: key.to_string(),
            reason: format!("bad last_updated {s:?}: {e}"),
        })
}

#[async_trait]
impl ProfileStore for LibSqlStore {
    async fn put(&self, key: &str, profile: &UserProfile) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO profiles
                 (key, name, locality, latitude, longitude, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    key,
                    profile.name.as_str(),
                    profile.locality.as_str(),
                    profile.latitude,
                    profile.longitude,
                    profile.last_updated.to_rfc3339(),
                ],
            )
            .await
            .map_err(|e| StorageError::Query(format!("Profile insert failed: {e}")))?;
        debug!(key, name = %profile.name, "Profile stored");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<UserProfile>, StorageError> {
        let mut rows = self
            .conn
            .query(
                "SELECT name, locality, latitude, longitude, last_updated
                 FROM profiles WHERE key = ?1",
                params![key],
            )
            .await
            .map_err(|e| StorageError::Query(format!("Profile lookup failed: {e}")))?;

        let Some(row) = rows
            .next()
            .await
            .map_err(|e| StorageError::Query(format!("Row fetch failed: {e}")))?
        else {
            return Ok(None);
        };

        let get_err = |e: libsql::Error| StorageError::Query(format!("Column read failed: {e}"));
        let name: String = row.get(0).map_err(get_err)?;
        let locality: String = row.get(1).map_err(get_err)?;
        let latitude: f64 = row.get(2).map_err(get_err)?;
        let longitude: f64 = row.get(3).map_err(get_err)?;
        let last_updated: String = row.get(4).map_err(get_err)?;

        Ok(Some(UserProfile {
            name,
            locality,
            latitude,
            longitude,
            last_updated: parse_timestamp(key, &last_updated)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::profile::profile_key;

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let store = LibSqlStore::new_memory().await.unwrap();
        let profile = UserProfile::new("Alice", "Bhopal, India", 23.2599, 77.4126);
        let key = profile.key();

        store.put(&key, &profile).await.unwrap();
        let loaded = store.get(&key).await.unwrap().unwrap();

        assert_eq!(loaded.name, "Alice");
        assert_eq!(loaded.locality, "Bhopal, India");
        assert_eq!(loaded.latitude, 23.2599);
        assert_eq!(loaded.longitude, 77.4126);
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let store = LibSqlStore::new_memory().await.unwrap();
        assert!(store.get("nobody_nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_same_key_overwrites() {
        let store = LibSqlStore::new_memory().await.unwrap();
        let key = profile_key("Alice", "Bhopal, India");

        let first = UserProfile::new("Alice", "Bhopal, India", 0.0, 0.0);
        store.put(&key, &first).await.unwrap();

        let second = UserProfile::new("Alice", "Bhopal, India", 23.2599, 77.4126);
        store.put(&key, &second).await.unwrap();

        let loaded = store.get(&key).await.unwrap().unwrap();
        assert_eq!(loaded.latitude, 23.2599);
        assert_eq!(loaded.longitude, 77.4126);

        // Still exactly one row for the key
        let mut rows = store
            .conn
            .query("SELECT COUNT(*) FROM profiles", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        let count: i64 = row.get(0).unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn local_file_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.db");

        let profile = UserProfile::new("Bob", "Indore", 22.7196, 75.8577);
        let key = profile.key();
        {
            let store = LibSqlStore::new_local(&path).await.unwrap();
            store.put(&key, &profile).await.unwrap();
        }

        let reopened = LibSqlStore::new_local(&path).await.unwrap();
        let loaded = reopened.get(&key).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Bob");
        assert_eq!(loaded.locality, "Indore");
    }
}
