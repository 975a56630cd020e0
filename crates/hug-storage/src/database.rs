// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use hug_core::HugError;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database behind the record store.
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs, and run
    /// pending migrations.
    pub async fn open(path: &str) -> Result<Self, HugError> {
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(map_tr_err)?;

        conn.call(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;",
            )?;
            migrations::run_migrations(conn)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, "database opened");
        Ok(Self { conn })
    }

    /// The shared tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL so all committed data lands in the main file.
    pub async fn close(&self) -> Result<(), HugError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the workspace error type.
pub(crate) fn map_tr_err(err: tokio_rusqlite::Error) -> HugError {
    HugError::Storage {
        source: Box::new(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("open.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        assert!(path.exists());

        // Migrations created the three tables.
        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master
                     WHERE type = 'table'
                       AND name IN ('hugs', 'replies', 'admin_login_logs')",
                    [],
                    |row| row.get(0),
                )?;
                Ok(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 3);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent_across_restarts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reopen.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
        drop(db);

        // Second open must not re-run applied migrations.
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
    }
}
