// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the HugStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use hug_config::model::StorageConfig;
use hug_core::{AdminLoginLog, Hug, HugError, HugStatus, HugStore, Reply};

use crate::database::Database;
use crate::queries;

/// SQLite-backed record store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily initialized on the first
/// call to [`HugStore::initialize`].
pub struct SqliteHugStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteHugStore {
    /// Create a new SqliteHugStore with the given configuration.
    ///
    /// The database connection is not opened until `initialize` is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, HugError> {
        self.db.get().ok_or_else(|| HugError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl HugStore for SqliteHugStore {
    async fn initialize(&self) -> Result<(), HugError> {
        let db = Database::open(&self.config.database_path).await?;
        self.db.set(db).map_err(|_| HugError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite record store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), HugError> {
        self.db()?.close().await
    }

    async fn insert_hug(&self, hug: &Hug) -> Result<(), HugError> {
        queries::hugs::insert_hug(self.db()?, hug).await
    }

    async fn get_hug(&self, id: &str) -> Result<Option<Hug>, HugError> {
        queries::hugs::get_hug(self.db()?, id).await
    }

    async fn list_hugs(&self) -> Result<Vec<Hug>, HugError> {
        queries::hugs::list_hugs(self.db()?).await
    }

    async fn update_hug_status(&self, id: &str, status: HugStatus) -> Result<(), HugError> {
        queries::hugs::update_status(self.db()?, id, status).await
    }

    async fn insert_reply(&self, reply: &Reply) -> Result<(), HugError> {
        queries::replies::insert_reply(self.db()?, reply).await
    }

    async fn list_replies(&self, hug_id: &str) -> Result<Vec<Reply>, HugError> {
        queries::replies::list_for_hug(self.db()?, hug_id).await
    }

    async fn mark_reply_read(&self, reply_id: &str) -> Result<bool, HugError> {
        queries::replies::mark_read(self.db()?, reply_id).await
    }

    async fn set_reply_email_sent(&self, reply_id: &str, sent: bool) -> Result<(), HugError> {
        queries::replies::set_email_sent(self.db()?, reply_id, sent).await
    }

    async fn unread_reply_count(&self) -> Result<i64, HugError> {
        queries::replies::unread_count(self.db()?).await
    }

    async fn insert_login_log(&self, log: &AdminLoginLog) -> Result<(), HugError> {
        queries::login_logs::insert_login_log(self.db()?, log).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hug_core::SenderType;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
        }
    }

    fn make_hug(id: &str) -> Hug {
        Hug {
            id: id.to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9999999999".to_string(),
            recipient_name: "Ravi".to_string(),
            message_type: "Love Letter".to_string(),
            delivery_type: "Standard Delivery".to_string(),
            feelings: "grateful".to_string(),
            story: "we met in college".to_string(),
            specific_details: String::new(),
            message_details: "grateful\n\nwe met in college".to_string(),
            status: HugStatus::New,
            created_at: "2026-08-01T10:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn operations_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("uninit.db");
        let store = SqliteHugStore::new(make_config(path.to_str().unwrap()));
        assert!(store.list_hugs().await.is_err());
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("double.db");
        let store = SqliteHugStore::new(make_config(path.to_str().unwrap()));
        store.initialize().await.unwrap();
        assert!(store.initialize().await.is_err());
    }

    #[tokio::test]
    async fn full_conversation_lifecycle_through_adapter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lifecycle.db");
        let store = SqliteHugStore::new(make_config(path.to_str().unwrap()));
        store.initialize().await.unwrap();

        // Submission.
        store.insert_hug(&make_hug("h1")).await.unwrap();
        let fetched = store.get_hug("h1").await.unwrap().unwrap();
        assert_eq!(fetched.status, HugStatus::New);

        // Admin reply with recorded email outcome.
        let reply = Reply {
            id: "r1".to_string(),
            hug_id: "h1".to_string(),
            sender_type: SenderType::Admin,
            sender_name: "CEO".to_string(),
            message: "on it".to_string(),
            is_read: false,
            email_sent: false,
            created_at: "2026-08-01T11:00:00Z".to_string(),
        };
        store.insert_reply(&reply).await.unwrap();
        store.set_reply_email_sent("r1", true).await.unwrap();
        store
            .update_hug_status("h1", HugStatus::Replied)
            .await
            .unwrap();

        let hug = store.get_hug("h1").await.unwrap().unwrap();
        assert_eq!(hug.status, HugStatus::Replied);
        let thread = store.list_replies("h1").await.unwrap();
        assert_eq!(thread.len(), 1);
        assert!(thread[0].email_sent);

        store.close().await.unwrap();
    }
}
