// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record store trait for submission, reply, and login-log persistence.

use async_trait::async_trait;

use crate::error::HugError;
use crate::types::{AdminLoginLog, Hug, HugStatus, Reply};

/// Adapter for the persistent record store.
///
/// The store exclusively owns durable state; workflows hold none and
/// round-trip here on every request. Implementations manage their own
/// connection lifecycle via [`initialize`](HugStore::initialize) and
/// [`close`](HugStore::close).
#[async_trait]
pub trait HugStore: Send + Sync {
    /// Opens the backend and runs pending migrations.
    async fn initialize(&self) -> Result<(), HugError>;

    /// Flushes pending writes and releases connections.
    async fn close(&self) -> Result<(), HugError>;

    // --- Submission operations ---

    /// Persists a new submission row. The caller supplies the generated id
    /// and creation timestamp.
    async fn insert_hug(&self, hug: &Hug) -> Result<(), HugError>;

    /// Point lookup by id.
    async fn get_hug(&self, id: &str) -> Result<Option<Hug>, HugError>;

    /// All submissions, newest first.
    async fn list_hugs(&self) -> Result<Vec<Hug>, HugError>;

    /// Unconditional last-write-wins status update.
    async fn update_hug_status(&self, id: &str, status: HugStatus) -> Result<(), HugError>;

    // --- Reply operations ---

    /// Appends one reply to a submission's thread.
    async fn insert_reply(&self, reply: &Reply) -> Result<(), HugError>;

    /// Full thread for one submission, oldest first.
    async fn list_replies(&self, hug_id: &str) -> Result<Vec<Reply>, HugError>;

    /// Flags a reply as read. Returns `false` when the id matched no row.
    async fn mark_reply_read(&self, reply_id: &str) -> Result<bool, HugError>;

    /// Records the delivery outcome of an admin reply's email.
    async fn set_reply_email_sent(&self, reply_id: &str, sent: bool) -> Result<(), HugError>;

    /// Count of client replies not yet read by the admin.
    async fn unread_reply_count(&self) -> Result<i64, HugError>;

    // --- Login log operations ---

    /// Appends an admin login log row.
    async fn insert_login_log(&self, log: &AdminLoginLog) -> Result<(), HugError>;
}
