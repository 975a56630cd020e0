// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`HugStore`] implementation for tests.
//!
//! Mirrors the ordering guarantees of the SQLite adapter (submissions newest
//! first, threads oldest first) so workflow tests exercise the same contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use hug_core::{AdminLoginLog, Hug, HugError, HugStatus, HugStore, Reply};

#[derive(Default)]
struct Inner {
    hugs: Vec<Hug>,
    replies: Vec<Reply>,
    login_logs: Vec<AdminLoginLog>,
}

/// Store fake backed by vectors behind a mutex.
///
/// `set_fail(true)` makes every subsequent operation return a storage error,
/// for exercising persistence-failure paths.
#[derive(Default)]
pub struct InMemoryHugStore {
    inner: Mutex<Inner>,
    fail: AtomicBool,
}

impl InMemoryHugStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated store failure.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all stored submissions, insertion order.
    pub fn hugs(&self) -> Vec<Hug> {
        self.inner.lock().unwrap().hugs.clone()
    }

    /// Snapshot of all stored replies, insertion order.
    pub fn replies(&self) -> Vec<Reply> {
        self.inner.lock().unwrap().replies.clone()
    }

    /// Snapshot of all login log rows, insertion order.
    pub fn login_logs(&self) -> Vec<AdminLoginLog> {
        self.inner.lock().unwrap().login_logs.clone()
    }

    fn check(&self) -> Result<(), HugError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(HugError::Storage {
                source: "simulated store failure".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HugStore for InMemoryHugStore {
    async fn initialize(&self) -> Result<(), HugError> {
        self.check()
    }

    async fn close(&self) -> Result<(), HugError> {
        self.check()
    }

    async fn insert_hug(&self, hug: &Hug) -> Result<(), HugError> {
        self.check()?;
        self.inner.lock().unwrap().hugs.push(hug.clone());
        Ok(())
    }

    async fn get_hug(&self, id: &str) -> Result<Option<Hug>, HugError> {
        self.check()?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .hugs
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    async fn list_hugs(&self) -> Result<Vec<Hug>, HugError> {
        self.check()?;
        let mut hugs = self.inner.lock().unwrap().hugs.clone();
        hugs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(hugs)
    }

    async fn update_hug_status(&self, id: &str, status: HugStatus) -> Result<(), HugError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(hug) = inner.hugs.iter_mut().find(|h| h.id == id) {
            hug.status = status;
        }
        Ok(())
    }

    async fn insert_reply(&self, reply: &Reply) -> Result<(), HugError> {
        self.check()?;
        self.inner.lock().unwrap().replies.push(reply.clone());
        Ok(())
    }

    async fn list_replies(&self, hug_id: &str) -> Result<Vec<Reply>, HugError> {
        self.check()?;
        let mut replies: Vec<Reply> = self
            .inner
            .lock()
            .unwrap()
            .replies
            .iter()
            .filter(|r| r.hug_id == hug_id)
            .cloned()
            .collect();
        replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(replies)
    }

    async fn mark_reply_read(&self, reply_id: &str) -> Result<bool, HugError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        match inner.replies.iter_mut().find(|r| r.id == reply_id) {
            Some(reply) => {
                reply.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_reply_email_sent(&self, reply_id: &str, sent: bool) -> Result<(), HugError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(reply) = inner.replies.iter_mut().find(|r| r.id == reply_id) {
            reply.email_sent = sent;
        }
        Ok(())
    }

    async fn unread_reply_count(&self) -> Result<i64, HugError> {
        self.check()?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .replies
            .iter()
            .filter(|r| r.sender_type == hug_core::SenderType::Client && !r.is_read)
            .count() as i64)
    }

    async fn insert_login_log(&self, log: &AdminLoginLog) -> Result<(), HugError> {
        self.check()?;
        self.inner.lock().unwrap().login_logs.push(log.clone());
        Ok(())
    }
}
