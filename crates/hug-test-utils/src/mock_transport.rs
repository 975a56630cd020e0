// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording [`MailTransport`] fake for dispatcher and workflow tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use hug_core::{HugError, MailTransport, OutboundEmail};

/// Transport fake that records every email instead of delivering it.
///
/// With `set_fail(true)` every send returns a transport error, which the
/// dispatcher must fold into a `false` outcome.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated delivery failure.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all recorded emails, send order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), HugError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(HugError::Mail {
                message: "simulated transport failure".to_string(),
                source: None,
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
