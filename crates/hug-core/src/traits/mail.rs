// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mail transport trait for outbound transactional email.

use async_trait::async_trait;

use crate::error::HugError;
use crate::types::OutboundEmail;

/// One-shot delivery of a fully rendered email.
///
/// Implementations make exactly one delivery attempt per call -- no retry,
/// no backoff, no dead-letter queue. The dispatcher sitting above this trait
/// is responsible for catching errors and folding them into a boolean.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), HugError>;
}
