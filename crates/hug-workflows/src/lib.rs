// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business workflows for the Written Hug service.
//!
//! Three workflows, each constructed with its collaborators injected so
//! tests can substitute in-memory fakes:
//! - [`SubmissionWorkflow`]: lead-form intake and listing.
//! - [`ConversationWorkflow`]: reply threads and status transitions.
//! - [`AdminGate`]: stateless admin credential check with audit logging.

pub mod admin;
pub mod conversation;
pub mod submission;
pub mod validate;

pub use admin::{AdminGate, FixedCredentials};
pub use conversation::ConversationWorkflow;
pub use submission::{SubmissionInput, SubmissionWorkflow};

/// RFC 3339 timestamp with millisecond precision, UTC.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
