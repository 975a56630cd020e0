// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transactional email for the Written Hug service.
//!
//! Three emails leave this crate: the admin notification and submitter
//! confirmation on a new submission, and the personal reply an admin sends
//! from the dashboard. Rendering lives in [`templates`], delivery goes
//! through the [`hug_core::MailTransport`] trait with [`BrevoTransport`] as
//! the production implementation.

pub mod dispatcher;
pub mod templates;
pub mod transport;

pub use dispatcher::{Mailer, ReplyFields, SubmissionFields};
pub use transport::BrevoTransport;
