// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits implemented by the concrete storage, mail, and credential
//! backends. Workflows depend on these seams only, so tests substitute fakes.

pub mod credentials;
pub mod mail;
pub mod store;

pub use credentials::CredentialVerifier;
pub use mail::MailTransport;
pub use store::HugStore;
