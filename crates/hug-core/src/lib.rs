// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Written Hug service.
//!
//! This crate provides the error taxonomy, domain types, and adapter traits
//! used throughout the workspace. The storage, mail, and credential backends
//! implement traits defined here; workflows depend on those seams only.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HugError;
pub use traits::{CredentialVerifier, HugStore, MailTransport};
pub use types::{
    AdminLoginLog, ClientInfo, EmailAddress, Hug, HugStatus, LoginLocation, OutboundEmail, Reply,
    SenderType,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _validation = HugError::Validation("bad input".into());
        let _not_found = HugError::NotFound {
            what: "hug",
            id: "x".into(),
        };
        let _storage = HugError::Storage {
            source: Box::new(std::io::Error::other("io")),
        };
        let _mail = HugError::Mail {
            message: "transport down".into(),
            source: None,
        };
        let _config = HugError::Config("missing key".into());
        let _internal = HugError::Internal("oops".into());
    }

    #[test]
    fn trait_objects_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn HugStore>();
        assert_send_sync::<dyn MailTransport>();
        assert_send_sync::<dyn CredentialVerifier>();
    }
}
