// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Written Hug service.

use thiserror::Error;

/// The primary error type used across the workspace.
///
/// Delivery failures are deliberately absent from the HTTP-facing half of this
/// taxonomy: the notification dispatcher catches transport errors at its own
/// boundary and folds them into a boolean, so a persisted submission is never
/// reported lost merely because an email did not go out.
#[derive(Debug, Error)]
pub enum HugError {
    /// Malformed or missing request input. Surfaced to clients as HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// An identifier did not resolve to a stored record. Surfaced as HTTP 404.
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    /// Record store read/write failure. Surfaced as HTTP 500.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Email transport failure. Never crosses the dispatcher boundary;
    /// callers of the dispatcher only ever observe a boolean outcome.
    #[error("mail transport error: {message}")]
    Mail {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HugError {
    /// Shorthand for a storage error wrapping an arbitrary source.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        HugError::Storage {
            source: Box::new(source),
        }
    }
}
