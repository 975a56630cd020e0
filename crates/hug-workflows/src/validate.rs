// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input validation shared by the workflows.
//!
//! Validation runs before any side effect; the first violated constraint
//! aborts the operation with a [`HugError::Validation`].

use std::sync::LazyLock;

use hug_core::HugError;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Syntactic check only: one @, no whitespace, a dot in the domain.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// True when `email` looks like an address. No DNS or deliverability check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Requires a non-empty (after trimming) field value.
pub fn require_field(value: &str, field: &str) -> Result<(), HugError> {
    if value.trim().is_empty() {
        return Err(HugError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Requires a present, syntactically valid email address.
pub fn require_email(value: &str, field: &str) -> Result<(), HugError> {
    require_field(value, field)?;
    if !is_valid_email(value.trim()) {
        return Err(HugError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

/// Requires a UUID-shaped identifier.
pub fn require_uuid(value: &str, field: &str) -> Result<(), HugError> {
    require_field(value, field)?;
    if uuid::Uuid::parse_str(value.trim()).is_err() {
        return Err(HugError::Validation(format!(
            "{field} must be a valid identifier"
        )));
    }
    Ok(())
}
