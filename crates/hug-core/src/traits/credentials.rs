// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential verification seam for the admin session gate.

/// Checks a submitted username/password pair.
///
/// The shipped implementation is an exact-equality check against one
/// configured pair; isolating it behind this trait lets a future hashed
/// strategy replace it without touching callers.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}
