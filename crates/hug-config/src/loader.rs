// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./written-hug.toml` > `~/.config/written-hug/written-hug.toml`
//! > `/etc/written-hug/written-hug.toml` with environment variable overrides
//! via the `HUG_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HugConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/written-hug/written-hug.toml` (system-wide)
/// 3. `~/.config/written-hug/written-hug.toml` (user XDG config)
/// 4. `./written-hug.toml` (local directory)
/// 5. `HUG_*` environment variables
pub fn load_config() -> Result<HugConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HugConfig::default()))
        .merge(Toml::file("/etc/written-hug/written-hug.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("written-hug/written-hug.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("written-hug.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and for callers that supply config inline.
pub fn load_config_from_str(toml_content: &str) -> Result<HugConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HugConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HugConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HugConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `HUG_EMAIL_API_KEY` must map to
/// `email.api_key`, not `email.api.key`.
fn env_provider() -> Env {
    Env::prefixed("HUG_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: HUG_EMAIL_API_KEY -> "email_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("email_", "email.", 1)
            .replacen("admin_", "admin.", 1);
        mapped.into()
    })
}
