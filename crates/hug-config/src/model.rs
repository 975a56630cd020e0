// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Written Hug service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with `HUG_*`
/// environment variable overrides. All sections default to sensible values;
/// secrets (email API key, admin credentials) have no defaults and are
/// required before `serve` will start.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HugConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Transactional email transport settings.
    #[serde(default)]
    pub email: EmailConfig,

    /// Admin session gate credentials.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "written-hug.db".to_string()
}

/// Transactional email transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    /// Transactional email API endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key for the transport. `None` disables `serve` at startup.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address used on every outbound email.
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// Sender display name used on every outbound email.
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Address receiving admin-facing submission notifications.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Display name on the admin notification recipient.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,

    /// Per-request timeout for transport calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            admin_email: default_admin_email(),
            admin_name: default_admin_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.brevo.com/v3/smtp/email".to_string()
}

fn default_from_email() -> String {
    "thewrittenhug@gmail.com".to_string()
}

fn default_from_name() -> String {
    "The Written Hug Team".to_string()
}

fn default_admin_email() -> String {
    "thewrittenhug@gmail.com".to_string()
}

fn default_admin_name() -> String {
    "The Written Hug Admin".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Admin session gate configuration.
///
/// Both fields are required before `serve` will start; neither has a
/// compiled-in default so credentials never ship in the binary.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Admin username for the session gate.
    #[serde(default)]
    pub username: Option<String>,

    /// Admin password for the session gate.
    #[serde(default)]
    pub password: Option<String>,
}
