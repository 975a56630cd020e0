// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. General shape checks run on every load; the stricter
//! credential checks in [`validate_serve_requirements`] run only before
//! `serve`, because missing credentials are a startup-time fatal condition
//! for the server but irrelevant to e.g. printing the resolved config.

use crate::diagnostic::ConfigError;
use crate::model::HugConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &HugConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.email.api_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "email.api_url must not be empty".to_string(),
        });
    }

    if config.email.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "email.timeout_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the credentials `serve` cannot run without.
///
/// The email API key and the admin username/password pair have no compiled-in
/// defaults; their absence aborts startup rather than surfacing per-request.
pub fn validate_serve_requirements(config: &HugConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    match config.email.api_key.as_deref() {
        None => errors.push(ConfigError::MissingKey {
            key: "email.api_key".to_string(),
        }),
        Some(key) if key.trim().is_empty() => errors.push(ConfigError::Validation {
            message: "email.api_key must not be empty".to_string(),
        }),
        Some(_) => {}
    }

    match config.admin.username.as_deref() {
        None => errors.push(ConfigError::MissingKey {
            key: "admin.username".to_string(),
        }),
        Some(u) if u.trim().is_empty() => errors.push(ConfigError::Validation {
            message: "admin.username must not be empty".to_string(),
        }),
        Some(_) => {}
    }

    match config.admin.password.as_deref() {
        None => errors.push(ConfigError::MissingKey {
            key: "admin.password".to_string(),
        }),
        Some(p) if p.is_empty() => errors.push(ConfigError::Validation {
            message: "admin.password must not be empty".to_string(),
        }),
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = HugConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = HugConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))
        ));
    }

    #[test]
    fn garbage_host_fails_validation() {
        let mut config = HugConfig::default();
        config.server.host = "not a host!".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("server.host"))
        ));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = HugConfig::default();
        config.email.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn default_config_cannot_serve() {
        let config = HugConfig::default();
        let errors = validate_serve_requirements(&config).unwrap_err();
        // api_key, username, and password are all missing.
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn full_credentials_can_serve() {
        let mut config = HugConfig::default();
        config.email.api_key = Some("xkeysib-test".to_string());
        config.admin.username = Some("admin".to_string());
        config.admin.password = Some("hunter2".to_string());
        assert!(validate_serve_requirements(&config).is_ok());
    }

    #[test]
    fn blank_api_key_cannot_serve() {
        let mut config = HugConfig::default();
        config.email.api_key = Some("   ".to_string());
        config.admin.username = Some("admin".to_string());
        config.admin.password = Some("hunter2".to_string());
        let errors = validate_serve_requirements(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
