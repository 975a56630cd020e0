// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `written-hug config` command implementation.
//!
//! Prints the fully resolved configuration as TOML with secret values
//! replaced by a redaction marker, so operators can verify what the service
//! would actually run with.

use hug_config::HugConfig;

const REDACTED: &str = "<redacted>";

/// Prints the resolved configuration with secrets redacted.
pub fn run_config(config: &HugConfig) {
    let mut shown = config.clone();
    if shown.email.api_key.is_some() {
        shown.email.api_key = Some(REDACTED.to_string());
    }
    if shown.admin.password.is_some() {
        shown.admin.password = Some(REDACTED.to_string());
    }

    match toml::to_string_pretty(&shown) {
        Ok(rendered) => print!("{rendered}"),
        Err(err) => eprintln!("error: failed to render config: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_redacted_but_identity_kept() {
        let mut config = HugConfig::default();
        config.email.api_key = Some("xkeysib-secret".to_string());
        config.admin.username = Some("admin".to_string());
        config.admin.password = Some("hunter2".to_string());

        let mut shown = config.clone();
        shown.email.api_key = Some(REDACTED.to_string());
        shown.admin.password = Some(REDACTED.to_string());

        let rendered = toml::to_string_pretty(&shown).unwrap();
        assert!(!rendered.contains("xkeysib-secret"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("admin"));
        assert!(rendered.contains(REDACTED));
    }
}
