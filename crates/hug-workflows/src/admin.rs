// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin session gate.
//!
//! A stateless credential check. No token is issued; the dashboard remembers
//! the authenticated state client-side. Successful logins with a geolocation
//! payload leave a best-effort audit row that never blocks the login result.

use std::sync::Arc;

use hug_config::AdminConfig;
use hug_core::{
    AdminLoginLog, ClientInfo, CredentialVerifier, HugError, HugStore, LoginLocation,
};
use tracing::{info, warn};

/// Exact-equality credential pair loaded from configuration.
///
/// Deliberately not hashed, matching the operational setup this replaces;
/// the [`CredentialVerifier`] seam exists so a hashed strategy can slot in
/// without touching callers.
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Builds the verifier from the `[admin]` config section. Fails when
    /// either credential is missing; startup validation reports this earlier
    /// with a better message.
    pub fn from_config(config: &AdminConfig) -> Result<Self, HugError> {
        let username = config
            .username
            .clone()
            .ok_or_else(|| HugError::Config("admin.username is not set".to_string()))?;
        let password = config
            .password
            .clone()
            .ok_or_else(|| HugError::Config("admin.password is not set".to_string()))?;
        Ok(Self::new(username, password))
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

pub struct AdminGate {
    verifier: Arc<dyn CredentialVerifier>,
    store: Arc<dyn HugStore>,
}

impl AdminGate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, store: Arc<dyn HugStore>) -> Self {
        Self { verifier, store }
    }

    /// Checks the credential pair. On success with a location payload,
    /// appends an audit row; an audit write failure is logged and swallowed.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        location: Option<LoginLocation>,
        client: ClientInfo,
    ) -> bool {
        if !self.verifier.verify(username, password) {
            info!(username, "admin login rejected");
            return false;
        }

        if let Some(location) = location {
            let log = AdminLoginLog {
                id: uuid::Uuid::new_v4().to_string(),
                username: username.to_string(),
                latitude: location.latitude,
                longitude: location.longitude,
                city: location.city,
                country: location.country,
                ip_address: client.ip_address,
                user_agent: client.user_agent,
                created_at: crate::now_rfc3339(),
            };
            if let Err(err) = self.store.insert_login_log(&log).await {
                warn!(error = %err, "failed to record admin login");
            }
        }

        info!(username, "admin login accepted");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hug_test_utils::InMemoryHugStore;

    fn gate() -> (AdminGate, Arc<InMemoryHugStore>) {
        let store = Arc::new(InMemoryHugStore::new());
        let verifier = Arc::new(FixedCredentials::new(
            "admin".to_string(),
            "hunter2".to_string(),
        ));
        (AdminGate::new(verifier, store.clone()), store)
    }

    fn client() -> ClientInfo {
        ClientInfo {
            ip_address: "203.0.113.7".to_string(),
            user_agent: "test-agent".to_string(),
        }
    }

    fn location() -> LoginLocation {
        LoginLocation {
            latitude: 12.97,
            longitude: 77.59,
            city: Some("Bengaluru".to_string()),
            country: Some("India".to_string()),
        }
    }

    #[test]
    fn near_miss_credentials_fail() {
        let creds = FixedCredentials::new("admin".into(), "hunter2".into());
        assert!(creds.verify("admin", "hunter2"));
        for (u, p) in [
            ("Admin", "hunter2"),
            ("admin", "Hunter2"),
            ("admin", "hunter2 "),
            ("admin", "hunter"),
            ("adminx", "hunter2"),
            ("", ""),
        ] {
            assert!(!creds.verify(u, p), "should reject {u:?}/{p:?}");
        }
    }

    #[tokio::test]
    async fn successful_login_with_location_leaves_audit_row() {
        let (gate, store) = gate();

        assert!(gate.login("admin", "hunter2", Some(location()), client()).await);

        let logs = store.login_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].username, "admin");
        assert_eq!(logs[0].ip_address, "203.0.113.7");
        assert_eq!(logs[0].city.as_deref(), Some("Bengaluru"));
    }

    #[tokio::test]
    async fn login_without_location_skips_audit() {
        let (gate, store) = gate();
        assert!(gate.login("admin", "hunter2", None, client()).await);
        assert!(store.login_logs().is_empty());
    }

    #[tokio::test]
    async fn failed_login_never_logs() {
        let (gate, store) = gate();
        assert!(!gate.login("admin", "wrong", Some(location()), client()).await);
        assert!(store.login_logs().is_empty());
    }

    #[tokio::test]
    async fn audit_write_failure_does_not_block_login() {
        let (gate, store) = gate();
        store.set_fail(true);
        assert!(gate.login("admin", "hunter2", Some(location()), client()).await);
        assert!(store.login_logs().is_empty());
    }

    #[test]
    fn from_config_requires_both_credentials() {
        let mut config = AdminConfig::default();
        assert!(FixedCredentials::from_config(&config).is_err());
        config.username = Some("admin".into());
        assert!(FixedCredentials::from_config(&config).is_err());
        config.password = Some("hunter2".into());
        assert!(FixedCredentials::from_config(&config).is_ok());
    }
}
