// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `written-hug serve` command implementation.
//!
//! Wires the SQLite store, Brevo transport, and workflows together and runs
//! the API server until shutdown. Missing secrets (email API key, admin
//! credentials) are a startup-time fatal condition, not a per-request error.

use std::sync::Arc;

use hug_config::HugConfig;
use hug_core::{HugError, HugStore};
use hug_gateway::AppState;
use hug_mailer::{BrevoTransport, Mailer};
use hug_storage::SqliteHugStore;
use hug_workflows::{AdminGate, ConversationWorkflow, FixedCredentials, SubmissionWorkflow};
use tracing::info;

/// Runs the `written-hug serve` command.
pub async fn run_serve(config: HugConfig) -> Result<(), HugError> {
    init_tracing(&config.server.log_level);

    info!("starting written-hug serve");

    if let Err(errors) = hug_config::validate_serve_requirements(&config) {
        hug_config::render_errors(&errors);
        return Err(HugError::Config(
            "serve requirements not met; see diagnostics above".to_string(),
        ));
    }

    let store: Arc<dyn HugStore> = Arc::new(SqliteHugStore::new(config.storage.clone()));
    store.initialize().await?;
    info!(path = %config.storage.database_path, "storage initialized");

    let transport = Arc::new(BrevoTransport::new(&config.email)?);
    let mailer = Arc::new(Mailer::new(transport, &config.email));

    let verifier = Arc::new(FixedCredentials::from_config(&config.admin)?);

    let state = AppState::new(
        Arc::new(SubmissionWorkflow::new(store.clone(), mailer.clone())),
        Arc::new(ConversationWorkflow::new(store.clone(), mailer)),
        Arc::new(AdminGate::new(verifier, store.clone())),
    );

    hug_gateway::start_server(&config.server.host, config.server.port, state).await?;

    // Graceful shutdown: checkpoint the WAL before exit.
    store.close().await?;
    info!("written-hug serve stopped");

    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,written_hug={log_level},hug_gateway={log_level},hug_workflows={log_level},hug_storage={log_level},hug_mailer={log_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
