// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The workflows arrive
//! pre-wired behind `Arc`s so tests can build the same router over
//! in-memory fakes.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use hug_core::HugError;
use hug_workflows::{AdminGate, ConversationWorkflow, SubmissionWorkflow};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<SubmissionWorkflow>,
    pub conversations: Arc<ConversationWorkflow>,
    pub admin: Arc<AdminGate>,
    /// Process start time for uptime reporting.
    pub started: Instant,
}

impl AppState {
    pub fn new(
        submissions: Arc<SubmissionWorkflow>,
        conversations: Arc<ConversationWorkflow>,
        admin: Arc<AdminGate>,
    ) -> Self {
        Self {
            submissions,
            conversations,
            admin,
            started: Instant::now(),
        }
    }
}

/// Builds the full route table. The dashboard is a separate static frontend,
/// so CORS stays permissive.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/submitHug", post(handlers::submit_hug))
        .route("/api/getHugs", get(handlers::get_hugs))
        .route("/api/getConversation", get(handlers::get_conversation))
        .route("/api/sendReply", post(handlers::send_reply))
        .route("/api/markEmailRead", post(handlers::mark_email_read))
        .route("/api/incomingEmail", post(handlers::incoming_email))
        .route("/api/getUnreadCount", get(handlers::get_unread_count))
        .route("/api/adminLogin", post(handlers::admin_login))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds and serves the API until Ctrl-C.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), HugError> {
    let app = router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HugError::Internal(format!("failed to bind to {addr}: {e}")))?;

    tracing::info!("listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| HugError::Internal(format!("server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
    } else {
        tracing::info!("shutdown signal received");
    }
}
