// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP JSON API for the Written Hug service.
//!
//! Exposes the `/api` endpoints the public form and admin dashboard call,
//! plus an unauthenticated `/health` probe. All business logic lives in
//! `hug-workflows`; this crate only translates HTTP to workflow calls and
//! workflow errors to the `{success, message}` envelope.

pub mod handlers;
pub mod server;

pub use server::{router, start_server, AppState};
