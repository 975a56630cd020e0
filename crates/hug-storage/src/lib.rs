// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Written Hug service.
//!
//! One long-lived tokio-rusqlite connection per process; all writes are
//! serialized through its background thread. Schema is managed by refinery
//! migrations embedded at build time.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;

pub use adapter::SqliteHugStore;
pub use database::Database;
