// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test fakes for the Written Hug workspace.
//!
//! Workflows and the gateway depend only on the `hug-core` traits, so these
//! in-memory implementations substitute for SQLite and the email transport
//! in unit and integration tests.

pub mod memory_store;
pub mod mock_transport;

pub use memory_store::InMemoryHugStore;
pub use mock_transport::RecordingTransport;
