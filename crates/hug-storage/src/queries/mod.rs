// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per table.

pub mod hugs;
pub mod login_logs;
pub mod replies;
