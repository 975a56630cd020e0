// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.
//!
//! SQL migration files are compiled into the binary at build time via
//! `embed_migrations!`. Migrations run automatically on database open.

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations against the given connection.
///
/// Refinery tracks applied migrations in its own `refinery_schema_history`
/// table, so reopening an existing database is a no-op here.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), tokio_rusqlite::Error> {
    embedded::migrations::runner()
        .run(conn)
        .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;
    Ok(())
}
