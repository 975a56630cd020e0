// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin login log writes. Append-only; callers treat failures as
//! best-effort and never propagate them into the login result.

use rusqlite::params;

use hug_core::{AdminLoginLog, HugError};

use crate::database::{map_tr_err, Database};

/// Append one admin login log row.
pub async fn insert_login_log(db: &Database, log: &AdminLoginLog) -> Result<(), HugError> {
    let log = log.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO admin_login_logs (id, username, latitude, longitude, city, country, \
                 ip_address, user_agent, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    log.id,
                    log.username,
                    log.latitude,
                    log.longitude,
                    log.city,
                    log.country,
                    log.ip_address,
                    log.user_agent,
                    log.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}
