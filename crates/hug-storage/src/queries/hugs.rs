// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submission ("hug") CRUD operations.

use std::str::FromStr;

use rusqlite::{params, OptionalExtension};

use hug_core::{Hug, HugError, HugStatus};

use crate::database::{map_tr_err, Database};

const HUG_COLUMNS: &str = "id, name, email, phone, recipient_name, message_type, delivery_type, \
                           feelings, story, specific_details, message_details, status, created_at";

/// Map one result row to a [`Hug`]. Column order must match [`HUG_COLUMNS`].
fn hug_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Hug> {
    let status_raw: String = row.get(11)?;
    let status = HugStatus::from_str(&status_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(11, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Hug {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        recipient_name: row.get(4)?,
        message_type: row.get(5)?,
        delivery_type: row.get(6)?,
        feelings: row.get(7)?,
        story: row.get(8)?,
        specific_details: row.get(9)?,
        message_details: row.get(10)?,
        status,
        created_at: row.get(12)?,
    })
}

/// Insert a new submission row.
pub async fn insert_hug(db: &Database, hug: &Hug) -> Result<(), HugError> {
    let hug = hug.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO hugs (id, name, email, phone, recipient_name, message_type, \
                 delivery_type, feelings, story, specific_details, message_details, status, \
                 created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    hug.id,
                    hug.name,
                    hug.email,
                    hug.phone,
                    hug.recipient_name,
                    hug.message_type,
                    hug.delivery_type,
                    hug.feelings,
                    hug.story,
                    hug.specific_details,
                    hug.message_details,
                    hug.status.to_string(),
                    hug.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Point lookup by id.
pub async fn get_hug(db: &Database, id: &str) -> Result<Option<Hug>, HugError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let hug = conn
                .query_row(
                    &format!("SELECT {HUG_COLUMNS} FROM hugs WHERE id = ?1"),
                    params![id],
                    hug_from_row,
                )
                .optional()?;
            Ok(hug)
        })
        .await
        .map_err(map_tr_err)
}

/// All submissions, newest first.
pub async fn list_hugs(db: &Database) -> Result<Vec<Hug>, HugError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {HUG_COLUMNS} FROM hugs ORDER BY created_at DESC"
            ))?;
            let rows = stmt.query_map([], hug_from_row)?;
            let mut hugs = Vec::new();
            for row in rows {
                hugs.push(row?);
            }
            Ok(hugs)
        })
        .await
        .map_err(map_tr_err)
}

/// Unconditional last-write-wins status update.
pub async fn update_status(db: &Database, id: &str, status: HugStatus) -> Result<(), HugError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE hugs SET status = ?1 WHERE id = ?2",
                params![status.to_string(), id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    pub(crate) fn make_hug(id: &str, created_at: &str) -> Hug {
        Hug {
            id: id.to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9999999999".to_string(),
            recipient_name: "Ravi".to_string(),
            message_type: "Love Letter".to_string(),
            delivery_type: "Standard Delivery".to_string(),
            feelings: "grateful".to_string(),
            story: "we met in college".to_string(),
            specific_details: String::new(),
            message_details: "grateful\n\nwe met in college".to_string(),
            status: HugStatus::New,
            created_at: created_at.to_string(),
        }
    }

    async fn open_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hugs.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn insert_and_get_round_trip() {
        let (db, _dir) = open_db().await;
        let hug = make_hug("h1", "2026-08-01T10:00:00Z");
        insert_hug(&db, &hug).await.unwrap();

        let fetched = get_hug(&db, "h1").await.unwrap().unwrap();
        assert_eq!(fetched, hug);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let (db, _dir) = open_db().await;
        assert!(get_hug(&db, "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let (db, _dir) = open_db().await;
        insert_hug(&db, &make_hug("old", "2026-08-01T10:00:00Z"))
            .await
            .unwrap();
        insert_hug(&db, &make_hug("new", "2026-08-02T10:00:00Z"))
            .await
            .unwrap();

        let hugs = list_hugs(&db).await.unwrap();
        assert_eq!(hugs.len(), 2);
        assert_eq!(hugs[0].id, "new");
        assert_eq!(hugs[1].id, "old");
    }

    #[tokio::test]
    async fn update_status_persists() {
        let (db, _dir) = open_db().await;
        insert_hug(&db, &make_hug("h1", "2026-08-01T10:00:00Z"))
            .await
            .unwrap();

        update_status(&db, "h1", HugStatus::ClientReplied)
            .await
            .unwrap();
        let hug = get_hug(&db, "h1").await.unwrap().unwrap();
        assert_eq!(hug.status, HugStatus::ClientReplied);
    }

    #[tokio::test]
    async fn duplicate_id_is_a_storage_error() {
        let (db, _dir) = open_db().await;
        let hug = make_hug("dup", "2026-08-01T10:00:00Z");
        insert_hug(&db, &hug).await.unwrap();
        let result = insert_hug(&db, &hug).await;
        assert!(matches!(result, Err(HugError::Storage { .. })));
    }
}
