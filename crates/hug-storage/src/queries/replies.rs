// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply thread operations. Replies are append-only; threads are ordered by
//! `created_at` ascending.

use std::str::FromStr;

use rusqlite::params;

use hug_core::{HugError, Reply, SenderType};

use crate::database::{map_tr_err, Database};

const REPLY_COLUMNS: &str =
    "id, hug_id, sender_type, sender_name, message, is_read, email_sent, created_at";

fn reply_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reply> {
    let sender_raw: String = row.get(2)?;
    let sender_type = SenderType::from_str(&sender_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Reply {
        id: row.get(0)?,
        hug_id: row.get(1)?,
        sender_type,
        sender_name: row.get(3)?,
        message: row.get(4)?,
        is_read: row.get::<_, i64>(5)? != 0,
        email_sent: row.get::<_, i64>(6)? != 0,
        created_at: row.get(7)?,
    })
}

/// Append one reply to a submission's thread.
pub async fn insert_reply(db: &Database, reply: &Reply) -> Result<(), HugError> {
    let reply = reply.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO replies (id, hug_id, sender_type, sender_name, message, is_read, \
                 email_sent, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    reply.id,
                    reply.hug_id,
                    reply.sender_type.to_string(),
                    reply.sender_name,
                    reply.message,
                    reply.is_read as i64,
                    reply.email_sent as i64,
                    reply.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Full thread for one submission, oldest first.
pub async fn list_for_hug(db: &Database, hug_id: &str) -> Result<Vec<Reply>, HugError> {
    let hug_id = hug_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {REPLY_COLUMNS} FROM replies WHERE hug_id = ?1 ORDER BY created_at ASC"
            ))?;
            let rows = stmt.query_map(params![hug_id], reply_from_row)?;
            let mut replies = Vec::new();
            for row in rows {
                replies.push(row?);
            }
            Ok(replies)
        })
        .await
        .map_err(map_tr_err)
}

/// Flag a reply as read. Returns `false` when the id matched no row.
pub async fn mark_read(db: &Database, reply_id: &str) -> Result<bool, HugError> {
    let reply_id = reply_id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE replies SET is_read = 1 WHERE id = ?1",
                params![reply_id],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// Record the delivery outcome of an admin reply's email.
pub async fn set_email_sent(db: &Database, reply_id: &str, sent: bool) -> Result<(), HugError> {
    let reply_id = reply_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE replies SET email_sent = ?1 WHERE id = ?2",
                params![sent as i64, reply_id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Count of client replies not yet read by the admin.
pub async fn unread_count(db: &Database) -> Result<i64, HugError> {
    db.connection()
        .call(|conn| {
            let n = conn.query_row(
                "SELECT COUNT(*) FROM replies WHERE sender_type = 'client' AND is_read = 0",
                [],
                |row| row.get(0),
            )?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::hugs::{insert_hug, tests::make_hug};
    use tempfile::tempdir;

    async fn open_db_with_hug() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("replies.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        insert_hug(&db, &make_hug("h1", "2026-08-01T10:00:00Z"))
            .await
            .unwrap();
        (db, dir)
    }

    fn make_reply(id: &str, sender_type: SenderType, created_at: &str) -> Reply {
        Reply {
            id: id.to_string(),
            hug_id: "h1".to_string(),
            sender_type,
            sender_name: "CEO".to_string(),
            message: format!("message {id}"),
            is_read: false,
            email_sent: false,
            created_at: created_at.to_string(),
        }
    }

    #[tokio::test]
    async fn thread_is_ordered_oldest_first() {
        let (db, _dir) = open_db_with_hug().await;
        insert_reply(&db, &make_reply("r2", SenderType::Client, "2026-08-02T10:00:00Z"))
            .await
            .unwrap();
        insert_reply(&db, &make_reply("r1", SenderType::Admin, "2026-08-01T11:00:00Z"))
            .await
            .unwrap();

        let thread = list_for_hug(&db, "h1").await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].id, "r1");
        assert_eq!(thread[1].id, "r2");
    }

    #[tokio::test]
    async fn orphan_reply_is_rejected() {
        let (db, _dir) = open_db_with_hug().await;
        let mut reply = make_reply("r1", SenderType::Admin, "2026-08-01T11:00:00Z");
        reply.hug_id = "missing".to_string();
        let result = insert_reply(&db, &reply).await;
        assert!(matches!(result, Err(HugError::Storage { .. })));
    }

    #[tokio::test]
    async fn mark_read_reports_matched_row() {
        let (db, _dir) = open_db_with_hug().await;
        insert_reply(&db, &make_reply("r1", SenderType::Client, "2026-08-01T11:00:00Z"))
            .await
            .unwrap();

        assert!(mark_read(&db, "r1").await.unwrap());
        assert!(!mark_read(&db, "missing").await.unwrap());

        let thread = list_for_hug(&db, "h1").await.unwrap();
        assert!(thread[0].is_read);
    }

    #[tokio::test]
    async fn unread_count_tracks_client_replies_only() {
        let (db, _dir) = open_db_with_hug().await;
        insert_reply(&db, &make_reply("admin1", SenderType::Admin, "2026-08-01T11:00:00Z"))
            .await
            .unwrap();
        insert_reply(&db, &make_reply("client1", SenderType::Client, "2026-08-01T12:00:00Z"))
            .await
            .unwrap();
        insert_reply(&db, &make_reply("client2", SenderType::Client, "2026-08-01T13:00:00Z"))
            .await
            .unwrap();

        assert_eq!(unread_count(&db).await.unwrap(), 2);

        mark_read(&db, "client1").await.unwrap();
        assert_eq!(unread_count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn email_sent_flag_updates() {
        let (db, _dir) = open_db_with_hug().await;
        insert_reply(&db, &make_reply("r1", SenderType::Admin, "2026-08-01T11:00:00Z"))
            .await
            .unwrap();

        set_email_sent(&db, "r1", true).await.unwrap();
        let thread = list_for_hug(&db, "h1").await.unwrap();
        assert!(thread[0].email_sent);
    }

    #[tokio::test]
    async fn deleting_hug_cascades_to_replies() {
        let (db, _dir) = open_db_with_hug().await;
        insert_reply(&db, &make_reply("r1", SenderType::Admin, "2026-08-01T11:00:00Z"))
            .await
            .unwrap();

        db.connection()
            .call(|conn| {
                conn.execute("DELETE FROM hugs WHERE id = 'h1'", [])?;
                Ok(())
            })
            .await
            .unwrap();

        let thread = list_for_hug(&db, "h1").await.unwrap();
        assert!(thread.is_empty());
    }
}
