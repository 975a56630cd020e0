// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation workflow: reply threads attached to a submission.
//!
//! Admin replies go out by email and move the submission to `Replied`;
//! inbound client replies arrive through the mail-capture webhook and move it
//! to `Client Replied`. Status updates are unconditional last-write-wins, and
//! a failed reply email never blocks the status transition.

use std::sync::Arc;

use hug_core::{EmailAddress, Hug, HugError, HugStatus, HugStore, Reply, SenderType};
use hug_mailer::{Mailer, ReplyFields};
use tracing::info;

use crate::validate;

pub struct ConversationWorkflow {
    store: Arc<dyn HugStore>,
    mailer: Arc<Mailer>,
}

impl ConversationWorkflow {
    pub fn new(store: Arc<dyn HugStore>, mailer: Arc<Mailer>) -> Self {
        Self { store, mailer }
    }

    async fn fetch_hug(&self, hug_id: &str) -> Result<Hug, HugError> {
        validate::require_uuid(hug_id, "hugid")?;
        self.store
            .get_hug(hug_id)
            .await?
            .ok_or_else(|| HugError::NotFound {
                what: "hug",
                id: hug_id.to_string(),
            })
    }

    /// The submission and its full thread, oldest reply first.
    pub async fn get_conversation(&self, hug_id: &str) -> Result<(Hug, Vec<Reply>), HugError> {
        let hug = self.fetch_hug(hug_id).await?;
        let replies = self.store.list_replies(&hug.id).await?;
        Ok((hug, replies))
    }

    /// Appends an admin reply, emails it to the client, and moves the
    /// submission to `Replied` regardless of the email outcome.
    pub async fn send_reply(
        &self,
        hug_id: &str,
        message: &str,
        admin_name: &str,
    ) -> Result<(Reply, bool), HugError> {
        validate::require_field(message, "message")?;
        validate::require_field(admin_name, "admin_name")?;
        let hug = self.fetch_hug(hug_id).await?;

        let mut reply = Reply {
            id: uuid::Uuid::new_v4().to_string(),
            hug_id: hug.id.clone(),
            sender_type: SenderType::Admin,
            sender_name: admin_name.trim().to_string(),
            message: message.to_string(),
            is_read: false,
            email_sent: false,
            created_at: crate::now_rfc3339(),
        };
        self.store.insert_reply(&reply).await?;

        let email_sent = self
            .mailer
            .send_reply_email(
                EmailAddress {
                    email: hug.email.clone(),
                    name: hug.name.clone(),
                },
                &ReplyFields {
                    client_name: hug.name.clone(),
                    reply_message: reply.message.clone(),
                    admin_name: reply.sender_name.clone(),
                },
            )
            .await;
        if email_sent {
            self.store.set_reply_email_sent(&reply.id, true).await?;
            reply.email_sent = true;
        }

        self.store
            .update_hug_status(&hug.id, HugStatus::Replied)
            .await?;
        info!(hug_id = %hug.id, reply_id = %reply.id, email_sent, "admin reply recorded");

        Ok((reply, email_sent))
    }

    /// Records an inbound client reply captured from email. The sender name
    /// is resolved from the submission before the single insert, so every
    /// stored reply carries a human-readable name from the start.
    pub async fn receive_inbound(
        &self,
        hug_id: &str,
        from_email: &str,
        message: &str,
    ) -> Result<Reply, HugError> {
        validate::require_email(from_email, "fromEmail")?;
        validate::require_field(message, "message")?;
        let hug = self.fetch_hug(hug_id).await?;

        let reply = Reply {
            id: uuid::Uuid::new_v4().to_string(),
            hug_id: hug.id.clone(),
            sender_type: SenderType::Client,
            sender_name: hug.name.clone(),
            message: message.to_string(),
            is_read: false,
            email_sent: false,
            created_at: crate::now_rfc3339(),
        };
        self.store.insert_reply(&reply).await?;
        self.store
            .update_hug_status(&hug.id, HugStatus::ClientReplied)
            .await?;
        info!(hug_id = %hug.id, reply_id = %reply.id, "client reply recorded");

        Ok(reply)
    }

    /// Marks one reply as read for the unread counter.
    pub async fn mark_reply_read(&self, reply_id: &str) -> Result<(), HugError> {
        validate::require_uuid(reply_id, "replyId")?;
        if !self.store.mark_reply_read(reply_id).await? {
            return Err(HugError::NotFound {
                what: "reply",
                id: reply_id.to_string(),
            });
        }
        Ok(())
    }

    /// Number of client replies not yet marked read.
    pub async fn unread_count(&self) -> Result<i64, HugError> {
        self.store.unread_reply_count().await
    }
}
