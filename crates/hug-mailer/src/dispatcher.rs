// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Email dispatch over a pluggable [`MailTransport`].
//!
//! The dispatcher owns rendering and addressing and folds every transport
//! failure into a `false` outcome. Workflows treat that boolean as advisory;
//! a failed email never rolls back a stored record.

use std::sync::Arc;

use hug_config::EmailConfig;
use hug_core::{EmailAddress, MailTransport, OutboundEmail};
use tracing::warn;

use crate::templates;

/// Submission fields the transactional emails render.
#[derive(Debug, Clone)]
pub struct SubmissionFields {
    pub name: String,
    pub recipient_name: String,
    pub email: String,
    pub phone: String,
    pub message_type: String,
    pub message_details: String,
    pub feelings: String,
    pub story: String,
    pub specific_details: String,
    pub delivery_type: String,
    pub submission_id: String,
}

/// Reply fields the personal-reply email renders.
#[derive(Debug, Clone)]
pub struct ReplyFields {
    pub client_name: String,
    pub reply_message: String,
    pub admin_name: String,
}

/// Renders and dispatches the service's transactional emails.
pub struct Mailer {
    transport: Arc<dyn MailTransport>,
    admin: EmailAddress,
    from: EmailAddress,
}

impl Mailer {
    pub fn new(transport: Arc<dyn MailTransport>, config: &EmailConfig) -> Self {
        Self {
            transport,
            admin: EmailAddress {
                email: config.admin_email.clone(),
                name: config.admin_name.clone(),
            },
            from: EmailAddress {
                email: config.from_email.clone(),
                name: config.from_name.clone(),
            },
        }
    }

    /// Sends the admin notification and the submitter confirmation for a new
    /// submission. Returns `true` only when both deliveries were accepted.
    pub async fn send_submission_email(&self, fields: &SubmissionFields) -> bool {
        let date = templates::display_date();

        let admin_email = OutboundEmail {
            to: self.admin.clone(),
            subject: format!("New Message from {}", fields.name),
            html_body: templates::submission_admin_html(fields, &date),
            reply_to: None,
        };
        let user_email = OutboundEmail {
            to: EmailAddress {
                email: fields.email.clone(),
                name: fields.name.clone(),
            },
            subject: "Thank you for your message - The Written Hug".to_string(),
            html_body: templates::submission_user_html(fields, &date),
            reply_to: None,
        };

        let admin_ok = self.dispatch(&admin_email, "submission admin notification").await;
        let user_ok = self.dispatch(&user_email, "submission confirmation").await;
        admin_ok && user_ok
    }

    /// Sends a personal reply to the client with replies routed back to the
    /// team inbox. Returns `false` if the transport rejected the send.
    pub async fn send_reply_email(&self, to: EmailAddress, fields: &ReplyFields) -> bool {
        let email = OutboundEmail {
            to,
            subject: "Personal Reply from The Written Hug Team".to_string(),
            html_body: templates::reply_html(fields),
            reply_to: Some(self.from.clone()),
        };
        self.dispatch(&email, "personal reply").await
    }

    async fn dispatch(&self, email: &OutboundEmail, kind: &str) -> bool {
        match self.transport.send(email).await {
            Ok(()) => true,
            Err(err) => {
                warn!(kind, to = %email.to.email, error = %err, "email delivery failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hug_test_utils::RecordingTransport;

    fn fields() -> SubmissionFields {
        SubmissionFields {
            name: "Asha".into(),
            recipient_name: "Ravi".into(),
            email: "asha@example.com".into(),
            phone: "9999999999".into(),
            message_type: "Love Letter".into(),
            message_details: "grateful\n\nwe met in college".into(),
            feelings: "grateful".into(),
            story: "we met in college".into(),
            specific_details: String::new(),
            delivery_type: "Standard Delivery".into(),
            submission_id: "ref-1".into(),
        }
    }

    fn mailer_with(transport: Arc<RecordingTransport>) -> Mailer {
        let mut config = EmailConfig::default();
        config.admin_email = "admin@example.com".into();
        config.admin_name = "Admin".into();
        config.from_email = "team@example.com".into();
        config.from_name = "Team".into();
        Mailer::new(transport, &config)
    }

    #[tokio::test]
    async fn submission_sends_admin_then_user() {
        let transport = Arc::new(RecordingTransport::new());
        let mailer = mailer_with(transport.clone());

        assert!(mailer.send_submission_email(&fields()).await);

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to.email, "admin@example.com");
        assert_eq!(sent[0].subject, "New Message from Asha");
        assert_eq!(sent[1].to.email, "asha@example.com");
        assert_eq!(
            sent[1].subject,
            "Thank you for your message - The Written Hug"
        );
    }

    #[tokio::test]
    async fn submission_reports_false_on_transport_failure() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_fail(true);
        let mailer = mailer_with(transport.clone());

        assert!(!mailer.send_submission_email(&fields()).await);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn reply_routes_responses_to_team_inbox() {
        let transport = Arc::new(RecordingTransport::new());
        let mailer = mailer_with(transport.clone());

        let ok = mailer
            .send_reply_email(
                EmailAddress {
                    email: "asha@example.com".into(),
                    name: "Asha".into(),
                },
                &ReplyFields {
                    client_name: "Asha".into(),
                    reply_message: "We started writing.".into(),
                    admin_name: "CEO".into(),
                },
            )
            .await;
        assert!(ok);

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Personal Reply from The Written Hug Team");
        let reply_to = sent[0].reply_to.as_ref().unwrap();
        assert_eq!(reply_to.email, "team@example.com");
    }

    #[tokio::test]
    async fn reply_reports_false_on_transport_failure() {
        let transport = Arc::new(RecordingTransport::new());
        transport.set_fail(true);
        let mailer = mailer_with(transport);

        let ok = mailer
            .send_reply_email(
                EmailAddress {
                    email: "asha@example.com".into(),
                    name: "Asha".into(),
                },
                &ReplyFields {
                    client_name: "Asha".into(),
                    reply_message: "hello".into(),
                    admin_name: "CEO".into(),
                },
            )
            .await;
        assert!(!ok);
    }
}
