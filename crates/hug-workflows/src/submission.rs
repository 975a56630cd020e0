// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submission intake workflow.
//!
//! Validates the lead form, persists the record with status `New`, then makes
//! one best-effort attempt at the admin/user notification pair. A failed
//! dispatch never rolls back the stored record; the caller gets the persisted
//! record plus an `email_sent` boolean.

use std::sync::Arc;

use hug_core::{Hug, HugError, HugStatus, HugStore};
use hug_mailer::{Mailer, SubmissionFields};
use tracing::info;

use crate::validate;

/// Raw lead-form fields, pre-validation.
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub recipient_name: String,
    pub message_type: String,
    pub delivery_type: String,
    pub feelings: String,
    pub story: String,
    pub specific_details: Option<String>,
}

pub struct SubmissionWorkflow {
    store: Arc<dyn HugStore>,
    mailer: Arc<Mailer>,
}

impl SubmissionWorkflow {
    pub fn new(store: Arc<dyn HugStore>, mailer: Arc<Mailer>) -> Self {
        Self { store, mailer }
    }

    /// Validates and persists a new submission, then dispatches the
    /// notification pair. Returns the stored record and the email outcome.
    pub async fn submit(&self, input: SubmissionInput) -> Result<(Hug, bool), HugError> {
        validate::require_field(&input.name, "name")?;
        validate::require_email(&input.email, "email")?;
        validate::require_field(&input.phone, "phone")?;
        validate::require_field(&input.recipient_name, "recipientName")?;
        validate::require_field(&input.message_type, "serviceType")?;
        validate::require_field(&input.delivery_type, "deliveryType")?;
        validate::require_field(&input.feelings, "feelings")?;
        validate::require_field(&input.story, "story")?;

        let feelings = input.feelings.trim().to_string();
        let story = input.story.trim().to_string();
        let specific_details = input
            .specific_details
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let hug = Hug {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            recipient_name: input.recipient_name.trim().to_string(),
            message_type: input.message_type.trim().to_string(),
            delivery_type: input.delivery_type.trim().to_string(),
            message_details: format!("{feelings}\n\n{story}"),
            feelings,
            story,
            specific_details,
            status: HugStatus::New,
            created_at: crate::now_rfc3339(),
        };

        self.store.insert_hug(&hug).await?;
        info!(id = %hug.id, "submission stored");

        let email_sent = self
            .mailer
            .send_submission_email(&SubmissionFields {
                name: hug.name.clone(),
                recipient_name: hug.recipient_name.clone(),
                email: hug.email.clone(),
                phone: hug.phone.clone(),
                message_type: hug.message_type.clone(),
                message_details: hug.message_details.clone(),
                feelings: hug.feelings.clone(),
                story: hug.story.clone(),
                specific_details: hug.specific_details.clone(),
                delivery_type: hug.delivery_type.clone(),
                submission_id: hug.id.clone(),
            })
            .await;

        Ok((hug, email_sent))
    }

    /// All submissions, newest first, for the admin dashboard.
    pub async fn list(&self) -> Result<Vec<Hug>, HugError> {
        self.store.list_hugs().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hug_config::EmailConfig;
    use hug_test_utils::{InMemoryHugStore, RecordingTransport};

    fn valid_input() -> SubmissionInput {
        SubmissionInput {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "9999999999".into(),
            recipient_name: "Ravi".into(),
            message_type: "Love Letter".into(),
            delivery_type: "Standard Delivery".into(),
            feelings: "grateful".into(),
            story: "we met in college".into(),
            specific_details: Some(String::new()),
        }
    }

    fn workflow() -> (SubmissionWorkflow, Arc<InMemoryHugStore>, Arc<RecordingTransport>) {
        let store = Arc::new(InMemoryHugStore::new());
        let transport = Arc::new(RecordingTransport::new());
        let mailer = Arc::new(Mailer::new(transport.clone(), &EmailConfig::default()));
        (
            SubmissionWorkflow::new(store.clone(), mailer),
            store,
            transport,
        )
    }

    #[tokio::test]
    async fn valid_submission_stores_one_new_record() {
        let (workflow, store, transport) = workflow();

        let (hug, email_sent) = workflow.submit(valid_input()).await.unwrap();

        assert!(uuid::Uuid::parse_str(&hug.id).is_ok());
        assert_eq!(hug.status, HugStatus::New);
        assert_eq!(hug.message_details, "grateful\n\nwe met in college");
        assert!(email_sent);

        let stored = store.hugs();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], hug);
        // Admin notification plus submitter confirmation.
        assert_eq!(transport.sent().len(), 2);
    }

    #[tokio::test]
    async fn invalid_input_persists_nothing() {
        let (workflow, store, transport) = workflow();

        for input in [
            SubmissionInput {
                name: String::new(),
                ..valid_input()
            },
            SubmissionInput {
                email: "not-an-email".into(),
                ..valid_input()
            },
            SubmissionInput {
                feelings: "   ".into(),
                ..valid_input()
            },
        ] {
            let err = workflow.submit(input).await.unwrap_err();
            assert!(matches!(err, HugError::Validation(_)));
        }

        assert!(store.hugs().is_empty());
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn padded_fields_are_stored_trimmed() {
        let (workflow, store, _transport) = workflow();

        let (hug, _) = workflow
            .submit(SubmissionInput {
                feelings: "  grateful  ".into(),
                story: "\nwe met in college\n".into(),
                specific_details: Some("  mention the garden  ".into()),
                ..valid_input()
            })
            .await
            .unwrap();

        assert_eq!(hug.feelings, "grateful");
        assert_eq!(hug.story, "we met in college");
        assert_eq!(hug.specific_details, "mention the garden");
        assert_eq!(hug.message_details, "grateful\n\nwe met in college");
        assert_eq!(store.hugs()[0], hug);
    }

    #[tokio::test]
    async fn dispatch_failure_keeps_the_record() {
        let (workflow, store, transport) = workflow();
        transport.set_fail(true);

        let (hug, email_sent) = workflow.submit(valid_input()).await.unwrap();

        assert!(!email_sent);
        assert_eq!(store.hugs().len(), 1);
        assert_eq!(store.hugs()[0].id, hug.id);
    }

    #[tokio::test]
    async fn store_failure_aborts_before_email() {
        let (workflow, store, transport) = workflow();
        store.set_fail(true);

        let err = workflow.submit(valid_input()).await.unwrap_err();
        assert!(matches!(err, HugError::Storage { .. }));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let (workflow, _store, _transport) = workflow();

        workflow.submit(valid_input()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let (second, _) = workflow
            .submit(SubmissionInput {
                name: "Binu".into(),
                ..valid_input()
            })
            .await
            .unwrap();

        let hugs = workflow.list().await.unwrap();
        assert_eq!(hugs.len(), 2);
        assert_eq!(hugs[0].id, second.id);
    }
}
