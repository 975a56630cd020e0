// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Brevo SMTP-API implementation of [`MailTransport`].
//!
//! Speaks the `POST /v3/smtp/email` JSON shape with the `api-key` header.
//! Brevo answers 201 on acceptance; any non-success status is surfaced as a
//! mail error with the response body attached for diagnosis.

use std::time::Duration;

use async_trait::async_trait;
use hug_config::EmailConfig;
use hug_core::{EmailAddress, HugError, MailTransport, OutboundEmail};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

/// Outbound wire shape for the Brevo transactional email endpoint.
#[derive(Debug, Serialize)]
struct BrevoSendRequest<'a> {
    sender: &'a EmailAddress,
    to: [&'a EmailAddress; 1],
    subject: &'a str,
    #[serde(rename = "htmlContent")]
    html_content: &'a str,
    #[serde(rename = "replyTo", skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a EmailAddress>,
}

/// HTTP transport delivering rendered emails through Brevo.
#[derive(Debug, Clone)]
pub struct BrevoTransport {
    client: reqwest::Client,
    api_url: String,
    sender: EmailAddress,
}

impl BrevoTransport {
    /// Builds a transport from email configuration.
    ///
    /// Fails when `email.api_key` is absent; startup validation normally
    /// catches that earlier with a better message.
    pub fn new(config: &EmailConfig) -> Result<Self, HugError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| HugError::Config("email.api_key is not set".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| HugError::Config(format!("invalid email.api_key value: {e}")))?,
        );
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HugError::Mail {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            sender: EmailAddress {
                email: config.from_email.clone(),
                name: config.from_name.clone(),
            },
        })
    }

    /// Overrides the API URL (for testing with wiremock).
    #[cfg(test)]
    fn with_api_url(mut self, url: String) -> Self {
        self.api_url = url;
        self
    }
}

#[async_trait]
impl MailTransport for BrevoTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), HugError> {
        let payload = BrevoSendRequest {
            sender: &self.sender,
            to: [&email.to],
            subject: &email.subject,
            html_content: &email.html_body,
            reply_to: email.reply_to.as_ref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HugError::Mail {
                message: format!("email request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, to = %email.to.email, "email API response received");

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(HugError::Mail {
            message: format!("email API returned {status}: {body}"),
            source: None,
        })
    }
}
