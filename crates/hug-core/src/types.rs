// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the workspace.
//!
//! The JSON surface of [`Hug`] keeps the legacy capitalized keys (with spaces)
//! that the existing admin UI reads, e.g. `"Recipient's Name"` and
//! `"Email Address"`. Storage columns are snake_case; the rename happens only
//! at the serde boundary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle status of a submission. Initialized to `New` at creation and
/// mutated only by the conversation workflow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum HugStatus {
    #[serde(rename = "New")]
    #[strum(serialize = "New")]
    New,
    #[serde(rename = "Replied")]
    #[strum(serialize = "Replied")]
    Replied,
    #[serde(rename = "Client Replied")]
    #[strum(serialize = "Client Replied")]
    ClientReplied,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    #[strum(serialize = "Completed")]
    Completed,
}

/// Who authored a reply in a conversation thread.
///
/// Read-tracking lives in [`Reply::is_read`]; there is no third ad-hoc
/// variant overloading this field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum SenderType {
    #[serde(rename = "admin")]
    #[strum(serialize = "admin")]
    Admin,
    #[serde(rename = "client")]
    #[strum(serialize = "client")]
    Client,
}

/// One customer's letter-writing request record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hug {
    /// Generated UUID, immutable.
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email Address")]
    pub email: String,
    #[serde(rename = "Phone Number")]
    pub phone: String,
    #[serde(rename = "Recipient's Name")]
    pub recipient_name: String,
    #[serde(rename = "Type of Message")]
    pub message_type: String,
    #[serde(rename = "Delivery Type")]
    pub delivery_type: String,
    #[serde(rename = "Feelings")]
    pub feelings: String,
    #[serde(rename = "Story")]
    pub story: String,
    #[serde(rename = "Specific Details")]
    pub specific_details: String,
    /// Derived `"{feelings}\n\n{story}"`, kept for wire compatibility.
    #[serde(rename = "Message Details")]
    pub message_details: String,
    #[serde(rename = "Status")]
    pub status: HugStatus,
    /// RFC 3339 creation timestamp, never mutated.
    #[serde(rename = "Date")]
    pub created_at: String,
}

/// One message in the thread attached to a [`Hug`]. Append-only; threads are
/// ordered by `created_at` ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    #[serde(rename = "hugid")]
    pub hug_id: String,
    pub sender_type: SenderType,
    /// Admin display name, or the hug's sender name for client replies
    /// (resolved before insert, never backfilled).
    pub sender_name: String,
    pub message: String,
    pub is_read: bool,
    /// Outcome of the single delivery attempt for admin replies.
    pub email_sent: bool,
    pub created_at: String,
}

/// Geolocation supplied by the admin UI on login, if the browser granted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Request-derived caller identity attached to login log rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: String,
}

/// Append-only record of a successful admin login. Best-effort side artifact;
/// a failed write never blocks the login itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginLog {
    pub id: String,
    pub username: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub country: Option<String>,
    pub ip_address: String,
    pub user_agent: String,
    pub created_at: String,
}

/// A named email address on the outbound wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    pub name: String,
}

/// A fully rendered email handed to the mail transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
    pub reply_to: Option<EmailAddress>,
}
