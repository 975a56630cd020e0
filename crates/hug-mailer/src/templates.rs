// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML rendering for the three transactional emails.
//!
//! Each email is a frame template with `{NAME}` and `{CONTENT}` placeholders
//! filled from submission or reply fields. All user-supplied text is HTML
//! escaped before it reaches a template; reply bodies additionally convert
//! newlines to `<br>` so multi-paragraph replies survive the HTML mail body.

use crate::dispatcher::{ReplyFields, SubmissionFields};

/// Frame for the admin notification. `{NAME}` is the submitter.
const ADMIN_FRAME: &str = r#"<!DOCTYPE html>
<html>
<body style="margin:0;padding:0;background:#ffffff;font-family:Arial, sans-serif;color:#333333;">
  <div style="max-width:600px;margin:0 auto;">
    <h2 style="color:#ff6b6b;text-align:center;padding:20px 0 0;">The Written Hug has got a Letter from {NAME}</h2>
    <table style="width:100%;border-collapse:collapse;margin:20px 0;">
      {CONTENT}
    </table>
    <p style="text-align:center;font-size:12px;color:#999;padding:20px 0;">The Written Hug</p>
  </div>
</body>
</html>"#;

/// Frame for the submitter confirmation. `{NAME}` is the submitter.
const USER_FRAME: &str = r#"<!DOCTYPE html>
<html>
<body style="margin:0;padding:0;background:#ffffff;font-family:Arial, sans-serif;color:#333333;">
  <div style="max-width:600px;margin:0 auto;">
    <h2 style="color:#ff6b6b;text-align:center;padding:20px 0 0;">The Written Hug has got {NAME} a Letter</h2>
    {CONTENT}
    <p style="text-align:center;font-size:12px;color:#999;padding:20px 0;">The Written Hug</p>
  </div>
</body>
</html>"#;

/// Frame for the personal reply email. No `{NAME}` slot; the greeting lives
/// in the content block.
const REPLY_FRAME: &str = r#"<!DOCTYPE html>
<html>
<body style="margin:0;padding:0;background:#f8f7f6;font-family:Arial, sans-serif;color:#333333;">
  <div style="max-width:600px;margin:0 auto;padding:20px;">
    {CONTENT}
    <p style="text-align:center;font-size:12px;color:#999;padding:20px 0;">The Written Hug</p>
  </div>
</body>
</html>"#;

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Converts newlines to `<br>` for HTML bodies. Handles CRLF input.
pub fn nl2br(input: &str) -> String {
    input.replace("\r\n", "<br>").replace('\n', "<br>")
}

/// Today's date the way the emails display it, e.g. `August 23, 2026`.
pub fn display_date() -> String {
    chrono::Utc::now().format("%B %-d, %Y").to_string()
}

fn table_row(shade: bool, label: &str, value: &str) -> String {
    let (bg, border) = if shade {
        ("#fffaf2", "#ffe6cc")
    } else {
        ("#fff5f5", "#ffd6d6")
    };
    format!(
        "<tr style=\"background:{bg};\">\
         <td style=\"padding:10px;border-bottom:1px solid {border};\">{label}</td>\
         <td style=\"padding:10px;border-bottom:1px solid {border};\">{value}</td>\
         </tr>"
    )
}

/// Renders the admin notification body for a new submission.
pub fn submission_admin_html(fields: &SubmissionFields, date: &str) -> String {
    let name = escape_html(&fields.name);
    let email = escape_html(&fields.email);
    let specific = if fields.specific_details.trim().is_empty() {
        "None provided".to_string()
    } else {
        escape_html(&fields.specific_details)
    };
    let rows: Vec<String> = [
        ("Name", name.clone()),
        ("Recipient's Name", escape_html(&fields.recipient_name)),
        ("Date", escape_html(date)),
        ("Status", "New Submission".to_string()),
        (
            "Email Address",
            format!(
                "<a href=\"mailto:{email}\" style=\"color:#ff6b6b;text-decoration:none;\">{email}</a>"
            ),
        ),
        ("Phone Number", escape_html(&fields.phone)),
        ("Type of Message", escape_html(&fields.message_type)),
        ("Message Details", nl2br(&escape_html(&fields.message_details))),
        ("Feelings", nl2br(&escape_html(&fields.feelings))),
        ("Story", nl2br(&escape_html(&fields.story))),
        ("Specific Details", specific),
        ("Delivery Type", escape_html(&fields.delivery_type)),
    ]
    .iter()
    .enumerate()
    .map(|(i, (label, value))| table_row(i % 2 == 1, label, value))
    .collect();

    ADMIN_FRAME
        .replace("{NAME}", &name)
        .replace("{CONTENT}", &rows.concat())
}

/// Renders the confirmation body sent back to the submitter.
pub fn submission_user_html(fields: &SubmissionFields, date: &str) -> String {
    let name = escape_html(&fields.name);
    let content = format!(
        r#"<div style="padding:20px;text-align:center;">
  <h3 style="color:#ff6b6b;margin-top:0;font-size:18px;">Dear {name},</h3>
  <p style="font-size:16px;line-height:1.6;margin:20px 0;">
    Thank you for submitting your heartfelt <strong>{message_type}</strong> for <strong>{recipient}</strong>.
  </p>
  <div style="background:#fff5f7;border:1px solid #f9ccd3;border-radius:8px;padding:20px;margin:20px 0;text-align:left;">
    <h4 style="margin-top:0;color:#ff6b6b;">Your Submission Details:</h4>
    <p style="margin:5px 0;"><strong>Message Type:</strong> {message_type}</p>
    <p style="margin:5px 0;"><strong>Delivery Type:</strong> {delivery_type}</p>
    <p style="margin:5px 0;"><strong>Submission Date:</strong> {date}</p>
    <p style="margin:5px 0;"><strong>Reference ID:</strong> {reference}</p>
  </div>
  <p style="font-size:16px;line-height:1.6;margin:20px 0;">
    Our team will begin crafting your personalized message with care and attention. We'll be in touch soon with updates!
  </p>
  <p style="font-size:16px;margin-top:30px;color:#ff6b6b;">
    With warm regards,<br><strong>The Written Hug Team</strong>
  </p>
</div>"#,
        name = name,
        message_type = escape_html(&fields.message_type),
        recipient = escape_html(&fields.recipient_name),
        delivery_type = escape_html(&fields.delivery_type),
        date = escape_html(date),
        reference = escape_html(&fields.submission_id),
    );

    USER_FRAME
        .replace("{NAME}", &name)
        .replace("{CONTENT}", &content)
}

/// Renders the personal reply body sent to the client.
pub fn reply_html(fields: &ReplyFields) -> String {
    let content = format!(
        r#"<p style="margin:0 0 14px;font-size:15px;">Hi {client},</p>
<div style="background:#fff5f7;border-radius:8px;padding:16px 18px;border:1px solid #f9ccd3;">
  <p style="margin:0;font-size:15px;line-height:1.6;text-align:justify;color:#2f2f2f;">{message}</p>
</div>
<p style="margin:12px 0 0;font-size:15px;">To continue, simply reply to this email and we'll get back to you.</p>
<p style="margin:12px 0 0;font-size:13px;color:#666;">This message is a direct reply to the message you sent. No marketing, no promotions.</p>"#,
        client = escape_html(&fields.client_name),
        message = nl2br(&escape_html(&fields.reply_message)),
    );

    REPLY_FRAME.replace("{CONTENT}", &content)
}
