// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the `/api` surface.
//!
//! Request and response bodies keep the field names the existing dashboard
//! and form already speak (camelCase request keys, `emailSent`,
//! `unreadCount`). Every response carries a `success` flag; failures use a
//! uniform `{success:false, message}` envelope with no stack traces.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, FromRequest, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use hug_core::{ClientInfo, Hug, HugError, LoginLocation, Reply};
use hug_workflows::SubmissionInput;

use crate::server::AppState;

/// Request body for POST /api/submitHug.
#[derive(Debug, Deserialize)]
pub struct SubmitHugRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "recipientName")]
    pub recipient_name: String,
    /// Message category; the form calls this the service type.
    #[serde(rename = "serviceType")]
    pub service_type: String,
    #[serde(rename = "deliveryType")]
    pub delivery_type: String,
    pub feelings: String,
    pub story: String,
    #[serde(rename = "specificDetails", default)]
    pub specific_details: Option<String>,
}

/// Query string for GET /api/getConversation.
#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    #[serde(default)]
    pub hugid: Option<String>,
}

/// Request body for POST /api/sendReply.
#[derive(Debug, Deserialize)]
pub struct SendReplyRequest {
    pub hugid: String,
    pub message: String,
    pub admin_name: String,
}

/// Request body for POST /api/markEmailRead.
#[derive(Debug, Deserialize)]
pub struct MarkEmailReadRequest {
    #[serde(rename = "replyId")]
    pub reply_id: String,
}

/// Request body for POST /api/incomingEmail, posted by the external
/// mail-reply-capture hook. `subject` and `messageId` are accepted but not
/// stored.
#[derive(Debug, Deserialize)]
pub struct IncomingEmailRequest {
    pub hugid: String,
    #[serde(rename = "fromEmail")]
    pub from_email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(rename = "messageId", default)]
    pub message_id: Option<String>,
}

/// Request body for POST /api/adminLogin.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub location: Option<LoginLocation>,
}

#[derive(Debug, Serialize)]
pub struct SubmitHugResponse {
    pub success: bool,
    pub hug: Hug,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
}

#[derive(Debug, Serialize)]
pub struct HugListResponse {
    pub success: bool,
    pub hugs: Vec<Hug>,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub success: bool,
    pub hug: Hug,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Serialize)]
pub struct SendReplyResponse {
    pub success: bool,
    pub reply: Reply,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
}

#[derive(Debug, Serialize)]
pub struct IncomingEmailResponse {
    pub success: bool,
    pub reply: Reply,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub success: bool,
    #[serde(rename = "unreadCount")]
    pub unread_count: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Failure envelope for every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

/// JSON body extractor whose rejection is the failure envelope.
///
/// Axum's stock `Json` rejects malformed or incomplete bodies with a
/// plain-text 422; every invalid input here must come back as the
/// `{success:false, message}` envelope with a 400, same as workflow
/// validation failures.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HugError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Maps workflow errors onto HTTP statuses with the uniform envelope.
pub struct ApiError(HugError);

impl From<HugError> for ApiError {
    fn from(err: HugError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HugError::Validation(_) => StatusCode::BAD_REQUEST,
            HugError::NotFound { .. } => StatusCode::NOT_FOUND,
            HugError::Storage { .. }
            | HugError::Mail { .. }
            | HugError::Config(_)
            | HugError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = ErrorEnvelope {
            success: false,
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/submitHug
pub async fn submit_hug(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SubmitHugRequest>,
) -> Result<Json<SubmitHugResponse>, ApiError> {
    let (hug, email_sent) = state
        .submissions
        .submit(SubmissionInput {
            name: body.name,
            email: body.email,
            phone: body.phone,
            recipient_name: body.recipient_name,
            message_type: body.service_type,
            delivery_type: body.delivery_type,
            feelings: body.feelings,
            story: body.story,
            specific_details: body.specific_details,
        })
        .await?;
    Ok(Json(SubmitHugResponse {
        success: true,
        hug,
        email_sent,
    }))
}

/// GET /api/getHugs
pub async fn get_hugs(State(state): State<AppState>) -> Result<Json<HugListResponse>, ApiError> {
    let hugs = state.submissions.list().await?;
    Ok(Json(HugListResponse {
        success: true,
        hugs,
    }))
}

/// GET /api/getConversation?hugid=<id>
pub async fn get_conversation(
    State(state): State<AppState>,
    Query(query): Query<ConversationQuery>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let hugid = query
        .hugid
        .ok_or_else(|| HugError::Validation("hugid is required".to_string()))?;
    let (hug, replies) = state.conversations.get_conversation(&hugid).await?;
    Ok(Json(ConversationResponse {
        success: true,
        hug,
        replies,
    }))
}

/// POST /api/sendReply
pub async fn send_reply(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SendReplyRequest>,
) -> Result<Json<SendReplyResponse>, ApiError> {
    let (reply, email_sent) = state
        .conversations
        .send_reply(&body.hugid, &body.message, &body.admin_name)
        .await?;
    Ok(Json(SendReplyResponse {
        success: true,
        reply,
        email_sent,
    }))
}

/// POST /api/markEmailRead
pub async fn mark_email_read(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MarkEmailReadRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state.conversations.mark_reply_read(&body.reply_id).await?;
    Ok(Json(OkResponse { success: true }))
}

/// POST /api/incomingEmail
pub async fn incoming_email(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<IncomingEmailRequest>,
) -> Result<Json<IncomingEmailResponse>, ApiError> {
    let reply = state
        .conversations
        .receive_inbound(&body.hugid, &body.from_email, &body.message)
        .await?;
    Ok(Json(IncomingEmailResponse {
        success: true,
        reply,
    }))
}

/// GET /api/getUnreadCount
pub async fn get_unread_count(
    State(state): State<AppState>,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread_count = state.conversations.unread_count().await?;
    Ok(Json(UnreadCountResponse {
        success: true,
        unread_count,
    }))
}

/// POST /api/adminLogin
///
/// Returns 200 with a success envelope on a correct credential pair, 401
/// otherwise. The caller's IP (honoring `x-forwarded-for` behind a proxy)
/// and user agent ride along into the best-effort login log.
pub async fn admin_login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<AdminLoginRequest>,
) -> Response {
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string());
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let authenticated = state
        .admin
        .login(
            &body.username,
            &body.password,
            body.location,
            ClientInfo {
                ip_address,
                user_agent,
            },
        )
        .await;

    if authenticated {
        (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorEnvelope {
                success: false,
                message: "Invalid credentials".to_string(),
            }),
        )
            .into_response()
    }
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_accepts_camel_case_keys() {
        let json = r#"{
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "9999999999",
            "recipientName": "Ravi",
            "serviceType": "Love Letter",
            "deliveryType": "Standard Delivery",
            "feelings": "grateful",
            "story": "we met in college"
        }"#;
        let req: SubmitHugRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.recipient_name, "Ravi");
        assert_eq!(req.service_type, "Love Letter");
        assert!(req.specific_details.is_none());
    }

    #[test]
    fn incoming_email_tolerates_missing_subject_and_message_id() {
        let json = r#"{
            "hugid": "f9b0c8e2-1111-2222-3333-444455556666",
            "fromEmail": "asha@example.com",
            "message": "Thank you!"
        }"#;
        let req: IncomingEmailRequest = serde_json::from_str(json).unwrap();
        assert!(req.subject.is_none());
        assert!(req.message_id.is_none());
    }

    #[test]
    fn login_request_location_is_optional() {
        let json = r#"{"username": "admin", "password": "x"}"#;
        let req: AdminLoginRequest = serde_json::from_str(json).unwrap();
        assert!(req.location.is_none());
    }

    #[test]
    fn responses_use_wire_key_names() {
        let json = serde_json::to_string(&UnreadCountResponse {
            success: true,
            unread_count: 3,
        })
        .unwrap();
        assert!(json.contains("\"unreadCount\":3"));

        let json = serde_json::to_string(&ErrorEnvelope {
            success: false,
            message: "nope".to_string(),
        })
        .unwrap();
        assert!(json.contains("\"success\":false"));
    }
}
