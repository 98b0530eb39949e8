use super::state::AppState;
use crate::error::RegistryError;
use crate::provider::{Attendee, Meeting};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateMeetingRequest {
    /// Meeting title, also the local registry key
    pub title: String,

    /// Media region (default: the configured region)
    pub region: Option<String>,

    /// Echo reduction flag; the literal string "true" enables it
    pub ns_es: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JoinMeetingRequest {
    pub title: String,

    #[serde(rename = "attendeeName")]
    pub attendee_name: String,

    pub region: Option<String>,

    pub ns_es: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AttendeeQuery {
    pub title: String,

    #[serde(rename = "attendeeId")]
    pub attendee_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EndMeetingRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CaptureQuery {
    pub title: String,
}

/// Composed payload describing a meeting and, on /join, the attendee's
/// credentials.
#[derive(Debug, Serialize)]
pub struct JoinInfoResponse {
    #[serde(rename = "JoinInfo")]
    pub join_info: JoinInfo,
}

#[derive(Debug, Serialize)]
pub struct JoinInfo {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Meeting")]
    pub meeting: Meeting,

    #[serde(rename = "Attendee", skip_serializing_if = "Option::is_none")]
    pub attendee: Option<Attendee>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_json(status: StatusCode, err: &RegistryError) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Echo reduction rides in as the literal string "true", not a boolean.
fn echo_reduction_requested(ns_es: Option<&str>) -> bool {
    ns_es == Some("true")
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /meetings
/// Create the meeting for a title, or return the cached one
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(req): Json<CreateMeetingRequest>,
) -> impl IntoResponse {
    info!("Creating meeting for title: {}", req.title);

    let region = req.region.unwrap_or_else(|| state.default_region.clone());
    let echo_reduction = echo_reduction_requested(req.ns_es.as_deref());

    match state
        .registry
        .create_or_get_meeting(&req.title, &region, echo_reduction)
        .await
    {
        Ok(meeting) => (
            StatusCode::CREATED,
            Json(JoinInfoResponse {
                join_info: JoinInfo {
                    title: req.title,
                    meeting,
                    attendee: None,
                },
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error creating meeting: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}

/// POST /join
/// Join a meeting as a new attendee, creating the meeting if needed
pub async fn join_meeting(
    State(state): State<AppState>,
    Json(req): Json<JoinMeetingRequest>,
) -> impl IntoResponse {
    info!(
        "Joining meeting for title: {} (attendee: {})",
        req.title, req.attendee_name
    );

    let region = req.region.unwrap_or_else(|| state.default_region.clone());
    let echo_reduction = echo_reduction_requested(req.ns_es.as_deref());

    match state
        .registry
        .join_meeting(&req.title, &req.attendee_name, &region, echo_reduction)
        .await
    {
        Ok((meeting, attendee)) => (
            StatusCode::CREATED,
            Json(JoinInfoResponse {
                join_info: JoinInfo {
                    title: req.title,
                    meeting,
                    attendee: Some(attendee),
                },
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error creating/joining meeting: {}", e);
            error_json(StatusCode::FORBIDDEN, &e)
        }
    }
}

/// GET /attendee?title=...&attendeeId=...
/// Look up a registered attendee
pub async fn get_attendee(
    State(state): State<AppState>,
    Query(query): Query<AttendeeQuery>,
) -> impl IntoResponse {
    match state
        .registry
        .attendee(&query.title, &query.attendee_id)
        .await
    {
        Ok(attendee) => (StatusCode::OK, Json(attendee)).into_response(),
        Err(e) => {
            error!("Error getting attendee information: {}", e);
            error_json(StatusCode::FORBIDDEN, &e)
        }
    }
}

/// POST /end
/// Delete the provider-side meeting for a title
pub async fn end_meeting(
    State(state): State<AppState>,
    Json(req): Json<EndMeetingRequest>,
) -> impl IntoResponse {
    info!("Ending meeting for title: {}", req.title);

    match state.registry.end_meeting(&req.title).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            error!("Error ending meeting: {}", e);
            error_json(StatusCode::FORBIDDEN, &e)
        }
    }
}

/// POST /startCapture?title=...
/// Start a media capture pipeline for a meeting
pub async fn start_capture(
    State(state): State<AppState>,
    Query(query): Query<CaptureQuery>,
) -> impl IntoResponse {
    info!("Starting capture for title: {}", query.title);

    match state.registry.start_capture(&query.title).await {
        Ok(pipeline) => (StatusCode::CREATED, Json(pipeline)).into_response(),
        Err(e) => {
            error!("Error starting capture: {}", e);
            match e {
                RegistryError::NotFound(_) => error_json(StatusCode::NOT_FOUND, &e),
                _ => error_json(StatusCode::INTERNAL_SERVER_ERROR, &e),
            }
        }
    }
}

/// POST /endCapture?title=...
/// Stop the capture pipeline for a meeting
pub async fn end_capture(
    State(state): State<AppState>,
    Query(query): Query<CaptureQuery>,
) -> impl IntoResponse {
    info!("Ending capture for title: {}", query.title);

    match state.registry.end_capture(&query.title).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({}))).into_response(),
        Err(e) => {
            error!("Error ending capture: {}", e);
            match e {
                RegistryError::NotFound(_) => error_json(StatusCode::NOT_FOUND, &e),
                _ => error_json(StatusCode::INTERNAL_SERVER_ERROR, &e),
            }
        }
    }
}

/// POST /logs
/// Accept client-side logs; body is ignored
pub async fn receive_logs() -> impl IntoResponse {
    info!("Received logs from client");
    (StatusCode::OK, "Received logs")
}

/// Fallback for unsupported endpoints
pub async fn unsupported() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Bad Request - Unsupported Endpoint".to_string(),
        }),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
