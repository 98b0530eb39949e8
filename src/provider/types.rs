use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider-assigned meeting descriptor.
///
/// Field names follow the provider's wire format (PascalCase). The media
/// placement blob is opaque to the registry and passed through to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Meeting {
    pub meeting_id: String,
    pub external_meeting_id: String,
    pub media_region: String,
    #[serde(default)]
    pub media_placement: serde_json::Value,
}

/// Provider-assigned attendee descriptor plus the caller-supplied display
/// name, which is merged in locally and never sent to the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attendee {
    pub attendee_id: String,
    pub external_user_id: String,
    pub join_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Provider-assigned media capture pipeline descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapturePipeline {
    pub media_pipeline_id: String,
    pub source_arn: String,
    pub sink_arn: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
}

/// The calling account as resolved by the provider's identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    pub account: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMeetingRequest {
    /// Fresh idempotency token, one per provider call.
    pub client_request_token: String,
    pub media_region: String,
    /// Title truncated to 64 characters.
    pub external_meeting_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_features: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCapturePipelineRequest {
    pub source_type: String,
    pub source_arn: String,
    pub sink_type: String,
    pub sink_arn: String,
}
