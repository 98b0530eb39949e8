use super::types::{
    Attendee, CallerIdentity, CapturePipeline, CreateCapturePipelineRequest, CreateMeetingRequest,
    Meeting,
};
use crate::config::ProviderConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Failure of an external provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced a usable response (connect, TLS, timeout,
    /// malformed body). Whatever timeout behavior the HTTP client has
    /// surfaces here; no extra layering on top.
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status (throttling,
    /// validation, missing remote resource).
    #[error("provider rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

/// Calls the registry makes against the hosted conferencing provider.
#[async_trait::async_trait]
pub trait ConferenceProvider: Send + Sync {
    /// Create a meeting resource.
    async fn create_meeting(
        &self,
        request: CreateMeetingRequest,
    ) -> Result<Meeting, ProviderError>;

    /// Delete a meeting resource by its provider id.
    async fn delete_meeting(&self, meeting_id: &str) -> Result<(), ProviderError>;

    /// Create an attendee scoped to a meeting.
    async fn create_attendee(
        &self,
        meeting_id: &str,
        external_user_id: &str,
    ) -> Result<Attendee, ProviderError>;

    /// Resolve the calling account from the provider's identity service.
    async fn caller_identity(&self) -> Result<CallerIdentity, ProviderError>;

    /// Create a media capture pipeline.
    async fn create_capture_pipeline(
        &self,
        request: CreateCapturePipelineRequest,
    ) -> Result<CapturePipeline, ProviderError>;

    /// Delete a media capture pipeline by its provider id.
    async fn delete_capture_pipeline(&self, media_pipeline_id: &str) -> Result<(), ProviderError>;
}

/// Production provider implementation speaking the provider's REST API.
pub struct RestProvider {
    client: reqwest::Client,
    meetings_endpoint: String,
    media_pipelines_endpoint: String,
    identity_endpoint: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateMeetingResponse {
    meeting: Meeting,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateAttendeeResponse {
    attendee: Attendee,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateAttendeeRequest<'a> {
    external_user_id: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateCapturePipelineResponse {
    media_capture_pipeline: CapturePipeline,
}

impl RestProvider {
    pub fn new(cfg: &ProviderConfig) -> Self {
        info!("Provider meetings endpoint: {}", cfg.meetings_endpoint);
        info!(
            "Provider media pipelines endpoint: {}",
            cfg.media_pipelines_endpoint
        );

        Self {
            client: reqwest::Client::new(),
            meetings_endpoint: cfg.meetings_endpoint.trim_end_matches('/').to_string(),
            media_pipelines_endpoint: cfg
                .media_pipelines_endpoint
                .trim_end_matches('/')
                .to_string(),
            identity_endpoint: cfg.identity_endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Map a non-success response to `Rejected`, carrying the body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ProviderError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl ConferenceProvider for RestProvider {
    async fn create_meeting(
        &self,
        request: CreateMeetingRequest,
    ) -> Result<Meeting, ProviderError> {
        let response = self
            .client
            .post(format!("{}/meetings", self.meetings_endpoint))
            .json(&request)
            .send()
            .await?;

        let body: CreateMeetingResponse = Self::ensure_success(response).await?.json().await?;
        Ok(body.meeting)
    }

    async fn delete_meeting(&self, meeting_id: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .delete(format!("{}/meetings/{}", self.meetings_endpoint, meeting_id))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn create_attendee(
        &self,
        meeting_id: &str,
        external_user_id: &str,
    ) -> Result<Attendee, ProviderError> {
        let response = self
            .client
            .post(format!(
                "{}/meetings/{}/attendees",
                self.meetings_endpoint, meeting_id
            ))
            .json(&CreateAttendeeRequest { external_user_id })
            .send()
            .await?;

        let body: CreateAttendeeResponse = Self::ensure_success(response).await?.json().await?;
        Ok(body.attendee)
    }

    async fn caller_identity(&self) -> Result<CallerIdentity, ProviderError> {
        let response = self
            .client
            .get(format!("{}/caller-identity", self.identity_endpoint))
            .send()
            .await?;

        let identity: CallerIdentity = Self::ensure_success(response).await?.json().await?;
        Ok(identity)
    }

    async fn create_capture_pipeline(
        &self,
        request: CreateCapturePipelineRequest,
    ) -> Result<CapturePipeline, ProviderError> {
        let response = self
            .client
            .post(format!(
                "{}/media-capture-pipelines",
                self.media_pipelines_endpoint
            ))
            .json(&request)
            .send()
            .await?;

        let body: CreateCapturePipelineResponse =
            Self::ensure_success(response).await?.json().await?;
        Ok(body.media_capture_pipeline)
    }

    async fn delete_capture_pipeline(&self, media_pipeline_id: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .delete(format!(
                "{}/media-capture-pipelines/{}",
                self.media_pipelines_endpoint, media_pipeline_id
            ))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}
