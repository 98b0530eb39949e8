use crate::error::RegistryError;
use crate::provider::{
    Attendee, CapturePipeline, ConferenceProvider, CreateCapturePipelineRequest,
    CreateMeetingRequest, Meeting,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// The provider caps external meeting ids at 64 characters.
const EXTERNAL_MEETING_ID_MAX: usize = 64;

#[derive(Default)]
struct RegistryState {
    /// title → provider meeting descriptor
    meetings: HashMap<String, Meeting>,
    /// title → (attendee id → attendee descriptor)
    attendees: HashMap<String, HashMap<String, Attendee>>,
    /// title → provider capture pipeline descriptor
    captures: HashMap<String, CapturePipeline>,
}

/// Process-local coordinator for meeting lifecycle operations.
///
/// Tracks at most one active meeting per title, its attendees, and its
/// optional capture pipeline. All state is in memory only; nothing survives
/// a restart.
///
/// Locks are never held across a provider call, so two concurrent creates
/// for the same new title can both reach the provider; the last insert wins
/// and the other provider-side meeting is orphaned. Known limitation, not
/// guarded against.
pub struct MeetingRegistry {
    provider: Arc<dyn ConferenceProvider>,
    capture_sink_arn: Option<String>,
    state: RwLock<RegistryState>,
}

impl MeetingRegistry {
    pub fn new(provider: Arc<dyn ConferenceProvider>, capture_sink_arn: Option<String>) -> Self {
        Self {
            provider,
            capture_sink_arn,
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Return the cached meeting for `title`, or create one via the provider.
    ///
    /// On a cache hit the `region` and `echo_reduction` arguments are
    /// ignored; the first creation pins them for the title's lifetime.
    pub async fn create_or_get_meeting(
        &self,
        title: &str,
        region: &str,
        echo_reduction: bool,
    ) -> Result<Meeting, RegistryError> {
        if let Some(meeting) = self.state.read().await.meetings.get(title) {
            return Ok(meeting.clone());
        }

        let request = CreateMeetingRequest {
            client_request_token: Uuid::new_v4().to_string(),
            media_region: region.to_string(),
            external_meeting_id: external_meeting_id(title),
            meeting_features: echo_reduction
                .then(|| serde_json::json!({ "Audio": { "EchoReduction": "AVAILABLE" } })),
        };

        let meeting = self.provider.create_meeting(request).await?;
        info!("Created meeting {} for title: {}", meeting.meeting_id, title);

        let mut state = self.state.write().await;
        state.meetings.insert(title.to_string(), meeting.clone());
        state.attendees.entry(title.to_string()).or_default();

        Ok(meeting)
    }

    /// Create-or-get the meeting, then register a new attendee under it.
    ///
    /// The meeting is not rolled back if the attendee call fails; the title
    /// stays cached and only the attendee is missing. No transactional
    /// guarantee is offered.
    pub async fn join_meeting(
        &self,
        title: &str,
        attendee_name: &str,
        region: &str,
        echo_reduction: bool,
    ) -> Result<(Meeting, Attendee), RegistryError> {
        let meeting = self
            .create_or_get_meeting(title, region, echo_reduction)
            .await?;

        let external_user_id = Uuid::new_v4().to_string();
        let mut attendee = self
            .provider
            .create_attendee(&meeting.meeting_id, &external_user_id)
            .await?;
        attendee.name = Some(attendee_name.to_string());

        info!(
            "Attendee {} joined meeting {} (title: {})",
            attendee.attendee_id, meeting.meeting_id, title
        );

        let mut state = self.state.write().await;
        state
            .attendees
            .entry(title.to_string())
            .or_default()
            .insert(attendee.attendee_id.clone(), attendee.clone());

        Ok((meeting, attendee))
    }

    /// Look up a registered attendee.
    pub async fn attendee(
        &self,
        title: &str,
        attendee_id: &str,
    ) -> Result<Attendee, RegistryError> {
        self.state
            .read()
            .await
            .attendees
            .get(title)
            .and_then(|by_id| by_id.get(attendee_id))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound("Attendee not found".to_string()))
    }

    /// Delete the provider-side meeting for `title`.
    ///
    /// The local meeting and attendee records are intentionally left in
    /// place: the title stays cached after the provider-side resource is
    /// gone and serves stale join info until restart.
    pub async fn end_meeting(&self, title: &str) -> Result<(), RegistryError> {
        let meeting_id = self
            .state
            .read()
            .await
            .meetings
            .get(title)
            .map(|m| m.meeting_id.clone())
            .ok_or_else(|| RegistryError::NotFound("Meeting not found".to_string()))?;

        self.provider.delete_meeting(&meeting_id).await?;
        info!("Ended meeting {} (title: {})", meeting_id, title);

        Ok(())
    }

    /// Start a media capture pipeline for `title`.
    ///
    /// Repeated calls create additional provider-side pipelines; only the
    /// latest descriptor is kept locally. There is no de-duplication.
    pub async fn start_capture(&self, title: &str) -> Result<CapturePipeline, RegistryError> {
        let sink_arn = self.capture_sink_arn()?;

        let meeting_id = self
            .state
            .read()
            .await
            .meetings
            .get(title)
            .map(|m| m.meeting_id.clone())
            .ok_or_else(|| RegistryError::NotFound("Meeting not found".to_string()))?;

        let identity = self.provider.caller_identity().await?;
        let request = CreateCapturePipelineRequest {
            source_type: "ChimeSdkMeeting".to_string(),
            source_arn: format!("arn:aws:chime::{}:meeting:{}", identity.account, meeting_id),
            sink_type: "S3Bucket".to_string(),
            sink_arn,
        };

        let pipeline = self.provider.create_capture_pipeline(request).await?;
        info!(
            "Started capture pipeline {} for title: {}",
            pipeline.media_pipeline_id, title
        );

        self.state
            .write()
            .await
            .captures
            .insert(title.to_string(), pipeline.clone());

        Ok(pipeline)
    }

    /// Delete the capture pipeline for `title` and drop the local record.
    pub async fn end_capture(&self, title: &str) -> Result<(), RegistryError> {
        self.capture_sink_arn()?;

        let pipeline_id = self
            .state
            .read()
            .await
            .captures
            .get(title)
            .map(|p| p.media_pipeline_id.clone())
            .ok_or_else(|| {
                RegistryError::NotFound("No active capture found for meeting".to_string())
            })?;

        self.provider.delete_capture_pipeline(&pipeline_id).await?;
        info!(
            "Ended capture pipeline {} for title: {}",
            pipeline_id, title
        );

        self.state.write().await.captures.remove(title);

        Ok(())
    }

    fn capture_sink_arn(&self) -> Result<String, RegistryError> {
        self.capture_sink_arn.clone().ok_or_else(|| {
            RegistryError::Config("No capture sink destination configured".to_string())
        })
    }
}

fn external_meeting_id(title: &str) -> String {
    title.chars().take(EXTERNAL_MEETING_ID_MAX).collect()
}
