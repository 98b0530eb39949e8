// Scripted provider used by the integration tests.
//
// Hands out deterministic descriptors, counts calls, and can be told to
// fail specific operations.

use async_trait::async_trait;
use chrono::Utc;
use meeting_bridge::{
    Attendee, CallerIdentity, CapturePipeline, ConferenceProvider, CreateCapturePipelineRequest,
    CreateMeetingRequest, Meeting, ProviderError,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct StubProvider {
    pub meetings_created: AtomicUsize,
    pub attendees_created: AtomicUsize,
    pub pipelines_created: AtomicUsize,
    pub deleted_meetings: Mutex<Vec<String>>,
    pub deleted_pipelines: Mutex<Vec<String>>,
    pub last_meeting_request: Mutex<Option<CreateMeetingRequest>>,
    pub last_pipeline_request: Mutex<Option<CreateCapturePipelineRequest>>,
    pub fail_meeting_create: AtomicBool,
    pub fail_attendee_create: AtomicBool,
}

fn unavailable() -> ProviderError {
    ProviderError::Rejected {
        status: 503,
        message: "ServiceUnavailable".to_string(),
    }
}

#[async_trait]
impl ConferenceProvider for StubProvider {
    async fn create_meeting(
        &self,
        request: CreateMeetingRequest,
    ) -> Result<Meeting, ProviderError> {
        if self.fail_meeting_create.load(Ordering::SeqCst) {
            return Err(unavailable());
        }

        let n = self.meetings_created.fetch_add(1, Ordering::SeqCst) + 1;
        let meeting = Meeting {
            meeting_id: format!("meeting-{}", n),
            external_meeting_id: request.external_meeting_id.clone(),
            media_region: request.media_region.clone(),
            media_placement: serde_json::json!({
                "AudioHostUrl": "audio.example.com:3478",
                "SignalingUrl": "wss://signal.example.com/v2",
            }),
        };
        *self.last_meeting_request.lock().unwrap() = Some(request);
        Ok(meeting)
    }

    async fn delete_meeting(&self, meeting_id: &str) -> Result<(), ProviderError> {
        self.deleted_meetings
            .lock()
            .unwrap()
            .push(meeting_id.to_string());
        Ok(())
    }

    async fn create_attendee(
        &self,
        _meeting_id: &str,
        external_user_id: &str,
    ) -> Result<Attendee, ProviderError> {
        if self.fail_attendee_create.load(Ordering::SeqCst) {
            return Err(unavailable());
        }

        let n = self.attendees_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Attendee {
            attendee_id: format!("attendee-{}", n),
            external_user_id: external_user_id.to_string(),
            join_token: format!("token-{}", n),
            name: None,
        })
    }

    async fn caller_identity(&self) -> Result<CallerIdentity, ProviderError> {
        Ok(CallerIdentity {
            account: "123456789012".to_string(),
        })
    }

    async fn create_capture_pipeline(
        &self,
        request: CreateCapturePipelineRequest,
    ) -> Result<CapturePipeline, ProviderError> {
        let n = self.pipelines_created.fetch_add(1, Ordering::SeqCst) + 1;
        let pipeline = CapturePipeline {
            media_pipeline_id: format!("pipeline-{}", n),
            source_arn: request.source_arn.clone(),
            sink_arn: request.sink_arn.clone(),
            status: "InProgress".to_string(),
            created_timestamp: Some(Utc::now()),
        };
        *self.last_pipeline_request.lock().unwrap() = Some(request);
        Ok(pipeline)
    }

    async fn delete_capture_pipeline(&self, media_pipeline_id: &str) -> Result<(), ProviderError> {
        self.deleted_pipelines
            .lock()
            .unwrap()
            .push(media_pipeline_id.to_string());
        Ok(())
    }
}

pub const SINK_ARN: &str = "arn:aws:s3:::capture-bucket";
