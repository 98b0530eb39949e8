pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod registry;

pub use config::{Config, DEFAULT_MEDIA_REGION};
pub use error::RegistryError;
pub use http::{create_router, AppState};
pub use provider::{
    Attendee, CallerIdentity, CapturePipeline, ConferenceProvider, CreateCapturePipelineRequest,
    CreateMeetingRequest, Meeting, ProviderError, RestProvider,
};
pub use registry::MeetingRegistry;
