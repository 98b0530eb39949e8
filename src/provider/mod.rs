//! Adapter for the hosted conferencing provider.
//!
//! The provider owns the real meeting, attendee, and capture-pipeline
//! resources; this module only defines the calls the registry makes against
//! it. `RestProvider` is the production implementation; tests substitute
//! their own [`ConferenceProvider`] impl.

mod client;
mod types;

pub use client::{ConferenceProvider, ProviderError, RestProvider};
pub use types::{
    Attendee, CallerIdentity, CapturePipeline, CreateCapturePipelineRequest, CreateMeetingRequest,
    Meeting,
};
