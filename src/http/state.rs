use crate::registry::MeetingRegistry;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Meeting lifecycle coordinator
    pub registry: Arc<MeetingRegistry>,

    /// Media region used when a request omits one
    pub default_region: String,
}

impl AppState {
    pub fn new(registry: Arc<MeetingRegistry>, default_region: String) -> Self {
        Self {
            registry,
            default_region,
        }
    }
}
