//! HTTP API surface for the meeting client
//!
//! This module exposes the meeting lifecycle endpoints:
//! - POST /meetings - Create (or return) the meeting for a title
//! - POST /join - Join a meeting, creating it if needed
//! - GET /attendee - Look up a registered attendee
//! - POST /end - Delete the provider-side meeting
//! - POST /startCapture - Start a media capture pipeline
//! - POST /endCapture - Stop the capture pipeline
//! - POST /logs - Accept client-side logs
//! - GET /health - Health check
//!
//! Anything else answers 400.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
