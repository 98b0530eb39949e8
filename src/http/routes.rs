use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Meeting lifecycle
        .route("/meetings", post(handlers::create_meeting))
        .route("/join", post(handlers::join_meeting))
        .route("/attendee", get(handlers::get_attendee))
        .route("/end", post(handlers::end_meeting))
        // Media capture
        .route("/startCapture", post(handlers::start_capture))
        .route("/endCapture", post(handlers::end_capture))
        // Client-side log sink
        .route("/logs", post(handlers::receive_logs))
        // Unsupported endpoints answer 400
        .fallback(handlers::unsupported)
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        // Browser clients call this from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
