//! paralex-server
//!
//! The HTTP surface of the legal-assistant backend: transcription upload,
//! follow-up suggestions, and the streamed conversational turn. Every
//! request executes independently; there is no server-side session state.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/transcribe", post(routes::transcribe::transcribe))
        .route("/api/suggestions", post(routes::suggestions::suggestions))
        .route("/api/chat", post(routes::chat::chat))
        .layer(axum_mw::from_fn(middleware::request_log))
        .layer(cors)
        .with_state(state)
}
