use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::llm::GeminiClient;
use crate::speech::SpeechService;

pub struct AppState {
    pub llm: GeminiClient,
    pub speech: SpeechService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/roast", post(handlers::roast))
        .route("/insight", post(handlers::insight))
        // Ideas are not length-capped
        .layer(DefaultBodyLimit::disable())
        .route("/emotions", get(handlers::list_emotions))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
