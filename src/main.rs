use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod emotion;
mod error;
mod llm;
mod pipeline;
mod speech;

use api::routes::{create_router, AppState};
use config::Config;
use llm::GeminiClient;
use speech::SpeechService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;
    let addr = config.addr()?;

    // One connection pool shared by both upstream clients
    let client = reqwest::Client::new();
    let llm = GeminiClient::new(
        client.clone(),
        config.gemini_base_url,
        config.gemini_api_key,
        config.gemini_model,
    );
    let speech = SpeechService::new(client, config.tts_host_template, config.tts_language);

    tracing::info!("Idea Roast Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Generation model: {}", llm.model());
    tracing::info!("Speech language: {}", speech.language());

    let state = Arc::new(AppState { llm, speech });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
