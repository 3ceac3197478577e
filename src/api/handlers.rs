use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{EmotionInfo, EmotionsResponse, HealthResponse, IdeaRequest};
use crate::api::routes::AppState;
use crate::emotion::{Emotion, EMOTIONS};
use crate::error::AppError;
use crate::pipeline::{self, Pipeline};

pub async fn roast(
    State(state): State<Arc<AppState>>,
    body: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    speak(&state, &pipeline::ROAST, body).await
}

pub async fn insight(
    State(state): State<Arc<AppState>>,
    body: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    speak(&state, &pipeline::INSIGHT, body).await
}

/// Check the request, run the pipeline, and return the audio as an attachment.
async fn speak(
    state: &AppState,
    pipeline: &Pipeline,
    body: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let (idea, emotion) = validate(body)?;

    let audio = pipeline
        .run(&state.llm, &state.speech, &idea, emotion)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", pipeline.filename(emotion));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        audio,
    )
        .into_response())
}

fn validate(body: Result<Json<IdeaRequest>, JsonRejection>) -> Result<(String, Emotion), AppError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection);
        match rejection {
            // No readable JSON object, so no idea either
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                AppError::MissingIdea
            }
            other => AppError::InvalidBody(other.body_text()),
        }
    })?;

    let idea = request
        .idea
        .filter(|idea| !idea.trim().is_empty())
        .ok_or(AppError::MissingIdea)?;

    let emotion = match request.emotion.as_deref() {
        None => Emotion::Default,
        Some(tag) => tag.parse::<Emotion>()?,
    };

    Ok((idea, emotion))
}

pub async fn list_emotions() -> Json<EmotionsResponse> {
    let emotions = EMOTIONS
        .iter()
        .map(|entry| EmotionInfo {
            name: entry.emotion.as_str(),
            profile: entry.profile,
        })
        .collect();

    Json(EmotionsResponse { emotions })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
