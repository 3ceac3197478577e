use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing startup idea")]
    MissingIdea,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Emotion '{0}' has no voice profile")]
    UnknownEmotion(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        let (status, code) = match self {
            AppError::MissingIdea => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
            AppError::UnknownEmotion(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UNKNOWN_EMOTION"),
            AppError::Generation(_) => (StatusCode::BAD_GATEWAY, "GENERATION_ERROR"),
            AppError::Synthesis(_) => (StatusCode::BAD_GATEWAY, "SYNTHESIS_ERROR"),
        };
        (status, code, self.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        tracing::error!("Request failed: {} - {}", code, message);

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_idea_is_client_error_with_fixed_message() {
        let (status, code, message) = AppError::MissingIdea.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
        assert_eq!(message, "Missing startup idea");
    }

    #[test]
    fn unknown_emotion_is_server_error() {
        let (status, code, message) = AppError::UnknownEmotion("angry".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "UNKNOWN_EMOTION");
        assert!(message.contains("angry"));
    }

    #[test]
    fn upstream_failures_are_bad_gateway() {
        let (status, _, _) = AppError::Generation("boom".into()).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let (status, _, message) = AppError::Synthesis("quota".into()).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(message, "Speech synthesis failed: quota");
    }

    #[test]
    fn response_message_matches_display() {
        let errors = [
            AppError::MissingIdea,
            AppError::InvalidBody("idea: invalid type".into()),
            AppError::UnknownEmotion("angry".into()),
            AppError::Generation("boom".into()),
            AppError::Synthesis("quota".into()),
        ];
        for err in errors {
            let (_, _, message) = err.parts();
            assert_eq!(message, err.to_string());
        }
    }

    #[test]
    fn invalid_body_is_distinct_client_error() {
        let (status, code, message) = AppError::InvalidBody("emotion: expected a string".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "INVALID_BODY");
        assert_ne!(message, "Missing startup idea");
    }
}
