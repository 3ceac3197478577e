//! Minimal client for the Gemini `generateContent` endpoint.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

/// Client for one Gemini model.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single-turn prompt and return the model's raw text.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(AppError::Generation(format!(
                "API error ({}): {}",
                status.as_u16(),
                body
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Parse error: {}", e)))?;

        extract_text(&payload)
            .ok_or_else(|| AppError::Generation("Model returned no text".to_string()))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Concatenate every text part of every candidate.
fn extract_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let text: String = candidates
        .iter()
        .filter_map(|c| c.get("content")?.get("parts")?.as_array())
        .flatten()
        .filter_map(|part| part.get("text")?.as_str())
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
