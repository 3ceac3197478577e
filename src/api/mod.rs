pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::emotion::VoiceProfile;

#[derive(Debug, Deserialize)]
pub struct IdeaRequest {
    pub idea: Option<String>,
    pub emotion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmotionInfo {
    pub name: &'static str,
    #[serde(flatten)]
    pub profile: VoiceProfile,
}

#[derive(Debug, Serialize)]
pub struct EmotionsResponse {
    pub emotions: Vec<EmotionInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
