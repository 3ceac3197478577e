pub mod chunker;
pub mod gtts;

use reqwest::Client;

use crate::emotion::VoiceProfile;
use crate::error::AppError;

use gtts::TtsRequest;

pub struct SpeechService {
    client: Client,
    host_template: String,
    language: String,
}

impl SpeechService {
    pub fn new(client: Client, host_template: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client,
            host_template: host_template.into(),
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Synthesize `text` with the profile's regional voice, returning MP3 bytes.
    pub async fn synthesize(&self, text: &str, profile: VoiceProfile) -> Result<Vec<u8>, AppError> {
        // 1. Chunk to the endpoint's length limit
        let chunks = chunker::chunk(text, chunker::MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(AppError::Synthesis("No speakable text".to_string()));
        }

        // 2. Fetch each chunk in order and concatenate the MP3 bytes
        let host = gtts::host_for(&self.host_template, profile.tld);
        let total = chunks.len();
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let request = TtsRequest {
                text: chunk,
                lang: &self.language,
                slow: profile.slow,
                idx,
                total,
            };
            audio.extend(gtts::fetch(&self.client, &host, &request).await?);
        }

        tracing::debug!("Synthesized {} chunks into {} bytes via {}", total, audio.len(), host);

        if audio.is_empty() {
            return Err(AppError::Synthesis("Speech service returned no audio".to_string()));
        }

        Ok(audio)
    }
}
