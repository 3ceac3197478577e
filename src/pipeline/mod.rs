pub mod prompt;

use crate::emotion::Emotion;
use crate::error::AppError;
use crate::llm::GeminiClient;
use crate::speech::SpeechService;

/// A prompt -> text -> emotion transform -> speech pipeline for one route.
pub struct Pipeline {
    pub name: &'static str,
    template: fn(&str, Emotion) -> String,
}

pub const ROAST: Pipeline = Pipeline {
    name: "roast",
    template: prompt::roast,
};

pub const INSIGHT: Pipeline = Pipeline {
    name: "insight",
    template: prompt::insight,
};

impl Pipeline {
    pub fn prompt(&self, idea: &str, emotion: Emotion) -> String {
        (self.template)(idea, emotion)
    }

    /// Attachment name for the generated audio, e.g. `sarcastic_roast.mp3`.
    pub fn filename(&self, emotion: Emotion) -> String {
        format!("{}_{}.mp3", emotion, self.name)
    }

    pub async fn run(
        &self,
        llm: &GeminiClient,
        speech: &SpeechService,
        idea: &str,
        emotion: Emotion,
    ) -> Result<Vec<u8>, AppError> {
        // 1. Generate commentary
        let prompt = self.prompt(idea, emotion);
        let generated = llm.generate(&prompt).await?;

        // 2. Shape it for the emotion
        let shaped = emotion.transform(&generated);

        tracing::info!(
            "{}: emotion={} generated={} chars, shaped={} chars",
            self.name,
            emotion,
            generated.chars().count(),
            shaped.chars().count()
        );

        // 3. Speak it
        let audio = speech.synthesize(&shaped, emotion.profile()).await?;

        tracing::info!("{}: produced {} bytes of audio", self.name, audio.len());

        Ok(audio)
    }
}
