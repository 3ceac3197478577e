pub mod transforms;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

pub use transforms::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Default,
    Sarcastic,
    Excited,
    Serious,
    Motivational,
    Insightful,
}

/// Voice parameters handed to the speech service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceProfile {
    pub tld: &'static str,
    pub slow: bool,
    /// Reported only; the speech service has no pitch control.
    pub pitch: u16,
}

pub struct EmotionEntry {
    pub emotion: Emotion,
    pub transform: Transform,
    pub profile: VoiceProfile,
}

/// Transform and voice settings per emotion, one row each.
pub static EMOTIONS: [EmotionEntry; 6] = [
    EmotionEntry {
        emotion: Emotion::Default,
        transform: Transform::Identity,
        profile: VoiceProfile { tld: "com.au", slow: false, pitch: 80 },
    },
    EmotionEntry {
        emotion: Emotion::Sarcastic,
        transform: Transform::Sarcasm,
        profile: VoiceProfile { tld: "com.au", slow: false, pitch: 50 },
    },
    EmotionEntry {
        emotion: Emotion::Excited,
        transform: Transform::Excitement,
        profile: VoiceProfile { tld: "co.uk", slow: false, pitch: 120 },
    },
    EmotionEntry {
        emotion: Emotion::Serious,
        transform: Transform::Gravity,
        profile: VoiceProfile { tld: "us", slow: true, pitch: 30 },
    },
    EmotionEntry {
        emotion: Emotion::Motivational,
        transform: Transform::Excitement,
        profile: VoiceProfile { tld: "co.uk", slow: false, pitch: 110 },
    },
    EmotionEntry {
        emotion: Emotion::Insightful,
        transform: Transform::Identity,
        profile: VoiceProfile { tld: "com.au", slow: false, pitch: 80 },
    },
];

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Default => "default",
            Emotion::Sarcastic => "sarcastic",
            Emotion::Excited => "excited",
            Emotion::Serious => "serious",
            Emotion::Motivational => "motivational",
            Emotion::Insightful => "insightful",
        }
    }

    fn entry(self) -> &'static EmotionEntry {
        // Rows are stored in discriminant order.
        &EMOTIONS[self as usize]
    }

    pub fn transform(self, text: &str) -> String {
        self.entry().transform.apply(text)
    }

    pub fn profile(self) -> VoiceProfile {
        self.entry().profile
    }
}

impl FromStr for Emotion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        EMOTIONS
            .iter()
            .map(|e| e.emotion)
            .find(|e| e.as_str() == tag)
            .ok_or_else(|| AppError::UnknownEmotion(s.to_string()))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
