use crate::emotion::Emotion;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn roast(idea: &str, emotion: Emotion) -> String {
    format!(
        "Act as a {emotion} standup comedian analyzing: {idea}\n\
         Include 3 funny but insightful critiques and 1 genuine advice.\n\
         Format:\n\
         - {title} opening analogy\n\
         - 3 joke-based market insights\n\
         - 1 {emotion} piece of advice\n\
         - Emotional closing line",
        title = capitalize(emotion.as_str()),
    )
}

pub fn insight(idea: &str, emotion: Emotion) -> String {
    format!(
        "Act as a {emotion} startup mentor giving a short spoken briefing on: {idea}\n\
         Include 3 actionable insights and 1 piece of honest guidance.\n\
         Format:\n\
         - {title} opening hook\n\
         - 3 market or product insights\n\
         - 1 {emotion} piece of guidance\n\
         - Memorable closing line",
        title = capitalize(emotion.as_str()),
    )
}
