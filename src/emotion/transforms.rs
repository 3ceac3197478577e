use lazy_static::lazy_static;
use regex::Regex;

/// Character cap applied by the sarcasm and excitement transforms.
pub const TRANSFORM_CAP: usize = 300;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\b(\w+)\b").unwrap();
}

/// Text manipulations that fake prosody for a plain TTS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Sarcasm,
    Excitement,
    Gravity,
}

impl Transform {
    pub fn apply(self, text: &str) -> String {
        match self {
            Transform::Identity => text.to_string(),
            Transform::Sarcasm => sarcasm(text),
            Transform::Excitement => excitement(text),
            Transform::Gravity => gravity(text),
        }
    }
}

/// Truncate to `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// Cap first, then double every word with a drawn-out pause.
fn sarcasm(text: &str) -> String {
    WORD_REGEX
        .replace_all(truncate_chars(text, TRANSFORM_CAP), "$1... $1")
        .into_owned()
}

fn excitement(text: &str) -> String {
    let shouted = text.to_uppercase().replace('!', "!!!");
    truncate_chars(&shouted, TRANSFORM_CAP).to_string()
}

fn gravity(text: &str) -> String {
    format!("⚠️ {}", text.replace(". ", ". \n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preserves_text() {
        assert_eq!(Transform::Identity.apply("Hello world."), "Hello world.");
    }

    #[test]
    fn sarcasm_doubles_words() {
        assert_eq!(
            Transform::Sarcasm.apply("great idea"),
            "great... great idea... idea"
        );
    }

    #[test]
    fn sarcasm_keeps_punctuation() {
        assert_eq!(Transform::Sarcasm.apply("Wow, sure."), "Wow... Wow, sure... sure.");
    }

    #[test]
    fn sarcasm_truncates_before_doubling() {
        let input = "a".repeat(TRANSFORM_CAP + 50);
        let expected = format!("{0}... {0}", "a".repeat(TRANSFORM_CAP));
        assert_eq!(Transform::Sarcasm.apply(&input), expected);
    }

    #[test]
    fn excitement_shouts_and_amplifies() {
        assert_eq!(Transform::Excitement.apply("so cool!"), "SO COOL!!!");
    }

    #[test]
    fn excitement_truncates_after_amplifying() {
        let input = "!".repeat(TRANSFORM_CAP);
        let result = Transform::Excitement.apply(&input);
        assert_eq!(result.chars().count(), TRANSFORM_CAP);
    }

    #[test]
    fn gravity_adds_warning_and_breaks() {
        assert_eq!(
            Transform::Gravity.apply("This fails. Markets shift."),
            "⚠️ This fails. \n\nMarkets shift."
        );
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let input = "é".repeat(TRANSFORM_CAP + 1);
        let result = truncate_chars(&input, TRANSFORM_CAP);
        assert_eq!(result.chars().count(), TRANSFORM_CAP);
    }

    #[test]
    fn transforms_are_deterministic() {
        let text = "Coffee ratings! Truly. The future.";
        for t in [
            Transform::Identity,
            Transform::Sarcasm,
            Transform::Excitement,
            Transform::Gravity,
        ] {
            assert_eq!(t.apply(text), t.apply(text));
        }
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(Transform::Sarcasm.apply(""), "");
        assert_eq!(Transform::Excitement.apply(""), "");
        assert_eq!(Transform::Gravity.apply(""), "⚠️ ");
    }
}
