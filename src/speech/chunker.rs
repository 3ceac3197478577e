use lazy_static::lazy_static;
use regex::Regex;

/// Longest text the translate TTS endpoint accepts in one request.
pub const MAX_CHUNK_CHARS: usize = 100;

lazy_static! {
    static ref BOUNDARY_REGEX: Regex = Regex::new(
        r"(?x)
        [.!?;:,।]+(?:\s+|$)|    # Sentence or clause punctuation
        \n+                     # Line breaks
        "
    )
    .unwrap();
}

/// Split text into speakable chunks of at most `max` characters.
pub fn chunk(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);

    let pieces = split_boundaries(text)
        .into_iter()
        .flat_map(|piece| split_long(piece, max));

    merge(pieces, max)
}

fn split_boundaries(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last_end = 0;

    for m in BOUNDARY_REGEX.find_iter(text) {
        pieces.push(&text[last_end..m.end()]);
        last_end = m.end();
    }

    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// Pack words into pieces that fit; words longer than `max` are cut.
fn split_long(piece: &str, max: usize) -> Vec<String> {
    if char_len(piece) <= max {
        return vec![piece.to_string()];
    }

    let words = piece.split_whitespace().flat_map(|word| {
        let chars: Vec<char> = word.chars().collect();
        chars
            .chunks(max)
            .map(|c| c.iter().collect::<String>())
            .collect::<Vec<_>>()
    });

    merge(words, max)
}

fn merge(pieces: impl IntoIterator<Item = String>, max: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();

    for piece in pieces {
        match chunks.last_mut() {
            Some(current) if char_len(current) + 1 + char_len(&piece) <= max => {
                current.push(' ');
                current.push_str(&piece);
            }
            _ => chunks.push(piece),
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(chunk("Hello there.", 100), vec!["Hello there."]);
    }

    #[test]
    fn empty_and_blank_text_yield_nothing() {
        assert!(chunk("", 100).is_empty());
        assert!(chunk("  \n\n ", 100).is_empty());
    }

    #[test]
    fn splits_at_sentence_boundaries() {
        let chunks = chunk("One two. Three four! Five six?", 12);
        assert_eq!(chunks, vec!["One two.", "Three four!", "Five six?"]);
    }

    #[test]
    fn merges_small_sentences() {
        let chunks = chunk("Hi. Yo. Sup.", 100);
        assert_eq!(chunks, vec!["Hi. Yo. Sup."]);
    }

    #[test]
    fn does_not_split_decimals() {
        assert_eq!(chunk("Costs 3.14 dollars", 100), vec!["Costs 3.14 dollars"]);
    }

    #[test]
    fn splits_long_sentences_on_whitespace() {
        let text = "word ".repeat(50);
        let chunks = chunk(&text, 20);
        assert!(chunks.len() > 1);
        for c in &chunks {
            assert!(char_len(c) <= 20, "chunk too long: {:?}", c);
        }
        let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
        assert_eq!(rejoined.len(), 50);
    }

    #[test]
    fn hard_splits_oversized_words() {
        let chunks = chunk(&"x".repeat(25), 10);
        assert_eq!(chunks, vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "नमस्ते ".repeat(30);
        for c in chunk(&text, MAX_CHUNK_CHARS) {
            assert!(char_len(&c) <= MAX_CHUNK_CHARS);
        }
    }

    #[test]
    fn line_breaks_separate_pieces() {
        let chunks = chunk("⚠️ First.\n\nSecond", 10);
        assert_eq!(chunks, vec!["⚠️ First.", "Second"]);
    }
}
