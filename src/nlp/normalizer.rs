//! Text normalization for raw feed text.
//!
//! Strips URLs, file extensions, HTML entities and punctuation, lowercases,
//! and collapses whitespace. The output is a single-space separated string
//! ready for the tokenizer.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("url pattern"));

static FILE_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.(?:jpeg|jpg|png|gif|webp|pdf|mp4|svg|html|xml|json)").expect("extension pattern")
});

static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[a-z]+;").expect("entity pattern"));

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Normalize raw title/description text.
///
/// Empty input yields an empty string; there are no error cases.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let text = URL.replace_all(&lowered, " ");
    let text = FILE_EXTENSION.replace_all(&text, " ");
    let text = HTML_ENTITY.replace_all(&text, " ");
    let text = NON_WORD.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}
