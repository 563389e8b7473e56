//! Tokenization and token filtering.
//!
//! Splits normalized text on whitespace, drops stopwords and noise, and
//! applies a naive plural/possessive stemmer. Input is expected to come from
//! [`super::normalizer::normalize`].

use crate::lexicon::Lexicon;

/// Strip a trailing possessive, then a trailing plural `s`.
///
/// The plural rule only fires for words longer than four characters that do
/// not end in `ss`. This is deliberately naive: "batteries" becomes
/// "batterie" and "analysis" becomes "analysi".
pub fn stem(word: &str) -> String {
    let word = word
        .strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .unwrap_or(word);

    if word.chars().count() > 4 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

/// Splits normalized text into filtered, stemmed tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
    /// Lowercased, non-empty exclude words
    exclude_words: Vec<String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            exclude_words: Vec::new(),
        }
    }

    /// Drop any token containing one of `words` (case-insensitive).
    pub fn with_exclude_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    /// Tokenize a normalized string.
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        normalized
            .split_whitespace()
            .filter_map(|raw| self.accept(raw))
            .collect()
    }

    /// Run one raw word through the filters, returning its stemmed form.
    fn accept(&self, raw: &str) -> Option<String> {
        if self.lexicon.rejects_token(raw) {
            return None;
        }

        let token = stem(raw);
        // stemming can expose a stopword ("reports" -> "report")
        if token != raw && self.lexicon.rejects_token(&token) {
            return None;
        }

        if self.is_excluded(&token) || (token != raw && self.is_excluded(raw)) {
            return None;
        }

        Some(token)
    }

    /// Whether `token` contains one of the exclude words
    pub fn is_excluded(&self, token: &str) -> bool {
        if self.exclude_words.is_empty() {
            return false;
        }
        let lowered = token.to_lowercase();
        self.exclude_words.iter().any(|w| lowered.contains(w.as_str()))
    }
}
