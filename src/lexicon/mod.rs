//! Versioned lexical data: stopwords, junk tokens, firewall patterns,
//! domain terms and sector term lists.
//!
//! A [`Lexicon`] bundles everything the token and phrase filters consult.
//! The default lexicon is built from the static tables in [`tables`] and
//! [`firewall`]; deployments can extend it with [`LexiconOverrides`].

pub mod firewall;
pub mod sectors;
pub mod tables;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nlp::stopwords::StopwordFilter;
use firewall::Firewall;
use tables::{DOMAIN_TERMS, JUNK_TOKENS, NOISE_SUBSTRINGS};

/// Version of the built-in tables. Bump whenever a list changes.
pub const LEXICON_VERSION: u32 = 3;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid firewall pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Caller-supplied additions to the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexiconOverrides {
    pub extra_stopwords: Vec<String>,
    pub extra_junk: Vec<String>,
    pub extra_domain_terms: Vec<String>,
    pub extra_firewall_patterns: Vec<String>,
}

/// Word lists and patterns consulted by the tokenizer and phrase validator.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: StopwordFilter,
    junk: FxHashSet<String>,
    noise_substrings: Vec<String>,
    firewall: Firewall,
    domain_terms: FxHashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::news()
    }
}

impl Lexicon {
    /// The built-in news lexicon
    pub fn news() -> Self {
        Self {
            stopwords: StopwordFilter::news(),
            junk: JUNK_TOKENS.iter().map(|s| s.to_string()).collect(),
            noise_substrings: NOISE_SUBSTRINGS.iter().map(|s| s.to_string()).collect(),
            firewall: Firewall::default(),
            domain_terms: DOMAIN_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Merge the general-purpose stopword list for `language` into the
    /// news list.
    pub fn with_language_stopwords(mut self, language: &str) -> Self {
        self.stopwords.extend_from_language(language);
        self
    }

    /// Apply caller overrides on top of this lexicon.
    pub fn with_overrides(mut self, overrides: &LexiconOverrides) -> Result<Self, LexiconError> {
        self.stopwords.add_stopwords(&overrides.extra_stopwords);
        self.junk
            .extend(overrides.extra_junk.iter().map(|w| w.to_lowercase()));
        self.domain_terms
            .extend(overrides.extra_domain_terms.iter().map(|w| w.to_lowercase()));
        for pattern in &overrides.extra_firewall_patterns {
            self.firewall
                .push_pattern(pattern)
                .map_err(|source| LexiconError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }
        Ok(self)
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn firewall(&self) -> &Firewall {
        &self.firewall
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }

    pub fn is_junk(&self, word: &str) -> bool {
        self.junk.contains(word)
    }

    pub fn is_domain_term(&self, word: &str) -> bool {
        self.domain_terms.contains(word)
    }

    /// Whether `word` carries URL or feed debris
    pub fn has_noise_substring(&self, word: &str) -> bool {
        self.noise_substrings.iter().any(|s| word.contains(s.as_str()))
    }

    /// The full single-token rejection rule: too short, non-alphabetic,
    /// stopword, junk, firewalled or noisy.
    pub fn rejects_token(&self, word: &str) -> bool {
        word.chars().count() < 3
            || !word.chars().all(char::is_alphabetic)
            || self.is_stopword(word)
            || self.is_junk(word)
            || self.firewall.matches(word)
            || self.has_noise_substring(word)
    }
}
