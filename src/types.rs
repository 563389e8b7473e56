//! Core types shared across the extraction pipeline.

use serde::{Deserialize, Serialize};

/// An article-like record supplied by the feed collaborator.
///
/// Only `title` is required; the body text is taken from the first
/// non-empty of `description`, `summary` and `snippet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl ArticleRecord {
    /// Create a record with a title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            summary: None,
            snippet: None,
        }
    }

    /// Create a record that only has a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The body text used alongside the title.
    pub fn body(&self) -> &str {
        [&self.description, &self.summary, &self.snippet]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }

    /// Title and body joined with a single space.
    pub fn full_text(&self) -> String {
        let body = self.body();
        if body.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.title, body)
        }
    }
}

/// A ranked keyword: a unigram or a space-joined bigram with its count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
}

impl KeywordEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Whether this entry is a multi-word phrase
    pub fn is_phrase(&self) -> bool {
        self.word.contains(' ')
    }
}

/// A keyword whose frequency grew between the older and recent windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RisingEntry {
    pub word: String,
    /// Percentage change from the older count, always positive.
    pub change: i64,
}

/// Output of trend classification over two article windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    pub emerging: Vec<KeywordEntry>,
    pub rising: Vec<RisingEntry>,
    pub declining: Vec<KeywordEntry>,
}

impl TrendReport {
    pub fn is_empty(&self) -> bool {
        self.emerging.is_empty() && self.rising.is_empty() && self.declining.is_empty()
    }
}

/// A caller-supplied include word with its count multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeWord {
    pub word: String,
    pub weight: f64,
}

impl IncludeWord {
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }

    /// An include word with the neutral weight of 1
    pub fn plain(word: impl Into<String>) -> Self {
        Self::new(word, 1.0)
    }
}

impl From<&str> for IncludeWord {
    fn from(word: &str) -> Self {
        Self::plain(word)
    }
}

/// Heuristic constants of the keyword ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankerConfig {
    /// Minimum occurrences before a bigram enters the keyword pool
    pub min_bigram_count: usize,
    /// Multi-word phrases must contain at least one domain term
    pub require_domain_term: bool,
    /// Count multiplier for keywords matching a sector term
    pub sector_boost: usize,
    /// Single words shorter than this are dropped unless they are domain terms
    pub min_single_word_len: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_bigram_count: 2,
            require_domain_term: true,
            sector_boost: 2,
            min_single_word_len: 4,
        }
    }
}

impl RankerConfig {
    pub fn with_min_bigram_count(mut self, min: usize) -> Self {
        self.min_bigram_count = min;
        self
    }

    pub fn with_require_domain_term(mut self, require: bool) -> Self {
        self.require_domain_term = require;
        self
    }

    pub fn with_sector_boost(mut self, boost: usize) -> Self {
        self.sector_boost = boost;
        self
    }
}

/// Per-call extraction options, with the sector already resolved to its
/// term list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOptions {
    /// Maximum number of keywords returned
    pub top_n: usize,
    /// Terms of the selected sector, if any
    pub sector_terms: Option<Vec<String>>,
    /// Filter to sector terms instead of boosting them
    pub strict_sector_terms: bool,
    pub include_words: Vec<IncludeWord>,
    /// Tokens containing any of these are dropped before counting
    pub exclude_words: Vec<String>,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            top_n: 30,
            sector_terms: None,
            strict_sector_terms: false,
            include_words: Vec::new(),
            exclude_words: Vec::new(),
        }
    }
}

impl ExtractionOptions {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_sector_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sector_terms = Some(terms.into_iter().map(|t| t.as_ref().to_lowercase()).collect());
        self
    }

    pub fn with_strict_sector_terms(mut self, strict: bool) -> Self {
        self.strict_sector_terms = strict;
        self
    }

    pub fn with_include_words(mut self, words: Vec<IncludeWord>) -> Self {
        self.include_words = words;
        self
    }

    pub fn with_exclude_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }
}
