//! Keyword trend classification
//!
//! This module compares keyword frequencies between a recent and an older
//! article window:
//! - windows: Splits per-source feeds into the two windows
//! - classifier: Emerging, rising and declining keywords

pub mod classifier;
pub mod windows;

pub use classifier::{classify_trends, TrendClassifier};
pub use windows::{SourceFeed, TrendWindows, WindowConfig};

/// How article titles are turned into trend words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendTokenization {
    /// Lowercased title words longer than four characters, no other filtering
    TitleLength,
    /// Titles go through the same normalizer and tokenizer as extraction
    #[default]
    Pipeline,
}

impl TrendTokenization {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "title_length" | "titlelength" | "length" => TrendTokenization::TitleLength,
            _ => TrendTokenization::Pipeline,
        }
    }
}

impl std::str::FromStr for TrendTokenization {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TrendTokenization::parse(value))
    }
}
