//! Recent/older window splitting over per-source feeds.

use serde::{Deserialize, Serialize};

use crate::types::ArticleRecord;

/// Articles fetched from one source, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFeed {
    pub source: String,
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
}

impl SourceFeed {
    pub fn new(source: impl Into<String>, articles: Vec<ArticleRecord>) -> Self {
        Self {
            source: source.into(),
            articles,
        }
    }
}

/// Window sizes applied to every feed.
///
/// With the defaults, articles `0..5` of each feed are recent and `5..15`
/// are older; anything past that is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub recent: usize,
    pub older: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            recent: 5,
            older: 10,
        }
    }
}

/// The two windows, borrowed from the feeds in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendWindows<'a> {
    pub recent: Vec<&'a ArticleRecord>,
    pub older: Vec<&'a ArticleRecord>,
}

impl WindowConfig {
    pub fn new(recent: usize, older: usize) -> Self {
        Self { recent, older }
    }

    /// Split every feed and concatenate the per-source windows.
    pub fn split<'a>(&self, feeds: &'a [SourceFeed]) -> TrendWindows<'a> {
        let mut windows = TrendWindows::default();
        for feed in feeds {
            let recent_end = self.recent.min(feed.articles.len());
            let older_end = self.recent.saturating_add(self.older).min(feed.articles.len());
            windows.recent.extend(&feed.articles[..recent_end]);
            windows.older.extend(&feed.articles[recent_end..older_end]);
        }
        windows
    }
}
