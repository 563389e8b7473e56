//! Emerging, rising and declining keywords across two windows.
//!
//! Both windows are reduced to word-frequency tables over article titles
//! only. A word is:
//!
//! - **emerging** when it appears in the recent window and never in the
//!   older one, ranked by recent count;
//! - **rising** when it appears in both and its count grew, ranked by the
//!   rounded percentage change;
//! - **declining** when its recent count is lower than its older count
//!   (including absent), ranked by older count.
//!
//! Every list is sorted with a stable sort, so ties keep first-seen order,
//! and truncated to the classifier's limit.

use crate::lexicon::Lexicon;
use crate::nlp::normalizer::normalize;
use crate::nlp::tokenizer::Tokenizer;
use crate::phrase::counter::FrequencyTable;
use crate::trend::windows::{SourceFeed, WindowConfig};
use crate::trend::TrendTokenization;
use crate::types::{ArticleRecord, KeywordEntry, RisingEntry, TrendReport};

/// Default number of entries kept per trend list
pub const DEFAULT_TREND_LIMIT: usize = 5;

/// Minimum length (exclusive) of a title word in [`TrendTokenization::TitleLength`] mode
const TITLE_WORD_MIN_LEN: usize = 4;

/// Classifies keywords into emerging, rising and declining lists.
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    lexicon: Lexicon,
    tokenization: TrendTokenization,
    windows: WindowConfig,
    limit: usize,
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::news(),
            tokenization: TrendTokenization::default(),
            windows: WindowConfig::default(),
            limit: DEFAULT_TREND_LIMIT,
        }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_tokenization(mut self, tokenization: TrendTokenization) -> Self {
        self.tokenization = tokenization;
        self
    }

    pub fn with_windows(mut self, windows: WindowConfig) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn tokenization(&self) -> TrendTokenization {
        self.tokenization
    }

    /// Split `feeds` into windows and classify them.
    pub fn classify_feeds(&self, feeds: &[SourceFeed]) -> TrendReport {
        let windows = self.windows.split(feeds);
        self.classify(windows.recent, windows.older)
    }

    /// Classify two explicit article windows.
    pub fn classify<'a, R, O>(&self, recent: R, older: O) -> TrendReport
    where
        R: IntoIterator<Item = &'a ArticleRecord>,
        O: IntoIterator<Item = &'a ArticleRecord>,
    {
        let recent = self.frequencies(recent);
        let older = self.frequencies(older);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            recent_words = recent.len(),
            older_words = older.len(),
            "built trend frequency tables"
        );

        TrendReport {
            emerging: self.emerging(&recent, &older),
            rising: self.rising(&recent, &older),
            declining: self.declining(&recent, &older),
        }
    }

    /// Word frequencies over the titles of `articles`.
    fn frequencies<'a>(&self, articles: impl IntoIterator<Item = &'a ArticleRecord>) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        match self.tokenization {
            TrendTokenization::TitleLength => {
                for article in articles {
                    for word in title_words(&article.title) {
                        table.add(&word);
                    }
                }
            }
            TrendTokenization::Pipeline => {
                let tokenizer = Tokenizer::new(&self.lexicon);
                for article in articles {
                    for token in tokenizer.tokenize(&normalize(&article.title)) {
                        table.add(&token);
                    }
                }
            }
        }
        table
    }

    fn emerging(&self, recent: &FrequencyTable, older: &FrequencyTable) -> Vec<KeywordEntry> {
        let mut out: Vec<KeywordEntry> = recent
            .iter()
            .filter(|(word, _)| !older.contains(word))
            .map(|(word, count)| KeywordEntry::new(word, count))
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out.truncate(self.limit);
        out
    }

    fn rising(&self, recent: &FrequencyTable, older: &FrequencyTable) -> Vec<RisingEntry> {
        let mut out: Vec<RisingEntry> = recent
            .iter()
            .filter_map(|(word, r)| {
                let change = percent_change(r, older.get(word))?;
                (change > 0).then(|| RisingEntry {
                    word: word.to_string(),
                    change,
                })
            })
            .collect();
        out.sort_by(|a, b| b.change.cmp(&a.change));
        out.truncate(self.limit);
        out
    }

    fn declining(&self, recent: &FrequencyTable, older: &FrequencyTable) -> Vec<KeywordEntry> {
        let mut out: Vec<KeywordEntry> = older
            .iter()
            .filter(|(word, o)| recent.get(word) < *o)
            .map(|(word, o)| KeywordEntry::new(word, o))
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out.truncate(self.limit);
        out
    }
}

/// Rounded percentage change from `older` to `recent`.
///
/// `None` when the older count is zero: the change is undefined.
fn percent_change(recent: usize, older: usize) -> Option<i64> {
    if older == 0 {
        return None;
    }
    let change = (recent as f64 - older as f64) / older as f64 * 100.0;
    Some(change.round() as i64)
}

/// Lowercased title words longer than four characters.
fn title_words(title: &str) -> impl Iterator<Item = String> + '_ {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > TITLE_WORD_MIN_LEN)
        .map(str::to_lowercase)
}

/// Classify two article windows with the default classifier.
pub fn classify_trends(recent: &[ArticleRecord], older: &[ArticleRecord]) -> TrendReport {
    TrendClassifier::new().classify(recent, older)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(titles: &[&str]) -> Vec<ArticleRecord> {
        titles.iter().map(|t| ArticleRecord::titled(*t)).collect()
    }

    #[test]
    fn test_emerging_word() {
        let recent = titles(&[
            "Drug recall widens",
            "Second recall hits pharmacies",
            "Insulin recall expands",
        ]);
        let older = titles(&["Insulin pricing debate", "Vaccine trial results"]);

        let report = classify_trends(&recent, &older);

        assert!(report.emerging.contains(&KeywordEntry::new("recall", 3)));
        assert!(report.rising.iter().all(|e| e.word != "recall"));
        assert!(report.declining.iter().all(|e| e.word != "recall"));
    }

    #[test]
    fn test_rising_change_is_rounded_percentage() {
        let recent = titles(&["Lithium lithium lithium", "Cobalt shortage"]);
        let older = titles(&["Lithium lithium", "Cobalt mining"]);

        let report = classify_trends(&recent, &older);

        assert_eq!(
            report.rising,
            vec![RisingEntry {
                word: "lithium".into(),
                change: 50
            }]
        );
        // cobalt is flat: neither rising nor declining
        assert!(report.declining.iter().all(|e| e.word != "cobalt"));
    }

    #[test]
    fn test_declining_includes_absent_and_lower() {
        let recent = titles(&["Refinery output steady"]);
        let older = titles(&[
            "Refinery outage",
            "Refinery strike",
            "Pipeline leak",
            "Pipeline repair",
            "Pipeline fire",
        ]);

        let report = classify_trends(&recent, &older);

        assert_eq!(report.declining[0], KeywordEntry::new("pipeline", 3));
        assert_eq!(report.declining[1], KeywordEntry::new("refinery", 2));
    }

    #[test]
    fn test_limit_and_stable_ties() {
        let recent = titles(&["alpha bravo charlie delta echo foxtrot golf"]);
        let older: Vec<ArticleRecord> = Vec::new();

        let report = TrendClassifier::new()
            .with_tokenization(TrendTokenization::TitleLength)
            .with_limit(3)
            .classify(&recent, &older);

        let words: Vec<&str> = report.emerging.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_title_length_mode_keeps_stopwords() {
        let recent = titles(&["About these batteries"]);
        let older: Vec<ArticleRecord> = Vec::new();
        let report = TrendClassifier::new()
            .with_tokenization(TrendTokenization::TitleLength)
            .classify(&recent, &older);

        let words: Vec<&str> = report.emerging.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["about", "these", "batteries"]);
    }

    #[test]
    fn test_pipeline_mode_filters_stopwords() {
        let recent = titles(&["About these batteries"]);
        let report = classify_trends(&recent, &[]);

        let words: Vec<&str> = report.emerging.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["batterie"]);
    }

    #[test]
    fn test_descriptions_are_ignored() {
        let recent = vec![ArticleRecord::new("Tariff news", "semiconductor semiconductor")];
        let report = classify_trends(&recent, &[]);
        assert!(report.emerging.iter().all(|e| e.word != "semiconductor"));
    }

    #[test]
    fn test_classify_feeds_uses_windows() {
        let mut articles = titles(&["Cathode breakthrough"; 2]);
        articles.extend(titles(&["Anode supply"; 3]));
        let feeds = vec![SourceFeed::new("feed", articles)];

        let report = TrendClassifier::new()
            .with_windows(WindowConfig::new(2, 3))
            .classify_feeds(&feeds);

        assert_eq!(report.emerging[0], KeywordEntry::new("cathode", 2));
        assert_eq!(report.declining[0], KeywordEntry::new("anode", 3));
    }

    #[test]
    fn test_empty_windows() {
        assert!(classify_trends(&[], &[]).is_empty());
    }

    #[test]
    fn test_percent_change_undefined_for_zero() {
        assert_eq!(percent_change(3, 0), None);
        assert_eq!(percent_change(3, 2), Some(50));
        assert_eq!(percent_change(1, 3), Some(-67));
    }
}
