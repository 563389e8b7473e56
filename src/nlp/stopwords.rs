//! Stopword filtering
//!
//! The default filter is the closed news list from
//! [`crate::lexicon::tables::NEWS_STOPWORDS`]. General-purpose lists for
//! other languages come from the `stop-words` crate and can be merged in.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::lexicon::tables::NEWS_STOPWORDS;

/// Lowercase stopword set consulted by the token filter.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::news()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(iter);
        filter
    }
}

impl StopwordFilter {
    /// The closed English news list
    pub fn news() -> Self {
        NEWS_STOPWORDS.iter().collect()
    }

    /// Only the `stop-words` list for `language`
    pub fn for_language(language: &str) -> Self {
        language_list(language).into_iter().collect()
    }

    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Insert `words`, lowercased.
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()).filter(|w| !w.is_empty()));
    }

    /// Merge the general-purpose list for `language` into this filter
    pub fn extend_from_language(&mut self, language: &str) {
        self.add_stopwords(language_list(language));
    }

    /// Case-insensitive membership; lowercase input skips the allocation.
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The `stop-words` list for an ISO code or English language name.
///
/// Unknown languages fall back to English.
fn language_list(language: &str) -> Vec<String> {
    let lang = match language.trim().to_lowercase().as_str() {
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        _ => LANGUAGE::English,
    };
    get(lang).iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_stopwords() {
        let filter = StopwordFilter::news();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("story"));
        assert!(filter.is_stopword("report"));
        assert!(!filter.is_stopword("battery"));
        assert!(!filter.is_stopword("lithium"));
    }

    #[test]
    fn test_default_is_news_list() {
        assert_eq!(StopwordFilter::default().len(), StopwordFilter::news().len());
    }

    #[test]
    fn test_collect_and_extend() {
        let mut filter: StopwordFilter = ["Tariff", " levy ", ""].into_iter().collect();
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stopword("tariff"));
        assert!(filter.is_stopword("levy"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(vec!["Quota".to_string()]);
        assert!(filter.is_stopword("quota"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_language_list() {
        let filter = StopwordFilter::for_language("German");
        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("batterie"));
    }

    #[test]
    fn test_extend_from_language() {
        let mut filter = StopwordFilter::news();
        let before = filter.len();

        filter.extend_from_language("en");

        assert!(filter.len() > before);
        assert!(filter.is_stopword("story"));
    }
}
