//! Keyword ranking
//!
//! Turns n-gram counts into a ranked keyword list:
//!
//! 1. Frequent, valid bigrams seed the pool.
//! 2. Unigrams not already covered by an accepted bigram are added.
//! 3. Sector terms filter (strict) or boost the pool.
//! 4. Include words scale matching counts.
//! 5. A cleanup pass re-validates every keyword.
//! 6. The pool is sorted by count and truncated.
//!
//! Ties keep first-seen order: bigrams before unigrams, each in the order
//! they first appeared in the token stream.

use rustc_hash::FxHashSet;

use crate::lexicon::sectors::matches_any_term;
use crate::lexicon::Lexicon;
use crate::phrase::counter::NgramCounts;
use crate::phrase::validator::PhraseValidator;
use crate::types::{ExtractionOptions, IncludeWord, KeywordEntry, RankerConfig};

/// Largest sector boost accepted by options validation
pub const MAX_SECTOR_BOOST: usize = 1_000;

/// Include weights above this are capped
pub const MAX_INCLUDE_WEIGHT: f64 = 1_000.0;

/// Ranks keywords from n-gram counts
#[derive(Debug, Clone, Copy)]
pub struct KeywordRanker<'a> {
    lexicon: &'a Lexicon,
    config: &'a RankerConfig,
}

impl<'a> KeywordRanker<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &'a RankerConfig) -> Self {
        Self { lexicon, config }
    }

    /// Rank `counts` under `options`.
    ///
    /// The result is sorted by count descending, holds at most
    /// `options.top_n` entries, and never lists a unigram that is part of a
    /// listed bigram.
    pub fn rank(&self, counts: &NgramCounts, options: &ExtractionOptions) -> Vec<KeywordEntry> {
        let validator = PhraseValidator::new(self.lexicon, self.config);

        let mut pool = self.seed_pool(counts, &validator);
        self.apply_sector_terms(&mut pool, options);
        apply_include_words(&mut pool, &options.include_words);

        pool.retain(|entry| validator.passes_cleanup(&entry.word));

        // stable: equal counts keep pool order
        pool.sort_by(|a, b| b.count.cmp(&a.count));
        pool.truncate(options.top_n);
        pool
    }

    /// Steps 1 and 2: accepted bigrams, then uncovered unigrams.
    fn seed_pool(&self, counts: &NgramCounts, validator: &PhraseValidator<'_>) -> Vec<KeywordEntry> {
        let mut pool = Vec::new();
        let mut covered: FxHashSet<&str> = FxHashSet::default();

        for (bigram, count) in counts.bigrams.iter() {
            if count >= self.config.min_bigram_count && validator.is_valid_phrase(bigram) {
                covered.extend(bigram.split(' '));
                pool.push(KeywordEntry::new(bigram, count));
            }
        }

        for (word, count) in counts.unigrams.iter() {
            if !covered.contains(word) {
                pool.push(KeywordEntry::new(word, count));
            }
        }

        pool
    }

    fn apply_sector_terms(&self, pool: &mut Vec<KeywordEntry>, options: &ExtractionOptions) {
        // the field is public, so terms may arrive unnormalized
        let terms: Vec<String> = match options.sector_terms.as_deref() {
            Some(terms) => terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            None => return,
        };
        if terms.is_empty() {
            return;
        }

        if options.strict_sector_terms {
            pool.retain(|entry| matches_any_term(&entry.word, &terms));
        } else {
            for entry in pool.iter_mut() {
                if matches_any_term(&entry.word, &terms) {
                    entry.count = entry.count.saturating_mul(self.config.sector_boost);
                }
            }
        }
    }
}

/// Scale the count of every keyword containing an include word.
///
/// Only the first matching include word applies. Non-finite or
/// non-positive weights count as 1, weights are capped at
/// [`MAX_INCLUDE_WEIGHT`], and scaled counts never drop below 1.
fn apply_include_words(pool: &mut [KeywordEntry], include_words: &[IncludeWord]) {
    if include_words.is_empty() {
        return;
    }
    let lowered: Vec<(String, f64)> = include_words
        .iter()
        .map(|w| (w.word.trim().to_lowercase(), w.weight))
        .filter(|(w, _)| !w.is_empty())
        .collect();

    for entry in pool.iter_mut() {
        if let Some((_, weight)) = lowered.iter().find(|(w, _)| entry.word.contains(w.as_str())) {
            entry.count = weighted_count(entry.count, *weight);
        }
    }
}

fn weighted_count(count: usize, weight: f64) -> usize {
    let weight = if weight.is_finite() && weight > 0.0 {
        weight.min(MAX_INCLUDE_WEIGHT)
    } else {
        1.0
    };
    // `as` saturates at usize::MAX for huge products
    ((count as f64 * weight).round() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::counter::count_tokens;

    fn toks(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn rank_with(text: &str, options: &ExtractionOptions) -> Vec<KeywordEntry> {
        let lexicon = Lexicon::news();
        let config = RankerConfig::default();
        KeywordRanker::new(&lexicon, &config).rank(&count_tokens(&toks(text)), options)
    }

    #[test]
    fn test_bigram_absorbs_its_unigrams() {
        let out = rank_with(
            "lithium price surge lithium price drop lithium",
            &ExtractionOptions::default(),
        );

        assert_eq!(out[0], KeywordEntry::new("lithium price", 2));
        assert!(out.iter().all(|e| e.word != "lithium" && e.word != "price"));
        assert!(out.iter().any(|e| e.word == "surge"));
    }

    #[test]
    fn test_infrequent_bigrams_are_not_phrases() {
        let out = rank_with("cathode supply anode", &ExtractionOptions::default());
        assert!(out.iter().all(|e| !e.is_phrase()));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_frequent_bigram_without_domain_term_is_split() {
        let out = rank_with("football match football match", &ExtractionOptions::default());
        assert_eq!(
            out,
            vec![KeywordEntry::new("football", 2), KeywordEntry::new("match", 2)]
        );
    }

    #[test]
    fn test_sector_boost_reorders() {
        let options = ExtractionOptions::default().with_sector_terms(["cathode"]);
        let out = rank_with("tariff tariff tariff cathode cathode", &options);

        assert_eq!(out[0], KeywordEntry::new("cathode", 4));
        assert_eq!(out[1], KeywordEntry::new("tariff", 3));
    }

    #[test]
    fn test_strict_sector_filters() {
        let options = ExtractionOptions::default()
            .with_sector_terms(["cathode"])
            .with_strict_sector_terms(true);
        let out = rank_with("tariff tariff tariff cathode", &options);

        assert_eq!(out, vec![KeywordEntry::new("cathode", 1)]);
    }

    #[test]
    fn test_include_weight_applies_after_boost() {
        let options = ExtractionOptions::default()
            .with_sector_terms(["lithium"])
            .with_include_words(vec![IncludeWord::new("Lithium", 1.5)]);
        let out = rank_with("lithium lithium tariff", &options);

        // 2 * 2 (boost) * 1.5
        assert_eq!(out[0], KeywordEntry::new("lithium", 6));
    }

    #[test]
    fn test_bad_weights_are_neutral() {
        assert_eq!(weighted_count(3, f64::NAN), 3);
        assert_eq!(weighted_count(3, -2.0), 3);
        assert_eq!(weighted_count(3, 0.1), 1);
        assert_eq!(weighted_count(2, 2.5), 5);
    }

    #[test]
    fn test_huge_weights_are_capped() {
        assert_eq!(weighted_count(2, 1e300), 2_000);
        assert_eq!(weighted_count(2, f64::INFINITY), 2);
    }

    #[test]
    fn test_huge_sector_boost_saturates() {
        let lexicon = Lexicon::news();
        let config = RankerConfig::default().with_sector_boost(usize::MAX);
        let options = ExtractionOptions::default().with_sector_terms(["lithium"]);
        let out = KeywordRanker::new(&lexicon, &config)
            .rank(&count_tokens(&toks("lithium lithium tariff")), &options);

        assert_eq!(out[0], KeywordEntry::new("lithium", usize::MAX));
        assert!(out.iter().all(|e| e.count >= 1));
    }

    #[test]
    fn test_raw_sector_terms_are_normalized() {
        let options = ExtractionOptions {
            sector_terms: Some(vec![" Lithium ".to_string(), String::new()]),
            strict_sector_terms: true,
            ..ExtractionOptions::default()
        };
        let out = rank_with("lithium tariff tariff", &options);
        assert_eq!(out, vec![KeywordEntry::new("lithium", 1)]);
    }

    #[test]
    fn test_top_n_truncates() {
        let options = ExtractionOptions::default().with_top_n(2);
        let out = rank_with("cathode anode graphite nickel cobalt", &options);
        assert_eq!(out.len(), 2);
        // equal counts keep first-seen order
        assert_eq!(out[0].word, "cathode");
        assert_eq!(out[1].word, "anode");
    }

    #[test]
    fn test_cleanup_drops_short_words() {
        let out = rank_with("ban ban ban oil", &ExtractionOptions::default());
        assert_eq!(out, vec![KeywordEntry::new("oil", 1)]);
    }

    #[test]
    fn test_empty_counts() {
        assert!(rank_with("", &ExtractionOptions::default()).is_empty());
    }
}
