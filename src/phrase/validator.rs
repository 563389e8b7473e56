//! Keyword and phrase validity rules.

use crate::lexicon::Lexicon;
use crate::types::RankerConfig;

/// Decides whether a unigram or bigram may appear in ranked output.
#[derive(Debug, Clone, Copy)]
pub struct PhraseValidator<'a> {
    lexicon: &'a Lexicon,
    require_domain_term: bool,
    min_single_word_len: usize,
}

impl<'a> PhraseValidator<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &RankerConfig) -> Self {
        Self {
            lexicon,
            require_domain_term: config.require_domain_term,
            min_single_word_len: config.min_single_word_len,
        }
    }

    /// Whether `phrase` passes the firewall, layout and word rules.
    ///
    /// Multi-word phrases must contain at least one domain term (unless
    /// disabled) and may not repeat a single word ("battery battery").
    pub fn is_valid_phrase(&self, phrase: &str) -> bool {
        let firewall = self.lexicon.firewall();
        if firewall.matches(phrase) || firewall.is_layout_phrase(phrase) {
            return false;
        }

        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() || words.iter().any(|w| self.lexicon.rejects_token(w)) {
            return false;
        }

        if words.len() > 1 {
            if words.iter().all(|w| *w == words[0]) {
                return false;
            }
            if self.require_domain_term && !words.iter().any(|w| self.lexicon.is_domain_term(w)) {
                return false;
            }
        }

        true
    }

    /// Final cleanup check: a valid phrase, and single words must meet the
    /// minimum length unless they are domain terms.
    pub fn passes_cleanup(&self, keyword: &str) -> bool {
        if !self.is_valid_phrase(keyword) {
            return false;
        }
        keyword.contains(' ')
            || keyword.chars().count() >= self.min_single_word_len
            || self.lexicon.is_domain_term(keyword)
    }
}
