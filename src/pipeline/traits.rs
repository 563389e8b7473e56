//! Stage trait definitions for the pipeline.
//!
//! Normalization, tokenization, counting and ranking are fixed stages. The
//! one open seam is the [`Preprocessor`], which runs on the filtered token
//! stream right before counting.

use crate::pipeline::artifacts::TokenStream;
use crate::types::ExtractionOptions;

// ============================================================================
// Preprocessor: optional token stream hook
// ============================================================================

/// Optional preprocessing stage over filtered tokens.
///
/// Lets deployments apply domain rewrites (synonym folding, extra
/// suppression lists) without forking the tokenizer.
///
/// # Contract
///
/// - **Input**: a mutable [`TokenStream`] (modify in place).
/// - **Output**: none; the stream is mutated. Exclude words are applied
///   again afterwards, so a rewrite cannot reintroduce an excluded word.
/// - **Idempotent**: calling `preprocess` twice should produce the same
///   result as calling it once.
pub trait Preprocessor {
    /// Preprocess the token stream in place.
    fn preprocess(&self, tokens: &mut TokenStream, options: &ExtractionOptions);
}

/// No-op preprocessor, the default for most pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess(&self, _tokens: &mut TokenStream, _options: &ExtractionOptions) {}
}

/// Folds synonyms onto a canonical token, e.g. "lfp" → "lithium".
#[derive(Debug, Clone, Default)]
pub struct SynonymPreprocessor {
    pairs: Vec<(String, String)>,
}

impl SynonymPreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `from` onto `to`
    pub fn with_synonym(mut self, from: &str, to: &str) -> Self {
        self.pairs.push((from.to_lowercase(), to.to_lowercase()));
        self
    }
}

impl Preprocessor for SynonymPreprocessor {
    fn preprocess(&self, tokens: &mut TokenStream, _options: &ExtractionOptions) {
        tokens.map_tokens(|token| {
            if let Some((_, to)) = self.pairs.iter().find(|(from, _)| from == token) {
                token.clone_from(to);
            }
        });
    }
}
