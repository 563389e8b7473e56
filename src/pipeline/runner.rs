//! Pipeline runner: stage execution and artifact flow.
//!
//! [`KeywordPipeline::run`] executes the stages in order, threading
//! artifacts between them and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Normalize each article's text
//! 2. Tokenize and filter (one segment per article)
//! 3. Preprocess the token stream (optional hook)
//! 4. Count unigrams and bigrams
//! 5. Rank keywords
//!
//! The pipeline owns no state between calls; identical input and options
//! always produce identical output.

use rayon::prelude::*;

use crate::lexicon::Lexicon;
use crate::nlp::normalizer::normalize;
use crate::nlp::tokenizer::Tokenizer;
use crate::phrase::counter::count;
use crate::pipeline::artifacts::TokenStream;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_COUNT, STAGE_NORMALIZE,
    STAGE_PREPROCESS, STAGE_RANK, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{NoopPreprocessor, Preprocessor};
use crate::rank::KeywordRanker;
use crate::types::{ArticleRecord, ExtractionOptions, KeywordEntry, RankerConfig};

/// Article count at which normalization and tokenization fan out over rayon.
pub const PARALLEL_THRESHOLD: usize = 256;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Keyword extraction pipeline over article records.
#[derive(Debug, Clone)]
pub struct KeywordPipeline<Pre = NoopPreprocessor> {
    lexicon: Lexicon,
    ranker_config: RankerConfig,
    preprocessor: Pre,
}

impl Default for KeywordPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordPipeline {
    /// Pipeline with the news lexicon and default ranker heuristics
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::news(),
            ranker_config: RankerConfig::default(),
            preprocessor: NoopPreprocessor,
        }
    }
}

impl<Pre> KeywordPipeline<Pre> {
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_ranker_config(mut self, config: RankerConfig) -> Self {
        self.ranker_config = config;
        self
    }

    /// Replace the preprocessor stage.
    pub fn with_preprocessor<P: Preprocessor>(self, preprocessor: P) -> KeywordPipeline<P> {
        KeywordPipeline {
            lexicon: self.lexicon,
            ranker_config: self.ranker_config,
            preprocessor,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn ranker_config(&self) -> &RankerConfig {
        &self.ranker_config
    }

    /// Normalize and tokenize one piece of raw text.
    pub fn tokenize_text(&self, text: &str, exclude_words: &[String]) -> Vec<String> {
        Tokenizer::new(&self.lexicon)
            .with_exclude_words(exclude_words)
            .tokenize(&normalize(text))
    }
}

impl<Pre: Preprocessor> KeywordPipeline<Pre> {
    /// Extract ranked keywords without observation.
    pub fn extract(&self, articles: &[ArticleRecord], options: &ExtractionOptions) -> Vec<KeywordEntry> {
        self.run(articles, options, &mut NoopObserver)
    }

    /// Execute every stage, reporting to `observer`.
    pub fn run(
        &self,
        articles: &[ArticleRecord],
        options: &ExtractionOptions,
        observer: &mut impl PipelineObserver,
    ) -> Vec<KeywordEntry> {
        // Stage 1: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let normalized = normalize_articles(articles);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(articles.len())
            .items_out(normalized.len())
            .build();
        observer.on_stage_end(STAGE_NORMALIZE, &report);

        // Stage 2: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokenizer = Tokenizer::new(&self.lexicon).with_exclude_words(&options.exclude_words);
        let mut tokens = tokenize_all(&tokenizer, &normalized);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(normalized.len())
            .items_out(tokens.len())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            articles = articles.len(),
            tokens = tokens.len(),
            "tokenized articles"
        );

        // Stage 3: Preprocess
        trace_stage!(STAGE_PREPROCESS);
        observer.on_stage_start(STAGE_PREPROCESS);
        let clock = StageClock::start();
        let before = tokens.len();
        self.preprocessor.preprocess(&mut tokens, options);
        // a rewrite may land on an excluded word
        tokens.retain(|token| !tokenizer.is_excluded(token));
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(before)
            .items_out(tokens.len())
            .build();
        observer.on_stage_end(STAGE_PREPROCESS, &report);

        // Stage 4: Count
        trace_stage!(STAGE_COUNT);
        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let counts = count(&tokens);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(tokens.len())
            .items_out(counts.unigrams.len() + counts.bigrams.len())
            .build();
        observer.on_stage_end(STAGE_COUNT, &report);

        // Stage 5: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let keywords = KeywordRanker::new(&self.lexicon, &self.ranker_config).rank(&counts, options);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(counts.unigrams.len() + counts.bigrams.len())
            .items_out(keywords.len())
            .build();
        observer.on_stage_end(STAGE_RANK, &report);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            unigrams = counts.unigrams.len(),
            bigrams = counts.bigrams.len(),
            keywords = keywords.len(),
            "ranked keywords"
        );

        keywords
    }
}

fn normalize_articles(articles: &[ArticleRecord]) -> Vec<String> {
    if articles.len() < PARALLEL_THRESHOLD {
        return articles.iter().map(|a| normalize(&a.full_text())).collect();
    }
    articles.par_iter().map(|a| normalize(&a.full_text())).collect()
}

fn tokenize_all(tokenizer: &Tokenizer<'_>, normalized: &[String]) -> TokenStream {
    // collect() on an indexed parallel iterator keeps input order
    let segments: Vec<Vec<String>> = if normalized.len() < PARALLEL_THRESHOLD {
        normalized.iter().map(|text| tokenizer.tokenize(text)).collect()
    } else {
        normalized.par_iter().map(|text| tokenizer.tokenize(text)).collect()
    };
    TokenStream::from_segments(segments)
}

/// Extract keywords from `articles` with the default pipeline.
pub fn extract_keywords_from_articles(
    articles: &[ArticleRecord],
    options: &ExtractionOptions,
) -> Vec<KeywordEntry> {
    KeywordPipeline::new().extract(articles, options)
}
