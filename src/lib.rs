//! # keyword-trends
//!
//! Keyword extraction and trend scoring for news feed articles.
//!
//! The extraction pipeline normalizes article text, filters tokens against a
//! news lexicon, counts unigrams and bigrams, and ranks the result with
//! optional sector boosting and include-word weighting. A separate trend
//! classifier compares two article windows and reports emerging, rising and
//! declining keywords.
//!
//! ## Quick start
//!
//! ```rust
//! use keyword_trends::{extract_keywords_from_articles, ArticleRecord, ExtractionOptions};
//!
//! let articles = vec![
//!     ArticleRecord::new("Lithium prices rise", "Lithium supply is tight"),
//!     ArticleRecord::titled("Battery plant opens"),
//! ];
//! let keywords = extract_keywords_from_articles(&articles, &ExtractionOptions::default());
//! assert_eq!(keywords[0].word, "lithium");
//! ```
//!
//! ## Options as JSON
//!
//! ```rust
//! use keyword_trends::lexicon::sectors::SectorTable;
//! use keyword_trends::pipeline::spec::load_options;
//!
//! let loaded = load_options(r#"{ "topN": 10, "sectorName": "Battery" }"#, &SectorTable::default())
//!     .unwrap();
//! assert!(loaded.options.sector_terms.is_some());
//! ```

pub mod analytics;
pub mod lexicon;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod rank;
pub mod trend;
pub mod types;

pub use analytics::{bucket_treemap, sector_heatmap, SectorHeatmap, TreemapTile, TreemapTier};
pub use lexicon::sectors::SectorTable;
pub use lexicon::{Lexicon, LexiconError, LexiconOverrides, LEXICON_VERSION};
pub use nlp::normalizer::normalize;
pub use nlp::tokenizer::Tokenizer;
pub use phrase::counter::{count, NgramCounts};
pub use pipeline::artifacts::TokenStream;
pub use pipeline::errors::SpecError;
pub use pipeline::runner::{extract_keywords_from_articles, KeywordPipeline};
pub use pipeline::spec::{load_options, ExtractionSpec};
pub use rank::KeywordRanker;
pub use trend::{classify_trends, SourceFeed, TrendClassifier, TrendTokenization, WindowConfig};
pub use types::{
    ArticleRecord, ExtractionOptions, IncludeWord, KeywordEntry, RankerConfig, RisingEntry,
    TrendReport,
};
