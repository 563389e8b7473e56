//! Extraction options as a JSON document.
//!
//! An [`ExtractionSpec`] is what callers persist or send over the wire. It
//! is checked by [`super::validation::ValidationEngine`] and then resolved
//! against a [`SectorTable`] into the [`ExtractionOptions`] the ranker uses.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "topN": 20,
//!   "sectorName": "Battery",
//!   "strictSectorTerms": false,
//!   "includeWords": ["recall", { "word": "lithium", "weight": 3 }],
//!   "excludeWords": ["tesla"],
//!   "ranker": { "minBigramCount": 2 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::SpecError;
use super::validation::{ValidationEngine, ValidationReport};
use crate::lexicon::sectors::SectorTable;
use crate::types::{ExtractionOptions, IncludeWord, RankerConfig};

fn default_top_n() -> usize {
    30
}

/// An `includeWords` entry as it appears in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncludeWordSpec {
    Plain(String),
    Weighted {
        word: String,
        #[serde(default)]
        weight: Option<f64>,
    },
    /// Anything else; coerced to weight 1 when a word can be recovered.
    Malformed(serde_json::Value),
}

impl IncludeWordSpec {
    /// Whether the weight is usable as given
    pub fn has_valid_weight(&self) -> bool {
        match self {
            Self::Plain(_) => true,
            Self::Weighted { weight, .. } => weight.map_or(true, |w| w.is_finite() && w > 0.0),
            Self::Malformed(_) => false,
        }
    }

    /// Coerce to an [`IncludeWord`]; `None` when no word can be recovered.
    pub fn to_include_word(&self) -> Option<IncludeWord> {
        let (word, weight) = match self {
            Self::Plain(word) => (word.as_str(), 1.0),
            Self::Weighted { word, weight } => {
                let weight = weight.filter(|w| w.is_finite() && *w > 0.0).unwrap_or(1.0);
                (word.as_str(), weight)
            }
            Self::Malformed(value) => (value.get("word")?.as_str()?, 1.0),
        };
        let word = word.trim();
        (!word.is_empty()).then(|| IncludeWord::new(word.to_lowercase(), weight))
    }
}

/// Top-level extraction options document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionSpec {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Sector display name, resolved through a [`SectorTable`]
    #[serde(default)]
    pub sector_name: Option<String>,

    #[serde(default)]
    pub strict_sector_terms: bool,

    #[serde(default)]
    pub include_words: Vec<IncludeWordSpec>,

    #[serde(default)]
    pub exclude_words: Vec<String>,

    /// Ranker heuristics; omitted fields keep their defaults
    #[serde(default)]
    pub ranker: RankerConfig,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for ExtractionSpec {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            sector_name: None,
            strict_sector_terms: false,
            include_words: Vec::new(),
            exclude_words: Vec::new(),
            ranker: RankerConfig::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl ExtractionSpec {
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the sector name and coerce include entries.
    ///
    /// An unknown sector resolves to no sector terms.
    pub fn resolve(&self, sectors: &SectorTable) -> ExtractionOptions {
        let sector_terms = self
            .sector_name
            .as_deref()
            .and_then(|name| sectors.terms(name))
            .map(<[String]>::to_vec);

        ExtractionOptions {
            top_n: self.top_n,
            sector_terms,
            strict_sector_terms: self.strict_sector_terms,
            include_words: self
                .include_words
                .iter()
                .filter_map(IncludeWordSpec::to_include_word)
                .collect(),
            exclude_words: self
                .exclude_words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// Options ready for the pipeline, plus any warnings raised on the way.
#[derive(Debug, Clone)]
pub struct LoadedOptions {
    pub options: ExtractionOptions,
    pub ranker: RankerConfig,
    pub report: ValidationReport,
}

/// Parse, validate and resolve an options document.
///
/// Warnings are returned alongside the options; any error-severity
/// diagnostic fails the load.
pub fn load_options(json: &str, sectors: &SectorTable) -> Result<LoadedOptions, SpecError> {
    let spec = ExtractionSpec::from_json(json)?;
    let report = ValidationEngine::with_sectors(sectors.clone()).validate(&spec);
    if report.has_errors() {
        return Err(SpecError::Invalid(report));
    }

    #[cfg(feature = "tracing")]
    for warning in report.warnings() {
        tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
    }

    Ok(LoadedOptions {
        options: spec.resolve(sectors),
        ranker: spec.ranker,
        report,
    })
}
