//! Validation engine for extraction option documents.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`ExtractionSpec`](super::spec::ExtractionSpec) and collects every
//! diagnostic into a [`ValidationReport`]. It never short-circuits on the
//! first error, so users see all problems at once.
//!
//! Most findings are warnings: the dashboard should keep rendering with
//! coerced options. Only values that make extraction meaningless are errors.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use keyword_trends::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::OptionsError;
use super::spec::{ExtractionSpec, IncludeWordSpec};
use crate::lexicon::sectors::SectorTable;
use crate::rank::{MAX_INCLUDE_WEIGHT, MAX_SECTOR_BOOST};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to an [`OptionsError`] that carries
/// the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: OptionsError,
}

impl ValidationDiagnostic {
    pub fn error(err: OptionsError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: OptionsError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &OptionsError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &OptionsError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`ExtractionSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"top_n_positive"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`ExtractionSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Default rule set, checking sector names against the built-in table.
    pub fn with_defaults() -> Self {
        Self::with_sectors(SectorTable::default())
    }

    /// Default rule set, checking sector names against `sectors`.
    pub fn with_sectors(sectors: SectorTable) -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(TopNRule));
        engine.add_rule(Box::new(RankerLimitsRule));
        engine.add_rule(Box::new(IncludeWeightsRule));
        engine.add_rule(Box::new(KnownSectorRule { sectors }));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &ExtractionSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. topN must be positive ───────────────────────────────────────────────

struct TopNRule;

impl ValidationRule for TopNRule {
    fn name(&self) -> &str {
        "top_n_positive"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        if spec.top_n == 0 {
            vec![ValidationDiagnostic::error(
                OptionsError::new(ErrorCode::InvalidValue, "/topN", "topN must be greater than 0")
                    .with_hint("Omit topN to use the default of 30"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 2. Ranker heuristics must be usable ────────────────────────────────────

struct RankerLimitsRule;

impl ValidationRule for RankerLimitsRule {
    fn name(&self) -> &str {
        "ranker_limits"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if spec.ranker.min_bigram_count == 0 {
            out.push(ValidationDiagnostic::error(
                OptionsError::new(
                    ErrorCode::InvalidValue,
                    "/ranker/minBigramCount",
                    "minBigramCount must be greater than 0",
                )
                .with_hint("Use 1 to accept every valid bigram"),
            ));
        }

        if spec.ranker.sector_boost == 0 {
            out.push(ValidationDiagnostic::error(
                OptionsError::new(
                    ErrorCode::InvalidValue,
                    "/ranker/sectorBoost",
                    "sectorBoost must be greater than 0",
                )
                .with_hint("Use 1 to disable boosting, or strictSectorTerms to filter"),
            ));
        } else if spec.ranker.sector_boost > MAX_SECTOR_BOOST {
            out.push(ValidationDiagnostic::error(
                OptionsError::new(
                    ErrorCode::InvalidValue,
                    "/ranker/sectorBoost",
                    format!("sectorBoost must be at most {MAX_SECTOR_BOOST}"),
                )
                .with_hint("Use strictSectorTerms to keep only sector keywords"),
            ));
        }

        out
    }
}

// ─── 3. Include entries and weights (coerced, so warnings) ──────────────────

struct IncludeWeightsRule;

impl ValidationRule for IncludeWeightsRule {
    fn name(&self) -> &str {
        "include_weights"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        spec.include_words
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let path = format!("/includeWords/{idx}");
                let err = match entry {
                    IncludeWordSpec::Malformed(_) => OptionsError::new(
                        ErrorCode::MalformedEntry,
                        path,
                        "include entry is neither a string nor {word, weight}",
                    )
                    .with_hint("Entries without a word are skipped; others use weight 1"),
                    _ if !entry.has_valid_weight() => OptionsError::new(
                        ErrorCode::InvalidValue,
                        format!("{path}/weight"),
                        "weight must be a positive, finite number",
                    )
                    .with_hint("The weight is treated as 1"),
                    IncludeWordSpec::Weighted {
                        weight: Some(w), ..
                    } if *w > MAX_INCLUDE_WEIGHT => OptionsError::new(
                        ErrorCode::InvalidValue,
                        format!("{path}/weight"),
                        format!("weight must be at most {MAX_INCLUDE_WEIGHT}"),
                    )
                    .with_hint(format!("The weight is capped at {MAX_INCLUDE_WEIGHT}")),
                    _ => return None,
                };
                Some(ValidationDiagnostic::warning(err))
            })
            .collect()
    }
}

// ─── 4. Sector name must resolve ────────────────────────────────────────────

struct KnownSectorRule {
    sectors: SectorTable,
}

impl ValidationRule for KnownSectorRule {
    fn name(&self) -> &str {
        "known_sector"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        match spec.sector_name.as_deref() {
            Some(name) if !self.sectors.contains(name) => {
                let known: Vec<&str> = self.sectors.names().collect();
                vec![ValidationDiagnostic::warning(
                    OptionsError::new(
                        ErrorCode::UnknownSector,
                        "/sectorName",
                        format!("unknown sector \"{name}\"; sector terms are not applied"),
                    )
                    .with_hint(format!("Known sectors: {}", known.join(", "))),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &ExtractionSpec) -> Vec<ValidationDiagnostic> {
        let diag_fn = if spec.strict {
            ValidationDiagnostic::error
        } else {
            ValidationDiagnostic::warning
        };

        let mut keys: Vec<&String> = spec.unknown_fields.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                diag_fn(
                    OptionsError::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
