//! Error types for the options boundary.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;
use super::validation::ValidationReport;

/// One problem found in an options document, located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{code}] {path}: {message}")]
pub struct OptionsError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl OptionsError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Failure to turn a JSON document into extraction options.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("options failed validation with {} error(s)", .0.errors().count())]
    Invalid(ValidationReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_path() {
        let err = OptionsError::new(ErrorCode::InvalidValue, "/topN", "topN must be greater than 0");
        assert_eq!(err.to_string(), "[invalid_value] /topN: topN must be greater than 0");
    }

    #[test]
    fn test_hint_serialization() {
        let plain = serde_json::to_value(OptionsError::new(ErrorCode::UnknownField, "/x", "m")).unwrap();
        assert!(plain.get("hint").is_none());

        let hinted = serde_json::to_value(
            OptionsError::new(ErrorCode::UnknownField, "/x", "m").with_hint("remove it"),
        )
        .unwrap();
        assert_eq!(hinted["hint"], "remove it");
        assert_eq!(hinted["code"], "unknown_field");
    }
}
