//! Natural Language Processing components
//!
//! This module provides text normalization, tokenization and stopword
//! filtering.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
