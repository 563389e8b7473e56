//! Phrase components
//!
//! This module provides n-gram counting and the validity rules applied to
//! candidate keywords and phrases.

pub mod counter;
pub mod validator;
