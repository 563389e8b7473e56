//! Pipeline orchestration
//!
//! This module provides the stage runner, its observer hooks and artifacts,
//! and the JSON options document with its validation engine.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
