//! Error types shown to the user or returned by the config layer

use std::path::PathBuf;
use thiserror::Error;

/// Arithmetic failures. The `Display` text is what the entry field shows
/// while the engine is in the error state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result is undefined")]
    UndefinedResult,
    /// The result does not fit in an f64.
    #[error("Overflow")]
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a number: {0:?}")]
pub struct ParseNumberError(pub String);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
