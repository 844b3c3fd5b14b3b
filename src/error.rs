use std::io;

use thiserror::Error;

use crate::dialect_config::Dialect;

/// Errors raised by the dialect conversion engine and its dictionaries.
#[derive(Debug, Error)]
pub enum DialectError {
    /// A dialect identifier outside the closed set of supported dialects.
    #[error("Unsupported dialect: {value}. Supported: {}", .supported.join(", "))]
    UnsupportedDialect {
        value: String,
        supported: Vec<&'static str>,
    },

    /// Both dialects are valid but no mapping table exists for the pair.
    #[error("Conversion from {from} to {to} is not supported yet")]
    ConversionUnavailable { from: Dialect, to: Dialect },

    /// An empty source word would match at every word boundary.
    #[error("Mapping source word must not be empty")]
    EmptySourceWord,

    #[error("Invalid mapping pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Dictionary I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DialectError>;
