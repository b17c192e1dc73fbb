//! Error types for loading and dumping.

use thiserror::Error;

/// Result type alias for fidelity-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or dumping YAML.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed YAML text, surfaced unchanged from the document engine.
    #[error("{0}")]
    Syntax(#[from] yaml_rust2::ScanError),

    /// A mapping contains two equal keys and duplicate checking is enabled.
    ///
    /// The key is the first duplicate in document order; nested mappings are
    /// checked the same way as the top level.
    #[error("Duplicate key in YAML source: {key}")]
    DuplicateKey {
        /// Scalar text of the offending key.
        key: String,
    },

    /// Byte input to `load_bytes` that is not valid UTF-8.
    #[error("YAML source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A `Value::Bytes` dump input that does not decode as UTF-8.
    #[error("byte value is not valid UTF-8: {0}")]
    InvalidByteValue(#[from] std::string::FromUtf8Error),
}
