//! Error types for API key and base-62 operations.

use thiserror::Error;

/// Errors that can occur while building, parsing or validating API keys.
#[derive(Debug, Error)]
pub enum ApiKeyError {
    /// Token length doesn't match `prefix + 1 + entropy_length + checksum_length`
    #[error("Invalid API key length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Token doesn't start with the configured prefix
    #[error("Invalid API key prefix: expected '{expected}'")]
    InvalidPrefix { expected: String },

    /// Separator missing, duplicated or misplaced
    #[error("Invalid API key structure")]
    InvalidStructure,

    /// Recomputed checksum differs from the embedded one
    #[error("Invalid API key checksum")]
    InvalidChecksum,

    /// The OS random source failed; never replaced by a weaker source
    #[error("Secure random source unavailable")]
    RandomSourceUnavailable(#[source] rand::Error),

    /// Handler configuration rejected at construction time
    #[error("Invalid API key configuration: {0}")]
    InvalidConfig(String),

    /// Configured checksum length disagrees with the checksum function's width
    #[error("Checksum length mismatch: checksum renders {expected} characters, configured {got}")]
    ChecksumLengthMismatch { expected: usize, got: usize },
}

/// Errors from decoding base-62 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base62Error {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Invalid character in input: {0:?}")]
    InvalidCharacter(char),
}

/// Result type alias for API key operations.
pub type Result<T> = std::result::Result<T, ApiKeyError>;
