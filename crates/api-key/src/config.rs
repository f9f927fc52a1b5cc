//! Configuration for API key generation and validation.

use serde::Deserialize;

use crate::checksum::CHECKSUM_LEN;
use crate::error::{ApiKeyError, Result};
use crate::token::SEPARATOR;

/// Entropy characters per key when none are configured.
pub const DEFAULT_ENTROPY_LENGTH: usize = 32;

/// Configuration for API key generation and validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiKeyConfig {
    /// Prefix for token strings (e.g., "short" produces "short_...").
    pub prefix: String,
    /// Number of random base-62 characters per key.
    pub entropy_length: usize,
    /// Number of checksum characters per key. Must equal [`CHECKSUM_LEN`].
    pub checksum_length: usize,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            prefix: "key".to_string(),
            entropy_length: DEFAULT_ENTROPY_LENGTH,
            checksum_length: CHECKSUM_LEN,
        }
    }
}

impl ApiKeyConfig {
    /// Create a new config with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Set the number of entropy characters.
    pub fn with_entropy_length(mut self, entropy_length: usize) -> Self {
        self.entropy_length = entropy_length;
        self
    }

    /// Set the number of checksum characters.
    pub fn with_checksum_length(mut self, checksum_length: usize) -> Self {
        self.checksum_length = checksum_length;
        self
    }

    /// Total length of a well-formed key in bytes.
    pub fn key_length(&self) -> usize {
        self.prefix.len() + SEPARATOR.len_utf8() + self.entropy_length + self.checksum_length
    }

    /// Check the invariants every handler relies on.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(ApiKeyError::InvalidConfig("prefix must not be empty".into()));
        }
        if self.prefix.contains(SEPARATOR) {
            return Err(ApiKeyError::InvalidConfig(format!(
                "prefix must not contain '{SEPARATOR}'"
            )));
        }
        if !self.prefix.is_ascii() {
            return Err(ApiKeyError::InvalidConfig("prefix must be ASCII".into()));
        }
        if self.entropy_length == 0 {
            return Err(ApiKeyError::InvalidConfig(
                "entropy_length must be positive".into(),
            ));
        }
        // key_length() must not overflow
        if self
            .prefix
            .len()
            .checked_add(1 + CHECKSUM_LEN)
            .and_then(|n| n.checked_add(self.entropy_length))
            .is_none()
        {
            return Err(ApiKeyError::InvalidConfig("entropy_length too large".into()));
        }
        if self.checksum_length != CHECKSUM_LEN {
            return Err(ApiKeyError::ChecksumLengthMismatch {
                expected: CHECKSUM_LEN,
                got: self.checksum_length,
            });
        }
        Ok(())
    }
}
