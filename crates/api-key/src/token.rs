//! The API key value and key generation.

use std::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::checksum::checksum;
use crate::config::ApiKeyConfig;
use crate::error::Result;
use crate::random::generate_random_with;

/// Character between the prefix and the rest of the key.
pub const SEPARATOR: char = '_';

/// A key split into its parts.
///
/// The wire form is `{prefix}_{entropy}{checksum}`; entropy and checksum are
/// concatenated without a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    prefix: String,
    entropy: String,
    checksum: String,
}

impl ApiKey {
    /// Assemble a key from parts. Nothing is validated here.
    pub fn new(
        prefix: impl Into<String>,
        entropy: impl Into<String>,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            entropy: entropy.into(),
            checksum: checksum.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn entropy(&self) -> &str {
        &self.entropy
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{}", self.prefix, self.entropy, self.checksum)
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        // Clear entropy from memory when dropped
        self.entropy.zeroize();
    }
}

/// Render a key in wire form. Inconsistent field lengths are passed through.
pub fn format(key: &ApiKey) -> String {
    key.to_string()
}

/// Generate a new key string for `config` from the given random source.
///
/// Returns the full token: prefix, separator, entropy, then the checksum of
/// the entropy.
pub(crate) fn generate_with<R>(rng: &mut R, config: &ApiKeyConfig) -> Result<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let entropy = generate_random_with(rng, config.entropy_length)?;
    let checksum = checksum(&entropy);
    let key = ApiKey::new(config.prefix.as_str(), entropy, checksum);
    Ok(format(&key))
}
