//! Token parsing for API keys.

use crate::config::ApiKeyConfig;
use crate::error::{ApiKeyError, Result};
use crate::token::{ApiKey, SEPARATOR};

/// Parse a token string into its components.
///
/// # Arguments
/// * `raw` - The full token string (e.g., "short_...")
/// * `config` - A configuration that already passed [`ApiKeyConfig::validate`]
///
/// # Returns
/// * `ApiKey` with prefix, entropy and checksum split out
/// * `InvalidLength` if the byte length is not exactly `config.key_length()`
/// * `InvalidPrefix` if the token doesn't start with the configured prefix
/// * `InvalidStructure` if the separator is missing, repeated or misplaced
///
/// The checksum is not checked here.
pub(crate) fn parse(raw: &str, config: &ApiKeyConfig) -> Result<ApiKey> {
    let expected = config.key_length();
    if raw.len() != expected {
        return Err(ApiKeyError::InvalidLength {
            expected,
            got: raw.len(),
        });
    }

    if !raw.starts_with(&config.prefix) {
        return Err(ApiKeyError::InvalidPrefix {
            expected: config.prefix.clone(),
        });
    }

    // Split by separator: prefix_{entropy}{checksum}
    let parts: Vec<&str> = raw.split(SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(ApiKeyError::InvalidStructure);
    }

    let prefix = parts[0];
    let payload = parts[1];

    // "abc_..." starts with "ab" but puts the separator in the wrong place
    if prefix != config.prefix {
        return Err(ApiKeyError::InvalidStructure);
    }

    // Non-ASCII input may not split on a char boundary
    let (Some(entropy), Some(checksum)) = (
        payload.get(..config.entropy_length),
        payload.get(config.entropy_length..),
    ) else {
        return Err(ApiKeyError::InvalidStructure);
    };

    Ok(ApiKey::new(prefix, entropy, checksum))
}
