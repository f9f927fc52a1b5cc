//! Token validation with constant-time checksum comparison.

use subtle::ConstantTimeEq;

use crate::checksum::checksum;
use crate::config::ApiKeyConfig;
use crate::error::{ApiKeyError, Result};
use crate::parse::parse;
use crate::token::ApiKey;

/// Validate a token string.
///
/// This function:
/// 1. Parses the token into prefix, entropy and checksum
/// 2. Recomputes the checksum over the entropy
/// 3. Compares it against the embedded checksum
///
/// # Returns
/// * `Ok(true)` if the token is well formed and its checksum matches
/// * `Err` carrying the specific failure otherwise; never `Ok(false)`
pub(crate) fn validate(raw: &str, config: &ApiKeyConfig) -> Result<bool> {
    let parsed = parse(raw, config)?;
    validate_parsed(&parsed)
}

/// Validate the checksum of a pre-parsed key.
pub fn validate_parsed(key: &ApiKey) -> Result<bool> {
    let expected = checksum(key.entropy());
    if !checksums_equal(&expected, key.checksum()) {
        log::trace!("checksum mismatch for key with prefix '{}'", key.prefix());
        return Err(ApiKeyError::InvalidChecksum);
    }
    Ok(true)
}

/// Constant-time comparison of two checksums.
fn checksums_equal(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::generate_with;
    use rand::rngs::OsRng;

    fn config() -> ApiKeyConfig {
        ApiKeyConfig::new("short").with_entropy_length(50)
    }

    #[test]
    fn test_validate_valid_token() {
        let config = config();
        let token = generate_with(&mut OsRng, &config).unwrap();
        assert!(validate(&token, &config).unwrap());
    }

    #[test]
    fn test_validate_tampered_checksum() {
        let config = config();
        let mut token = generate_with(&mut OsRng, &config).unwrap();

        let last = token.pop().unwrap();
        token.push(if last == '0' { '1' } else { '0' });

        let result = validate(&token, &config);
        assert!(matches!(result, Err(ApiKeyError::InvalidChecksum)));
    }

    #[test]
    fn test_validate_propagates_parse_errors() {
        let config = config();
        assert!(matches!(
            validate("short_145ih1iuaklhjfajkhfaijf", &config),
            Err(ApiKeyError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_validate_parsed() {
        let entropy = "CBhsccspaX";
        let good = ApiKey::new("short", entropy, checksum(entropy));
        assert!(validate_parsed(&good).unwrap());

        let bad = ApiKey::new("short", entropy, "00000000");
        assert!(matches!(
            validate_parsed(&bad),
            Err(ApiKeyError::InvalidChecksum)
        ));
    }

    #[test]
    fn test_validate_parsed_short_checksum() {
        let entropy = "CBhsccspaX";
        let sum = checksum(entropy);
        let truncated = ApiKey::new("short", entropy, &sum[..7]);
        assert!(matches!(
            validate_parsed(&truncated),
            Err(ApiKeyError::InvalidChecksum)
        ));
    }

    #[test]
    fn test_checksums_equal() {
        assert!(checksums_equal("e3069283", "e3069283"));
        assert!(!checksums_equal("e3069283", "e3069284"));
        assert!(!checksums_equal("e3069283", "e306928"));
    }
}
