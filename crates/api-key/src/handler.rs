//! The key handler: one validated configuration, all key operations.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::config::ApiKeyConfig;
use crate::error::Result;
use crate::parse::parse;
use crate::token::{self, ApiKey, generate_with};
use crate::verify::validate;

/// Issue and check API keys.
pub trait KeyHandler {
    /// Generate a fresh key string.
    fn generate(&self) -> Result<String>;

    /// `Ok(true)` for a well-formed key with a matching checksum; otherwise
    /// the error saying why it was rejected.
    fn validate(&self, raw: &str) -> Result<bool>;

    /// Split a key string into its parts without checking the checksum.
    fn parse(&self, raw: &str) -> Result<ApiKey>;

    /// Render a key in wire form.
    fn format(&self, key: &ApiKey) -> String;
}

/// [`KeyHandler`] over a fixed, validated [`ApiKeyConfig`].
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct ApiKeyHandler {
    config: ApiKeyConfig,
}

impl ApiKeyHandler {
    /// Create a handler, rejecting configurations that could produce keys
    /// the handler itself would fail to parse.
    pub fn new(config: ApiKeyConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "api key handler ready: prefix '{}', {} entropy chars, {} byte keys",
            config.prefix,
            config.entropy_length,
            config.key_length()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ApiKeyConfig {
        &self.config
    }

    /// Generate a key using a caller-supplied secure generator.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<String>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        generate_with(rng, &self.config)
    }
}

impl KeyHandler for ApiKeyHandler {
    fn generate(&self) -> Result<String> {
        self.generate_with(&mut OsRng)
    }

    fn validate(&self, raw: &str) -> Result<bool> {
        validate(raw, &self.config)
    }

    fn parse(&self, raw: &str) -> Result<ApiKey> {
        parse(raw, &self.config)
    }

    fn format(&self, key: &ApiKey) -> String {
        token::format(key)
    }
}
