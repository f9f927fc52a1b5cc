//! Structured API key generation and validation.
//!
//! This crate provides functionality for:
//! - Generating keys from a fixed prefix and secure base-62 entropy
//! - Parsing keys to extract their components
//! - Validating keys against their embedded CRC-32C checksum
//! - Encoding arbitrary bytes as base-62 text
//!
//! # Token Format
//!
//! Tokens follow the format: `{prefix}_{entropy}{checksum}`
//!
//! Example: `short_Xq3...Lp0e3069283` where the last 8 characters are the
//! lowercase hex CRC-32C of the entropy.
//!
//! The checksum catches typos and truncated copies. It is not a MAC: anyone
//! can compute a valid checksum for any entropy.
//!
//! # Example
//!
//! ```rust
//! use api_key::{ApiKeyConfig, ApiKeyHandler, KeyHandler};
//!
//! let config = ApiKeyConfig::new("short").with_entropy_length(50);
//! let handler = ApiKeyHandler::new(config).unwrap();
//!
//! let key = handler.generate().unwrap();
//! assert_eq!(key.len(), 64);
//! assert!(handler.validate(&key).unwrap());
//!
//! let parsed = handler.parse(&key).unwrap();
//! assert_eq!(parsed.prefix(), "short");
//! assert_eq!(handler.format(&parsed), key);
//! ```

pub mod base62;
mod checksum;
mod config;
mod error;
mod handler;
mod parse;
mod random;
mod token;
mod verify;

// Public re-exports
pub use checksum::{CHECKSUM_LEN, checksum, checksum_bytes};
pub use config::{ApiKeyConfig, DEFAULT_ENTROPY_LENGTH};
pub use error::{ApiKeyError, Base62Error, Result};
pub use handler::{ApiKeyHandler, KeyHandler};
pub use random::{generate_random, generate_random_with};
pub use token::{ApiKey, SEPARATOR, format};
pub use verify::validate_parsed;
