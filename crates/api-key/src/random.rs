//! Secure random strings over the base-62 alphabet.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::base62::{ALPHABET, BASE};
use crate::error::{ApiKeyError, Result};

// Largest multiple of 62 that fits in a byte. Bytes at or above it are
// rejected so that `byte % 62` stays uniform.
const ACCEPT_BELOW: u8 = (256 / BASE * BASE) as u8;

/// Generate `length` characters drawn uniformly from the base-62 alphabet
/// using the operating system's secure random source.
pub fn generate_random(length: usize) -> Result<String> {
    generate_random_with(&mut OsRng, length)
}

/// Same as [`generate_random`] with a caller-supplied secure generator.
///
/// Failures of the generator surface as
/// [`ApiKeyError::RandomSourceUnavailable`].
pub fn generate_random_with<R>(rng: &mut R, length: usize) -> Result<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut result = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while result.len() < length {
        rng.try_fill_bytes(&mut buf)
            .map_err(ApiKeyError::RandomSourceUnavailable)?;

        for &byte in buf.iter().filter(|&&b| b < ACCEPT_BELOW) {
            if result.len() == length {
                break;
            }
            result.push(ALPHABET[(byte % BASE as u8) as usize] as char);
        }
    }

    buf.zeroize();
    Ok(result)
}
