//! Arbitrary-precision base-62 codec.
//!
//! Bytes are read as one big-endian unsigned integer and rendered in the
//! alphabet `A-Z a-z 0-9`, most significant digit first.
//!
//! The mapping is between byte strings and *numbers*, so leading zeros do
//! not survive a round trip in either direction:
//! - `decode(encode(b)) != b` when `b` starts with `0x00` bytes
//! - `encode(decode(s)) != s` when `s` starts with `'A'` (digit zero)
//!
//! Callers that need a fixed width must pad or truncate themselves.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::error::Base62Error;

/// Digit value -> character. Uppercase, then lowercase, then digits.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Numeral base.
pub const BASE: u32 = ALPHABET.len() as u32;

// Character -> digit value, indexed by byte.
static DECODE_TABLE: LazyLock<[Option<u8>; 256]> = LazyLock::new(|| {
    let mut table = [None; 256];
    for (value, &c) in ALPHABET.iter().enumerate() {
        table[c as usize] = Some(value as u8);
    }
    table
});

/// Digit value of `c`, or `None` if it is not part of the alphabet.
pub fn digit_value(c: char) -> Option<u8> {
    if c.is_ascii() {
        DECODE_TABLE[c as usize]
    } else {
        None
    }
}

/// Whether every character of `s` belongs to the alphabet.
pub fn is_base62(s: &str) -> bool {
    s.chars().all(|c| digit_value(c).is_some())
}

/// Encode bytes as a base-62 numeral.
///
/// An empty or all-zero input encodes to `"A"`, never to an empty string.
pub fn encode(input: &[u8]) -> String {
    let mut value = BigUint::from_bytes_be(input);
    if value.is_zero() {
        return (ALPHABET[0] as char).to_string();
    }

    let base = BigUint::from(BASE);
    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&base);
        // remainder < 62
        let digit = remainder.to_usize().unwrap_or_default();
        digits.push(ALPHABET[digit]);
        value = quotient;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decode a base-62 numeral into the minimal big-endian bytes of its value.
///
/// The value zero decodes to an empty vector.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base62Error> {
    if encoded.is_empty() {
        return Err(Base62Error::EmptyInput);
    }

    let mut value = BigUint::zero();
    for c in encoded.chars() {
        let digit = digit_value(c).ok_or(Base62Error::InvalidCharacter(c))?;
        value = value * BASE + u32::from(digit);
    }

    if value.is_zero() {
        return Ok(Vec::new());
    }
    Ok(value.to_bytes_be())
}
