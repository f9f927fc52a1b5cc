//! CRC-32/Castagnoli integrity checksum.
//!
//! Detects accidental corruption such as typos or truncated copies. It is
//! not keyed and offers no protection against deliberate forgery.

use data_encoding::HEXLOWER;

/// Width of a rendered checksum: 32 bits as lowercase hex.
pub const CHECKSUM_LEN: usize = 8;

/// Checksum of a string's UTF-8 bytes, as 8 zero-padded lowercase hex digits.
pub fn checksum(input: &str) -> String {
    checksum_bytes(input.as_bytes())
}

/// Checksum of raw bytes, as 8 zero-padded lowercase hex digits.
pub fn checksum_bytes(input: &[u8]) -> String {
    let crc = crc32c::crc32c(input);
    HEXLOWER.encode(&crc.to_be_bytes())
}
