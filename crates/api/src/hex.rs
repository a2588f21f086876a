//! Canonical `0x`-prefixed hexadecimal encoding
//!
//! Encoding always emits the `0x` prefix and lowercase digits, two per
//! byte. Decoding accepts an optional `0x`/`0X` prefix and uppercase
//! digits, canonicalizes odd-length input by left-padding a single `'0'`,
//! and is all-or-nothing: a failed decode yields no partial output.

use crate::error::{Error, Result};

/// Leading characters of a hex formatted string.
pub const HEX_PREFIX: &str = "0x";

/// Encodes `bytes` as a hex string with `0x` prefix.
///
/// Zero-length input yields `"0x"`.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 2);
    out.push_str(HEX_PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

/// Returns the bytes represented by the hexadecimal string `input`.
///
/// `input` may be prefixed with `0x`.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(input);

    // An odd number of digits is corrected by prefixing a single zero
    if digits.len() % 2 == 1 {
        let padded = format!("0{}", digits);
        return decode_digits(&padded);
    }

    decode_digits(digits)
}

fn decode_digits(digits: &str) -> Result<Vec<u8>> {
    hex::decode(digits).map_err(|_| Error::MalformedHex {
        context: "hex decode",
    })
}

/// Whether `input` starts with the `0x` (or `0X`) prefix.
pub fn has_hex_prefix(input: &str) -> bool {
    let b = input.as_bytes();
    b.len() >= 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X')
}

pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    if has_hex_prefix(input) {
        &input[2..]
    } else {
        input
    }
}

/// Validates that `input` is entirely hex digits of even count.
pub fn is_hex(input: &str) -> bool {
    input.len() % 2 == 0 && input.bytes().all(|c| c.is_ascii_hexdigit())
}
