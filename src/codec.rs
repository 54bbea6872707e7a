// src/codec.rs
//! Hex codec: byte sequences to lowercase hex strings and back
//!
//! Output is always lowercase, two digits per byte, `len == 2 * bytes`.
//! Input may carry a `0x` prefix and use either digit case.

use hex::FromHexError;
use tracing::trace;

use crate::consts::HEX_PREFIX;
use crate::error::{BytesError, Result};

/// Lowercase hex encoding of `bytes`
///
/// ```
/// assert_eq!(hash_bytes::bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, with or without a leading `0x`
///
/// ```
/// assert_eq!(hash_bytes::hex_to_bytes("0xdeadbeef").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(hex);

    if digits.len() % 2 != 0 {
        return Err(BytesError::OddHexLength(digits.len()));
    }

    let bytes = hex::decode(digits).map_err(|err| hex_error(digits, err))?;
    trace!(len = bytes.len(), "decoded hex");
    Ok(bytes)
}

/// `hex` without its `0x` prefix, if it had one
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix(HEX_PREFIX).unwrap_or(hex)
}

fn hex_error(digits: &str, err: FromHexError) -> BytesError {
    match err {
        FromHexError::InvalidHexCharacter { index, .. } => {
            let start = index - index % 2;
            let raw = &digits.as_bytes()[start..(start + 2).min(digits.len())];
            BytesError::InvalidHexPair {
                index: start / 2,
                pair: String::from_utf8_lossy(raw).into_owned(),
            }
        }
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            BytesError::OddHexLength(digits.len())
        }
    }
}
