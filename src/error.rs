// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BytesError {
    #[error("byte sequence expected: {0}")]
    TypeValidation(String),

    #[error("byte sequence of length {actual} not accepted, expected one of {expected:?}")]
    InvalidLength { expected: Vec<usize>, actual: usize },

    #[error("hex string has odd length {0}")]
    OddHexLength(usize),

    #[error("invalid hex byte {pair:?} at index {index}")]
    InvalidHexPair { index: usize, pair: String },

    #[error("{width}-byte access at offset {offset} is outside a {len}-byte view")]
    ViewOutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("non little-endian hardware is not supported")]
    BigEndianHost,

    #[error("no secure random source available: {0}")]
    NoSecureRandom(String),

    #[error("random source {source_name} failed: {reason}")]
    RandomSource {
        source_name: &'static str,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl BytesError {
    /// Malformed hex input
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            BytesError::OddHexLength(_) | BytesError::InvalidHexPair { .. }
        )
    }

    /// Host cannot run this crate at all
    pub fn is_platform_unsupported(&self) -> bool {
        matches!(
            self,
            BytesError::BigEndianHost | BytesError::NoSecureRandom(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BytesError>;
