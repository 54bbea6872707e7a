// src/input.rs
//! Caller-supplied message input and the validators shared by the
//! buffer and hash-wrapping helpers.

use std::borrow::Cow;

use tracing::trace;

use crate::error::{BytesError, Result};

/// A message as handed to this crate: raw bytes or text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl Input<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Bytes(_) => "bytes",
            Input::Text(_) => "string",
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

/// UTF-8 encoding of `text`
pub fn utf8_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Byte form of any input; text is UTF-8 encoded, bytes are borrowed as-is
pub fn to_bytes<'a>(input: impl Into<Input<'a>>) -> Cow<'a, [u8]> {
    match input.into() {
        Input::Bytes(bytes) => Cow::Borrowed(bytes),
        Input::Text(text) => Cow::Owned(utf8_to_bytes(text)),
    }
}

/// Require raw bytes, optionally of one of the given lengths
///
/// An empty `lengths` set accepts any length.
pub fn ensure_bytes<'a>(input: &Input<'a>, lengths: &[usize]) -> Result<&'a [u8]> {
    let bytes = match *input {
        Input::Bytes(bytes) => bytes,
        Input::Text(_) => {
            return Err(BytesError::TypeValidation(format!(
                "expected bytes, got {}",
                input.kind()
            )))
        }
    };

    if !lengths.is_empty() && !lengths.contains(&bytes.len()) {
        return Err(BytesError::InvalidLength {
            expected: lengths.to_vec(),
            actual: bytes.len(),
        });
    }

    trace!(len = bytes.len(), "input validated as bytes");
    Ok(bytes)
}
