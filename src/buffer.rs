// src/buffer.rs
//! Buffer operations: concatenation, equality, and input hardening for
//! externally supplied digest functions.

use std::borrow::Cow;

use crate::error::Result;
use crate::input::{ensure_bytes, Input};

/// Concatenate `buffers` in order
///
/// A single buffer comes back borrowed, not copied.
pub fn concat_bytes<'a>(buffers: &[&'a [u8]]) -> Cow<'a, [u8]> {
    if let [only] = buffers {
        return Cow::Borrowed(*only);
    }

    let total: usize = buffers.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for buf in buffers {
        out.extend_from_slice(buf);
    }
    Cow::Owned(out)
}

/// [`concat_bytes`] over unchecked inputs; any text input is rejected
pub fn try_concat_bytes<'a>(inputs: &[Input<'a>]) -> Result<Cow<'a, [u8]>> {
    let buffers = inputs
        .iter()
        .map(|input| ensure_bytes(input, &[]))
        .collect::<Result<Vec<_>>>()?;
    Ok(concat_bytes(&buffers))
}

/// Byte-wise equality; short-circuits, so not for secret comparison
pub fn equals_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Digest function guarded by input validation
///
/// Built by [`wrap_hash`]. The inner function only ever sees raw bytes.
#[derive(Debug, Clone)]
pub struct WrappedHash<F> {
    hash_fn: F,
    lengths: Vec<usize>,
}

/// Wrap a digest callable so that every call validates its message first
pub fn wrap_hash<F, O>(hash_fn: F) -> WrappedHash<F>
where
    F: Fn(&[u8]) -> O,
{
    WrappedHash {
        hash_fn,
        lengths: Vec::new(),
    }
}

impl<F> WrappedHash<F> {
    /// Only accept messages of one of these lengths
    pub fn with_lengths(mut self, lengths: &[usize]) -> Self {
        self.lengths = lengths.to_vec();
        self
    }

    pub fn call<'a, O>(&self, msg: impl Into<Input<'a>>) -> Result<O>
    where
        F: Fn(&[u8]) -> O,
    {
        let bytes = ensure_bytes(&msg.into(), &self.lengths)?;
        Ok((self.hash_fn)(bytes))
    }

    pub fn into_inner(self) -> F {
        self.hash_fn
    }
}
