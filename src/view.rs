// src/view.rs
//! Host byte order detection and zero-copy views over byte buffers
//!
//! Views borrow the buffer they were created from. A 32-bit view covers
//! `len / 4` whole words and drops any 1–3 trailing bytes.
//!
//! `u32_view` reads words in host byte order and does not check that order
//! itself; big-endian hosts are rejected once, when
//! [`Capabilities`](crate::Capabilities) is detected. [`ByteView`] takes an
//! explicit byte order per access and is correct on any host.

use std::iter::FusedIterator;

use crate::consts::{ENDIAN_PROBE_WORD, LITTLE_ENDIAN_FIRST_BYTE};
use crate::error::{BytesError, Result};

/// Host byte order as observed through the probe word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the running host
    pub fn host() -> Self {
        Self::from_probe(ENDIAN_PROBE_WORD.to_ne_bytes())
    }

    /// Classify the in-memory bytes of [`ENDIAN_PROBE_WORD`]
    pub fn from_probe(probe: [u8; 4]) -> Self {
        if probe[0] == LITTLE_ENDIAN_FIRST_BYTE {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Fails on anything but little-endian
    pub fn ensure_supported(self) -> Result<Self> {
        match self {
            Endianness::Little => Ok(self),
            Endianness::Big => Err(BytesError::BigEndianHost),
        }
    }
}

/// 8-bit view of the same byte range, no copy
#[inline]
pub fn u8_view(buf: &[u8]) -> &[u8] {
    buf
}

/// 32-bit word view over `floor(buf.len() / 4)` elements
#[inline]
pub fn u32_view(buf: &[u8]) -> U32View<'_> {
    U32View::new(buf)
}

/// Circular right rotation of a 32-bit word; `shift` is taken modulo 32
#[inline]
pub const fn rotr(word: u32, shift: u32) -> u32 {
    word.rotate_right(shift % 32)
}

/// Borrowed reinterpretation of a byte buffer as native-endian `u32` words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U32View<'a> {
    bytes: &'a [u8],
}

impl<'a> U32View<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        let whole = buf.len() - buf.len() % 4;
        Self {
            bytes: &buf[..whole],
        }
    }

    /// Number of whole words
    pub fn len(&self) -> usize {
        self.bytes.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Word at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<u32> {
        let start = index.checked_mul(4)?;
        let chunk = self.bytes.get(start..start.checked_add(4)?)?;
        Some(u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    pub fn iter(&self) -> U32Iter<'a> {
        U32Iter {
            chunks: self.bytes.chunks_exact(4),
        }
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// The words as a real `&[u32]` slice when the buffer is 4-byte aligned
    pub fn as_words(&self) -> Option<&'a [u32]> {
        // SAFETY: every bit pattern is a valid u32, and `align_to` only
        // places correctly aligned memory in the middle slice.
        let (head, words, _) = unsafe { self.bytes.align_to::<u32>() };
        if head.is_empty() && words.len() == self.len() {
            Some(words)
        } else {
            None
        }
    }

    /// The bytes backing the view (whole words only)
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> IntoIterator for U32View<'a> {
    type Item = u32;
    type IntoIter = U32Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct U32Iter<'a> {
    chunks: std::slice::ChunksExact<'a, u8>,
}

impl Iterator for U32Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.chunks
            .next()
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for U32Iter<'_> {}
impl FusedIterator for U32Iter<'_> {}

/// Mutable view for reading and writing words at byte offsets in a chosen
/// byte order
#[derive(Debug)]
pub struct ByteView<'a> {
    bytes: &'a mut [u8],
}

/// [`ByteView`] over the whole of `buf`
pub fn create_view(buf: &mut [u8]) -> ByteView<'_> {
    ByteView { bytes: buf }
}

impl<'a> ByteView<'a> {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get_u32(&self, offset: usize, order: Endianness) -> Result<u32> {
        let raw = self.read::<4>(offset)?;
        Ok(match order {
            Endianness::Little => u32::from_le_bytes(raw),
            Endianness::Big => u32::from_be_bytes(raw),
        })
    }

    pub fn set_u32(&mut self, offset: usize, value: u32, order: Endianness) -> Result<()> {
        let raw = match order {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.write(offset, raw)
    }

    pub fn get_u64(&self, offset: usize, order: Endianness) -> Result<u64> {
        let raw = self.read::<8>(offset)?;
        Ok(match order {
            Endianness::Little => u64::from_le_bytes(raw),
            Endianness::Big => u64::from_be_bytes(raw),
        })
    }

    /// Used for the big-endian length suffix of Merkle–Damgård padding
    pub fn set_u64(&mut self, offset: usize, value: u64, order: Endianness) -> Result<()> {
        let raw = match order {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.write(offset, raw)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    fn range(&self, offset: usize, width: usize) -> Result<std::ops::Range<usize>> {
        offset
            .checked_add(width)
            .filter(|&end| end <= self.bytes.len())
            .map(|end| offset..end)
            .ok_or(BytesError::ViewOutOfRange {
                offset,
                width,
                len: self.bytes.len(),
            })
    }

    fn read<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        let range = self.range(offset, N)?;
        let mut raw = [0u8; N];
        raw.copy_from_slice(&self.bytes[range]);
        Ok(raw)
    }

    fn write<const N: usize>(&mut self, offset: usize, raw: [u8; N]) -> Result<()> {
        let range = self.range(offset, N)?;
        self.bytes[range].copy_from_slice(&raw);
        Ok(())
    }
}
