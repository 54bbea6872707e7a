// src/lib.rs
//! hash-bytes: byte, hex, and platform helpers for hash libraries
//!
//! Features:
//! - Lowercase hex encoding and `0x`-tolerant decoding
//! - Zero-copy 8/32-bit views and 32-bit rotation
//! - Concatenation, equality, and validated digest wrappers
//! - Secure random bytes from a once-detected source
//! - A cooperative loop that yields to the async scheduler on a tick

pub mod aliases;
pub mod async_loop;
pub mod buffer;
pub mod capabilities;
pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod random;
pub mod scheduler;
pub mod view;

// Re-export everything users need at the crate root
pub use aliases::{SecretBytes, Seed32};
pub use async_loop::{
    async_loop, async_loop_default, async_loop_until, CancelToken, LoopReport,
};
pub use buffer::{concat_bytes, equals_bytes, try_concat_bytes, wrap_hash, WrappedHash};
pub use capabilities::Capabilities;
pub use codec::{bytes_to_hex, hex_to_bytes};
pub use config::load as load_config;
pub use error::{BytesError, Result};
pub use input::{ensure_bytes, to_bytes, utf8_to_bytes, Input};
pub use view::{create_view, rotr, u32_view, u8_view, ByteView, Endianness, U32View};
