// src/aliases.rs
//! Secret containers for random material
//!
//! Both wipe their contents on drop.

use zeroize::Zeroizing;

/// 256-bit seed or key material
pub type Seed32 = Zeroizing<[u8; 32]>;

/// Variable-length secret bytes
pub type SecretBytes = Zeroizing<Vec<u8>>;
