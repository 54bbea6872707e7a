// src/random.rs
//! Secure random source selection
//!
//! Sources are probed once, in preference order, and the first working one
//! is kept for the lifetime of the owning [`Capabilities`](crate::Capabilities).
//! There is no non-cryptographic fallback: if nothing works, selection fails.

use std::fmt;
use std::sync::Mutex;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::aliases::{SecretBytes, Seed32};
use crate::error::{BytesError, Result};

/// A cryptographically secure byte generator
pub trait RandomSource: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    /// Fill `buf` entirely with random bytes
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Which kind of source to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Operating system entropy on every call
    #[default]
    Os,
    /// ChaCha-based generator seeded once from the operating system
    Seeded,
}

impl SourceKind {
    /// Open and probe a source of this kind
    pub fn open(self) -> Result<Box<dyn RandomSource>> {
        match self {
            SourceKind::Os => {
                let source = OsRandom;
                source.fill(&mut [0u8; 1])?;
                Ok(Box::new(source))
            }
            SourceKind::Seeded => Ok(Box::new(SeededRandom::from_os()?)),
        }
    }

    /// The other kind, tried when this one is unavailable
    pub fn fallback(self) -> Self {
        match self {
            SourceKind::Os => SourceKind::Seeded,
            SourceKind::Seeded => SourceKind::Os,
        }
    }
}

/// Native platform source
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn name(&self) -> &'static str {
        "os"
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| BytesError::RandomSource {
                source_name: self.name(),
                reason: e.to_string(),
            })
    }
}

/// Alternate source: a userspace CSPRNG seeded from the OS at open time
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_os() -> Result<Self> {
        let rng = StdRng::try_from_os_rng().map_err(|e| BytesError::RandomSource {
            source_name: "seeded",
            reason: e.to_string(),
        })?;
        Ok(Self {
            rng: Mutex::new(rng),
        })
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom").finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut rng = self.rng.lock().map_err(|_| BytesError::RandomSource {
            source_name: self.name(),
            reason: "generator lock poisoned".into(),
        })?;
        rng.fill_bytes(buf);
        Ok(())
    }
}

/// Open the first kind in `order` that works
pub fn select_random_source(order: &[SourceKind]) -> Result<Box<dyn RandomSource>> {
    let mut failures = Vec::new();

    for kind in order {
        match kind.open() {
            Ok(source) => {
                debug!(source = source.name(), "selected secure random source");
                return Ok(source);
            }
            Err(err) => {
                warn!(?kind, %err, "secure random source unavailable");
                failures.push(err.to_string());
            }
        }
    }

    Err(BytesError::NoSecureRandom(if failures.is_empty() {
        "no candidates".into()
    } else {
        failures.join("; ")
    }))
}

/// `len` fresh bytes from `source`
pub fn random_bytes(source: &dyn RandomSource, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    source.fill(&mut out)?;
    Ok(out)
}

/// Like [`random_bytes`], but zeroized on drop
pub fn random_secret(source: &dyn RandomSource, len: usize) -> Result<SecretBytes> {
    Ok(SecretBytes::new(random_bytes(source, len)?))
}

/// 32 random bytes as fixed-size secret seed material
pub fn random_seed32(source: &dyn RandomSource) -> Result<Seed32> {
    let mut seed = [0u8; 32];
    source.fill(&mut seed)?;
    Ok(Seed32::new(seed))
}
