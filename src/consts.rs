// src/consts.rs
//! Shared constants: probe values and defaults

/// Word written to memory to observe host byte order
pub const ENDIAN_PROBE_WORD: u32 = 0x1122_3344;

/// First byte of [`ENDIAN_PROBE_WORD`] on a little-endian host
pub const LITTLE_ENDIAN_FIRST_BYTE: u8 = 0x44;

/// Default length of `random_bytes` output (256 bits)
pub const DEFAULT_RANDOM_LENGTH: usize = 32;

/// Default interval between cooperative yields, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 10;

/// Optional prefix accepted by the hex decoder
pub const HEX_PREFIX: &str = "0x";

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "HASH_BYTES_CONFIG";

/// Environment variable overriding `scheduler.tick_ms`
pub const TICK_MS_ENV: &str = "HASH_BYTES_TICK_MS";
