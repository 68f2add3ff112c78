//! Comment ID prefix and generation helpers.
//!
//! Generated IDs look like `cmt-a3f8b2c1`: a three-letter prefix, a dash, and
//! eight lowercase hex digits drawn from OS randomness. Callers may supply any
//! other opaque string; only uniqueness within a batch matters downstream.

use std::fmt::Write;

use crate::errors::CoreError;

/// Prefix for generated comment IDs.
pub const COMMENT_PREFIX: &str = "cmt";

/// Number of random bytes behind the hex suffix.
const RANDOM_BYTES: usize = 4;

/// Format a prefixed ID from raw bytes. Returns e.g. `"cmt-a3f8b2c1"`.
#[must_use]
pub fn format_id(prefix: &str, bytes: &[u8]) -> String {
    let mut id = String::with_capacity(prefix.len() + 1 + bytes.len() * 2);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    id
}

/// Generate a fresh comment ID.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the OS random source is unavailable.
pub fn generate_comment_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; RANDOM_BYTES];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    Ok(format_id(COMMENT_PREFIX, &bytes))
}
