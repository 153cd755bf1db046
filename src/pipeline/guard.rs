//! Pre-flight size guard.

use crate::error::{ExtractionError, Result};

/// Reject oversized uploads before any inference call.
///
/// The decoded size is approximated as `len * 3 / 4` without decoding, so
/// obviously-oversized input costs nothing. A rejection here is never
/// retried.
pub fn check_size(file_data: &str, limit: usize) -> Result<()> {
    let approx_bytes = file_data.len() * 3 / 4;
    if approx_bytes > limit {
        return Err(ExtractionError::SizeLimitExceeded { approx_bytes, limit });
    }
    Ok(())
}
