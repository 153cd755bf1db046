//! Address normalizer trait - external parsing collaborator.
//!
//! The parsing algorithm itself lives outside this crate; the pipeline
//! only depends on this calling contract.

use serde::{Deserialize, Serialize};

/// Components of a successfully parsed address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Turns a free-form address string into components.
///
/// Pure: no side effects, and `None` when the string is unparsable. A miss
/// is not an error - the raw string stays on the record either way.
pub trait AddressNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> Option<NormalizedAddress>;
}

/// A normalizer that never parses anything.
///
/// Lets the pipeline compose without a real address parser; every record
/// keeps its raw address strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNormalizer;

impl AddressNormalizer for NoopNormalizer {
    fn normalize(&self, _raw: &str) -> Option<NormalizedAddress> {
        None
    }
}
