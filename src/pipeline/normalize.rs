//! Address normalization post-processing.
//!
//! Normalization only fills in structure; it never destructively
//! overwrites a populated field with empty data, and a pre-split address
//! is never re-derived from the raw string.

use crate::traits::normalizer::AddressNormalizer;
use crate::types::document::{is_present, ExtractedRecord, Party};

/// Normalize every populated party block on a record. Idempotent; has no
/// failure path - a normalization miss just leaves `address` populated.
pub fn normalize_record(record: &mut ExtractedRecord, normalizer: &dyn AddressNormalizer) {
    for party in record.party_blocks_mut() {
        normalize_party(party, normalizer);
    }
}

/// Fill a party's structured address fields from its raw address string.
pub fn normalize_party(party: &mut Party, normalizer: &dyn AddressNormalizer) {
    // Already structured: never corrupt a good value with a heuristic one.
    if party.has_structured_address() {
        return;
    }

    let Some(raw) = party
        .address
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return;
    };

    let Some(parsed) = normalizer.normalize(raw) else {
        return;
    };

    // Prefer the normalizer's street; fall back to the raw string when it
    // came back empty.
    let street = if parsed.street.trim().is_empty() {
        raw.to_string()
    } else {
        parsed.street
    };
    fill(&mut party.street, street);
    fill(&mut party.city, parsed.city);
    fill(&mut party.state, parsed.state);
    fill(&mut party.zip_code, parsed.zip_code);
}

fn fill(slot: &mut Option<String>, value: String) {
    if value.trim().is_empty() || is_present(slot) {
        return;
    }
    *slot = Some(value);
}
