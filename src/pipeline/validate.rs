//! Per-document-type completeness validation.
//!
//! Runs after a successful parse and before anything else interprets the
//! record - including its template flag. A failure here is a defect in the
//! extracted content, not the call, so it is never retried; the message
//! names the missing category so the uploader can act on it.

use crate::error::{ExtractionError, Result};
use crate::types::document::{is_present, DocumentType, ExtractedRecord, Party};

/// Check that every field the document type requires is present.
pub fn validate(record: &ExtractedRecord) -> Result<()> {
    match record.document_type {
        DocumentType::W2 => validate_w2(record),
        DocumentType::Nec1099 | DocumentType::Misc1099 => validate_1099_compensated(record),
        DocumentType::Int1099
        | DocumentType::Div1099
        | DocumentType::G1099
        | DocumentType::R1099
        | DocumentType::K1099 => validate_1099_loose(record),
        // Receipts and unrecognized documents have no structural gate.
        DocumentType::Receipt | DocumentType::Other => Ok(()),
    }
}

fn validate_w2(record: &ExtractedRecord) -> Result<()> {
    let mut missing = Vec::new();
    let employer = record.employer.as_ref();
    let employee = record.employee.as_ref();

    if !party_has(employer, |p| &p.name) {
        missing.push("employer name");
    }
    if !party_has(employer, |p| &p.ein) {
        missing.push("employer EIN");
    }
    if !party_has(employee, |p| &p.name) {
        missing.push("employee name");
    }
    if !party_has(employee, |p| &p.ssn) {
        missing.push("employee SSN");
    }
    // Wages may legitimately be 0; only absence counts as missing.
    if record.income.as_ref().and_then(|i| i.wages).is_none() {
        missing.push("Box 1 wages");
    }

    fail_if_missing(record.document_type, missing, "Make sure the full W-2, including Box 1, is visible and legible, then rescan.")
}

fn validate_1099_compensated(record: &ExtractedRecord) -> Result<()> {
    let mut missing = Vec::new();
    let payer = record.payer.as_ref();
    let recipient = record.recipient.as_ref();

    if !party_has(payer, |p| &p.name) {
        missing.push("payer name");
    }
    if !party_has(payer, |p| &p.ein) {
        missing.push("payer EIN");
    }
    if !party_has(recipient, |p| &p.name) {
        missing.push("recipient name");
    }
    if !party_has(recipient, |p| &p.ssn) && !party_has(recipient, |p| &p.ein) {
        missing.push("recipient SSN or EIN");
    }
    let has_compensation = record.compensation.is_some()
        || record
            .income
            .as_ref()
            .and_then(|i| i.nonemployee_compensation)
            .is_some();
    if !has_compensation {
        missing.push("compensation amount (Box 1)");
    }

    fail_if_missing(record.document_type, missing, "Make sure the full form, including Box 1, is visible and legible, then rescan.")
}

fn validate_1099_loose(record: &ExtractedRecord) -> Result<()> {
    // These forms have heterogeneous layouts; only the parties are gated.
    let mut missing = Vec::new();
    if !party_has(record.payer.as_ref(), |p| &p.name) {
        missing.push("payer name");
    }
    if !party_has(record.recipient.as_ref(), |p| &p.name) {
        missing.push("recipient name");
    }

    fail_if_missing(record.document_type, missing, "Make sure both the payer and recipient blocks are visible, then rescan.")
}

fn party_has(party: Option<&Party>, field: fn(&Party) -> &Option<String>) -> bool {
    party.is_some_and(|p| is_present(field(p)))
}

fn fail_if_missing(
    document_type: DocumentType,
    missing: Vec<&'static str>,
    guidance: &str,
) -> Result<()> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(ExtractionError::Validation {
        document_type,
        message: format!(
            "The {} could not be read completely (missing: {}). {}",
            label(document_type),
            missing.join(", "),
            guidance
        ),
    })
}

fn label(document_type: DocumentType) -> String {
    match document_type {
        DocumentType::W2 => "W-2".to_string(),
        DocumentType::Receipt => "receipt".to_string(),
        DocumentType::Other => "document".to_string(),
        other => other.wire_name().to_uppercase(),
    }
}
