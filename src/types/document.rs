//! Extracted document types and their party sub-records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of document types the pipeline recognizes.
///
/// Drives which completeness rule set applies during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    W2,
    Nec1099,
    Misc1099,
    Int1099,
    Div1099,
    G1099,
    R1099,
    K1099,
    Receipt,
    /// Anything off-taxonomy the model reports degrades here rather than
    /// failing the parse.
    Other,
}

impl DocumentType {
    /// The wire name, as emitted by the inference service.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::W2 => "w2",
            Self::Nec1099 => "1099-nec",
            Self::Misc1099 => "1099-misc",
            Self::Int1099 => "1099-int",
            Self::Div1099 => "1099-div",
            Self::G1099 => "1099-g",
            Self::R1099 => "1099-r",
            Self::K1099 => "1099-k",
            Self::Receipt => "receipt",
            Self::Other => "other",
        }
    }

    /// Map a wire name to its type. Unknown names degrade to `Other`.
    pub fn from_wire(name: &str) -> Self {
        match name {
            "w2" => Self::W2,
            "1099-nec" => Self::Nec1099,
            "1099-misc" => Self::Misc1099,
            "1099-int" => Self::Int1099,
            "1099-div" => Self::Div1099,
            "1099-g" => Self::G1099,
            "1099-r" => Self::R1099,
            "1099-k" => Self::K1099,
            "receipt" => Self::Receipt,
            _ => Self::Other,
        }
    }
}

impl Serialize for DocumentType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for DocumentType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&name))
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A party on the document: employer/employee, payer/recipient, or merchant.
///
/// `address` holds the originally extracted free-form string and is
/// preserved even when normalization fails. `street`/`city`/`state`/
/// `zip_code` are filled in by normalization, or arrive pre-split from
/// the extraction itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Employer identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ein: Option<String>,

    /// Social security number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,

    /// Free-form address as extracted from the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl Party {
    /// True when the address already arrived pre-split from extraction.
    pub fn has_structured_address(&self) -> bool {
        is_present(&self.street) && is_present(&self.city)
    }
}

/// Income figures as extracted from the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    /// Box 1 wages on a W-2. May be 0, which still counts as present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wages: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federal_tax_withheld: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_security_wages: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicare_wages: Option<f64>,

    /// Box 1 on a 1099-NEC.
    #[serde(
        default,
        rename = "nonEmployeeCompensation",
        alias = "nonemployeeCompensation",
        skip_serializing_if = "Option::is_none"
    )]
    pub nonemployee_compensation: Option<f64>,
}

/// Transaction details on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// A structured record extracted from one document.
///
/// Which party blocks are populated depends on `document_type`:
/// `employer`/`employee` for W-2s, `payer`/`recipient` for 1099 variants,
/// `merchant`/`transaction` for receipts. Once validation accepts a
/// record, every field its rule set requires is present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub document_type: DocumentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_year: Option<i32>,

    /// The inference service's own judgment that the document contains
    /// placeholder values (e.g. "John Doe"). Completeness is checked
    /// before this flag is interpreted.
    #[serde(default)]
    pub is_template_data: bool,

    /// Model confidence in [0, 1]. The looser 1099 layouts often omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Income>,

    /// Compensation at the record root, as some 1099 extractions return it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
}

impl ExtractedRecord {
    /// All populated party blocks, for per-party post-processing.
    pub fn party_blocks_mut(&mut self) -> impl Iterator<Item = &mut Party> {
        [
            &mut self.employer,
            &mut self.employee,
            &mut self.payer,
            &mut self.recipient,
            &mut self.merchant,
        ]
        .into_iter()
        .filter_map(|p| p.as_mut())
    }
}

/// True if an optional text field is present and non-empty.
pub(crate) fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_wire_names_round_trip() {
        for doc_type in [
            DocumentType::W2,
            DocumentType::Nec1099,
            DocumentType::Misc1099,
            DocumentType::Int1099,
            DocumentType::Div1099,
            DocumentType::G1099,
            DocumentType::R1099,
            DocumentType::K1099,
            DocumentType::Receipt,
            DocumentType::Other,
        ] {
            let json = serde_json::to_string(&doc_type).unwrap();
            assert_eq!(json, format!("\"{}\"", doc_type.wire_name()));
            let back: DocumentType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, doc_type);
        }
    }

    #[test]
    fn test_unknown_document_type_degrades_to_other() {
        let doc_type: DocumentType = serde_json::from_str("\"schedule-k1\"").unwrap();
        assert_eq!(doc_type, DocumentType::Other);
    }

    #[test]
    fn test_record_parses_from_camel_case() {
        let record: ExtractedRecord = serde_json::from_str(
            r#"{
                "documentType": "1099-nec",
                "payer": {"name": "Acme", "ein": "12-3456789"},
                "recipient": {"name": "J. Doe", "ssn": "123-45-6789"},
                "compensation": 5000,
                "taxYear": 2024,
                "isTemplateData": false,
                "confidence": 0.9
            }"#,
        )
        .unwrap();
        assert_eq!(record.document_type, DocumentType::Nec1099);
        assert_eq!(record.compensation, Some(5000.0));
        assert_eq!(record.tax_year, Some(2024));
        assert!(!record.is_template_data);
    }

    #[test]
    fn test_nested_nonemployee_compensation_field() {
        let record: ExtractedRecord = serde_json::from_str(
            r#"{"documentType": "1099-nec", "income": {"nonEmployeeCompensation": 800}}"#,
        )
        .unwrap();
        assert_eq!(
            record.income.unwrap().nonemployee_compensation,
            Some(800.0)
        );
    }

    #[test]
    fn test_structured_address_detection() {
        let mut party = Party {
            street: Some("1 Main St".to_string()),
            ..Default::default()
        };
        assert!(!party.has_structured_address());
        party.city = Some("Springfield".to_string());
        assert!(party.has_structured_address());
        party.street = Some("   ".to_string());
        assert!(!party.has_structured_address());
    }
}
