//! Manifest file shapes consumed by the OCR validation harness.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::document::{DocumentType, QualityTier};

/// Schema version written into every manifest.
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Value of the `generatedBy` field.
pub const GENERATED_BY: &str = "synthdocs";

/// Ground-truth field map for one document.
pub type ExpectedFields = Map<String, Value>;

/// One generated image and the values it encodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Path relative to the `documents/` directory.
    pub filename: String,
    pub document_type: DocumentType,
    pub quality: QualityTier,
    pub synthetic: bool,
    pub expected_fields: ExpectedFields,
}

/// A full document inventory (`manifest.json`, `manifest_irs_forms.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    pub generated_by: String,
    pub generated_at: DateTime<Utc>,
    pub total_documents: usize,
    /// Category key -> number of documents generated for it.
    pub document_counts: BTreeMap<String, usize>,
    pub documents: Vec<ManifestEntry>,
}

impl Manifest {
    /// Entries of one document type, in generation order.
    pub fn entries_of(&self, document_type: DocumentType) -> impl Iterator<Item = &ManifestEntry> {
        self.documents
            .iter()
            .filter(move |e| e.document_type == document_type)
    }

    /// True when the counts, the total and the document list agree.
    pub fn is_consistent(&self) -> bool {
        let counted: usize = self.document_counts.values().sum();
        counted == self.documents.len() && self.total_documents == self.documents.len()
    }
}
