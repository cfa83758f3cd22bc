//! Document type and quality tier vocabulary shared by renderers, manifests
//! and the scenario linker.

use serde::{Deserialize, Serialize};

/// Kind of synthetic document.
///
/// The serialized form doubles as the form-type identifier used in donation
/// file names (`Donation_001_form_8283_section_a.png`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Receipt,
    AcknowledgmentLetter,
    BankStatement,
    #[serde(rename = "form_8283_section_a")]
    Form8283SectionA,
    #[serde(rename = "form_8283_section_b")]
    Form8283SectionB,
    #[serde(rename = "form_1098c")]
    Form1098C,
    QualifiedAppraisal,
    StockConfirmation,
}

impl DocumentType {
    pub const ALL: [DocumentType; 8] = [
        Self::Receipt,
        Self::AcknowledgmentLetter,
        Self::BankStatement,
        Self::Form8283SectionA,
        Self::Form8283SectionB,
        Self::Form1098C,
        Self::QualifiedAppraisal,
        Self::StockConfirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::AcknowledgmentLetter => "acknowledgment_letter",
            Self::BankStatement => "bank_statement",
            Self::Form8283SectionA => "form_8283_section_a",
            Self::Form8283SectionB => "form_8283_section_b",
            Self::Form1098C => "form_1098c",
            Self::QualifiedAppraisal => "qualified_appraisal",
            Self::StockConfirmation => "stock_confirmation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Subdirectory of `documents/` holding this type.
    pub fn category_dir(&self) -> &'static str {
        match self {
            Self::Receipt => "receipts",
            Self::AcknowledgmentLetter => "acknowledgment_letters",
            Self::BankStatement => "bank_statements",
            Self::Form8283SectionA | Self::Form8283SectionB => "form_8283",
            Self::Form1098C => "form_1098c",
            Self::QualifiedAppraisal => "appraisals",
            Self::StockConfirmation => "stock_confirmations",
        }
    }

    /// Manifests this type is generated into.
    pub fn source_manifests(&self) -> &'static [ManifestKind] {
        match self {
            Self::Receipt | Self::BankStatement => &[ManifestKind::Primary],
            Self::AcknowledgmentLetter => &[ManifestKind::Primary, ManifestKind::IrsForms],
            _ => &[ManifestKind::IrsForms],
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthetic scan quality applied after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    High,
    Medium,
    Low,
    Edge,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [Self::High, Self::Medium, Self::Low, Self::Edge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Edge => "edge",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "edge" => Some(Self::Edge),
            _ => None,
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which generator run a manifest comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// Receipts, acknowledgment letters and bank statements.
    Primary,
    /// Forms 8283/1098-C, appraisals, in-kind letters, stock confirmations.
    IrsForms,
}

impl ManifestKind {
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Primary => "manifest.json",
            Self::IrsForms => "manifest_irs_forms.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_round_trips_through_str() {
        for ty in DocumentType::ALL {
            assert_eq!(DocumentType::from_str(ty.as_str()), Some(ty));
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
        assert_eq!(DocumentType::from_str("form_990"), None);
    }

    #[test]
    fn test_form_8283_sections_share_a_directory() {
        assert_eq!(
            DocumentType::Form8283SectionA.category_dir(),
            DocumentType::Form8283SectionB.category_dir()
        );
    }

    #[test]
    fn test_quality_tier_serialization() {
        assert_eq!(serde_json::to_string(&QualityTier::Edge).unwrap(), "\"edge\"");
        assert_eq!(QualityTier::from_str("medium"), Some(QualityTier::Medium));
        assert_eq!(QualityTier::from_str("blurry"), None);
    }
}
