//! Donation scenario bundle shapes (`manifest_donations.json`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::{DocumentType, QualityTier};
use super::manifest::ExpectedFields;
use super::money::Money;

/// Kind of property donated in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Cash,
    /// Non-cash property other than vehicles and securities.
    Goods,
    Vehicle,
    Securities,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Goods => "goods",
            Self::Vehicle => "vehicle",
            Self::Securities => "securities",
        }
    }
}

/// Outcome of matching one required form against the document pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Linked,
    /// The form lives in a manifest that was not merged into this run.
    NeedsLinking,
    /// Every source document of this type was already consumed.
    Missing,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linked => "linked",
            Self::NeedsLinking => "needs_linking",
            Self::Missing => "missing",
        }
    }
}

/// The documentation rule a scenario falls under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrsRequirement {
    /// Human readable bracket, e.g. `Non-cash property over $5,000`.
    pub rule: String,
    pub forms: Vec<DocumentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedForm {
    pub form_type: DocumentType,
    pub status: LinkStatus,
    /// Copied file, relative to `documents/` (linked only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// File the copy was made from, relative to `documents/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_fields: Option<ExpectedFields>,
}

impl LinkedForm {
    /// A requirement that could not be satisfied from the pools.
    pub fn unlinked(form_type: DocumentType, status: LinkStatus) -> Self {
        Self {
            form_type,
            status,
            filename: None,
            source_filename: None,
            quality: None,
            expected_fields: None,
        }
    }
}

/// One scenario with its linked documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub donation_id: String,
    pub asset_type: AssetType,
    pub amount: Money,
    pub description: String,
    pub irs_requirements: IrsRequirement,
    pub linked_forms: Vec<LinkedForm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationManifest {
    pub version: String,
    pub generated_by: String,
    pub generated_at: DateTime<Utc>,
    pub total_donations: usize,
    pub donations: Vec<DonationRecord>,
}
