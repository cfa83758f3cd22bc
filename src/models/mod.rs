//! Data models for synthdocs.

mod document;
mod donation;
mod manifest;
mod money;
mod records;

pub use document::{DocumentType, ManifestKind, QualityTier};
pub use donation::{
    AssetType, DonationManifest, DonationRecord, IrsRequirement, LinkStatus, LinkedForm,
};
pub use manifest::{ExpectedFields, Manifest, ManifestEntry, GENERATED_BY, MANIFEST_VERSION};
pub use money::Money;
pub use records::{
    AppraiserRecord, BankRecord, BrokerageRecord, DonorRecord, NonCashItemRecord,
    OrganizationRecord, SecurityRecord, VehicleRecord,
};
