//! On-disk layout for generated documents.
//!
//! Everything lives under one output root:
//! `{root}/documents/{category}/{prefix}_{issuer}_{tier}_{###}.png`, with the
//! manifests at `{root}/manifest*.json` and linked copies under
//! `{root}/documents/donations/`.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::models::{DocumentType, QualityTier};

pub const DOCUMENTS_DIR: &str = "documents";
pub const DONATIONS_DIR: &str = "donations";
pub const DONATION_MANIFEST: &str = "manifest_donations.json";

/// Root of all generated images.
pub fn documents_dir(root: &Path) -> PathBuf {
    root.join(DOCUMENTS_DIR)
}

/// Directory holding one document type's images.
pub fn category_dir(root: &Path, document_type: DocumentType) -> PathBuf {
    documents_dir(root).join(document_type.category_dir())
}

/// Directory holding scenario copies.
pub fn donations_dir(root: &Path) -> PathBuf {
    documents_dir(root).join(DONATIONS_DIR)
}

/// File name for a generated document. `index` is 1-based within its category.
pub fn document_filename(prefix: &str, issuer: &str, tier: QualityTier, index: usize) -> String {
    format!("{}_{}_{}_{:03}.png", prefix, issuer, tier.as_str(), index)
}

/// Path of a document relative to the documents directory, as written in
/// manifests (`receipts/receipt_goodwill_high_001.png`).
pub fn manifest_filename(document_type: DocumentType, filename: &str) -> String {
    format!("{}/{}", document_type.category_dir(), filename)
}

/// Resolve a manifest `filename` back to an absolute path.
pub fn resolve_manifest_filename(root: &Path, filename: &str) -> PathBuf {
    documents_dir(root).join(filename)
}

/// File name for a form linked into a donation scenario.
pub fn donation_filename(donation_id: &str, form_type: DocumentType) -> String {
    format!("Donation_{}_{}.png", donation_id, form_type.as_str())
}

/// Write an image as PNG, creating parent directories.
pub fn save_png(path: &Path, image: &RgbImage) -> image::ImageResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, image::ImageFormat::Png)
}

/// Copy `from` to `to`, creating parent directories.
pub fn copy_into(from: &Path, to: &Path) -> std::io::Result<u64> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(from, to)
}
