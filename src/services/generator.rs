//! Document generation runs.
//!
//! A [`GenerationPlan`] lists categories, each a renderer plus per-tier
//! counts. Running a plan renders, degrades and writes every document in
//! order, then writes the manifest for the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::manifest::{write_json, ManifestAssembler, ManifestError};
use crate::catalog::SampleCatalog;
use crate::models::{Manifest, ManifestEntry, ManifestKind, QualityTier};
use crate::quality;
use crate::render::{
    AcknowledgmentLetterRenderer, BankStatementRenderer, Contribution, Form1098CRenderer,
    Form8283SectionARenderer, Form8283SectionBRenderer, QualifiedAppraisalRenderer, RenderRequest,
    ReceiptRenderer, Renderer, StockConfirmationRenderer, Typeface,
};
use crate::sampling::DateRange;
use crate::storage;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to write image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Number of documents to produce per quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub edge: usize,
}

impl TierCounts {
    pub const fn new(high: usize, medium: usize, low: usize, edge: usize) -> Self {
        Self {
            high,
            medium,
            low,
            edge,
        }
    }

    pub fn get(&self, tier: QualityTier) -> usize {
        match tier {
            QualityTier::High => self.high,
            QualityTier::Medium => self.medium,
            QualityTier::Low => self.low,
            QualityTier::Edge => self.edge,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.edge
    }

    /// Tier of every document in generation order: all high, then medium,
    /// then low, then edge.
    pub fn sequence(&self) -> impl Iterator<Item = QualityTier> + '_ {
        QualityTier::ALL
            .into_iter()
            .flat_map(move |tier| std::iter::repeat(tier).take(self.get(tier)))
    }
}

/// One category of a run.
pub struct CategoryPlan {
    /// Key reported in `documentCounts` and used for config overrides.
    pub key: &'static str,
    pub renderer: Box<dyn Renderer>,
    pub counts: TierCounts,
}

impl CategoryPlan {
    pub fn new(key: &'static str, renderer: impl Renderer + 'static, counts: TierCounts) -> Self {
        Self {
            key,
            renderer: Box::new(renderer),
            counts,
        }
    }
}

impl std::fmt::Debug for CategoryPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryPlan")
            .field("key", &self.key)
            .field("document_type", &self.renderer.document_type())
            .field("counts", &self.counts)
            .finish()
    }
}

#[derive(Debug)]
pub struct GenerationPlan {
    pub kind: ManifestKind,
    pub categories: Vec<CategoryPlan>,
}

impl GenerationPlan {
    /// Receipts, cash acknowledgment letters and bank statements.
    pub fn primary() -> Self {
        Self {
            kind: ManifestKind::Primary,
            categories: vec![
                CategoryPlan::new("receipts", ReceiptRenderer, TierCounts::new(12, 9, 6, 3)),
                CategoryPlan::new(
                    "acknowledgment_letters",
                    AcknowledgmentLetterRenderer::new(Contribution::Cash),
                    TierCounts::new(10, 6, 4, 0),
                ),
                CategoryPlan::new(
                    "bank_statements",
                    BankStatementRenderer,
                    TierCounts::new(8, 5, 2, 0),
                ),
            ],
        }
    }

    /// Forms needed for non-cash, vehicle and securities scenarios.
    pub fn irs_forms() -> Self {
        Self {
            kind: ManifestKind::IrsForms,
            categories: vec![
                CategoryPlan::new(
                    "form_8283_section_a",
                    Form8283SectionARenderer,
                    TierCounts::new(6, 3, 2, 1),
                ),
                CategoryPlan::new(
                    "form_8283_section_b",
                    Form8283SectionBRenderer,
                    TierCounts::new(4, 2, 1, 1),
                ),
                CategoryPlan::new("form_1098c", Form1098CRenderer, TierCounts::new(4, 2, 1, 1)),
                CategoryPlan::new(
                    "appraisals",
                    QualifiedAppraisalRenderer,
                    TierCounts::new(4, 2, 1, 1),
                ),
                CategoryPlan::new(
                    "acknowledgment_letters",
                    AcknowledgmentLetterRenderer::new(Contribution::InKind),
                    TierCounts::new(5, 3, 2, 0),
                ),
                CategoryPlan::new(
                    "stock_confirmations",
                    StockConfirmationRenderer,
                    TierCounts::new(3, 2, 1, 0),
                ),
            ],
        }
    }

    pub fn for_kind(kind: ManifestKind) -> Self {
        match kind {
            ManifestKind::Primary => Self::primary(),
            ManifestKind::IrsForms => Self::irs_forms(),
        }
    }

    /// Replace the counts of every category named in `overrides`.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, TierCounts>) -> Self {
        for category in &mut self.categories {
            if let Some(counts) = overrides.get(category.key) {
                category.counts = *counts;
            }
        }
        self
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.counts.total()).sum()
    }
}

/// Progress notifications emitted while a plan runs.
#[derive(Debug, Clone)]
pub enum GenerateEvent {
    CategoryStarted { key: &'static str, total: usize },
    DocumentWritten { key: &'static str, filename: String },
    CategoryFinished { key: &'static str, count: usize },
}

#[derive(Debug)]
pub struct GenerationResult {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

/// Renders plans into an output root.
pub struct Generator<'a> {
    catalog: &'a SampleCatalog,
    typeface: &'a Typeface,
    dates: DateRange,
    root: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a SampleCatalog, typeface: &'a Typeface, dates: DateRange, root: &Path) -> Self {
        Self {
            catalog,
            typeface,
            dates,
            root: root.to_path_buf(),
        }
    }

    /// Generate every document of `plan` and write its manifest.
    pub fn run(
        &self,
        plan: &GenerationPlan,
        rng: &mut dyn RngCore,
        mut on_event: impl FnMut(GenerateEvent),
    ) -> Result<GenerationResult, GenerateError> {
        let mut assembler = ManifestAssembler::new();

        for category in &plan.categories {
            let total = category.counts.total();
            info!("Generating {} {}", total, category.key);
            on_event(GenerateEvent::CategoryStarted {
                key: category.key,
                total,
            });
            assembler.declare(category.key);

            for (slot, tier) in category.counts.sequence().enumerate() {
                let entry = self.generate_one(category, slot, tier, rng)?;
                on_event(GenerateEvent::DocumentWritten {
                    key: category.key,
                    filename: entry.filename.clone(),
                });
                assembler.record(category.key, entry);
            }

            on_event(GenerateEvent::CategoryFinished {
                key: category.key,
                count: total,
            });
        }

        let manifest = assembler.finish(Utc::now());
        let manifest_path = self.root.join(plan.kind.filename());
        write_json(&manifest_path, &manifest)?;
        info!(
            "Wrote {} documents to {}",
            manifest.total_documents,
            manifest_path.display()
        );

        Ok(GenerationResult {
            manifest,
            manifest_path,
        })
    }

    fn generate_one(
        &self,
        category: &CategoryPlan,
        slot: usize,
        tier: QualityTier,
        rng: &mut dyn RngCore,
    ) -> Result<ManifestEntry, GenerateError> {
        let renderer = category.renderer.as_ref();
        let request = RenderRequest {
            catalog: self.catalog,
            typeface: self.typeface,
            dates: &self.dates,
            slot,
        };
        let document = renderer.render(&request, rng);
        let image = quality::degrade(document.image, tier, rng);

        let filename = storage::document_filename(
            renderer.file_prefix(),
            &document.issuer_code,
            tier,
            slot + 1,
        );
        let path = storage::category_dir(&self.root, document.document_type).join(&filename);
        storage::save_png(&path, &image).map_err(|source| GenerateError::Image {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {}", path.display());

        Ok(ManifestEntry {
            filename: storage::manifest_filename(document.document_type, &filename),
            document_type: document.document_type,
            quality: tier,
            synthetic: true,
            expected_fields: document.expected_fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_tier_sequence_order() {
        let counts = TierCounts::new(2, 1, 0, 1);
        let tiers: Vec<_> = counts.sequence().collect();
        assert_eq!(
            tiers,
            vec![
                QualityTier::High,
                QualityTier::High,
                QualityTier::Medium,
                QualityTier::Edge
            ]
        );
    }

    #[test]
    fn test_primary_plan_counts() {
        let plan = GenerationPlan::primary();
        let totals: Vec<_> = plan
            .categories
            .iter()
            .map(|c| (c.key, c.counts.total()))
            .collect();
        assert_eq!(
            totals,
            vec![("receipts", 30), ("acknowledgment_letters", 20), ("bank_statements", 15)]
        );
        assert_eq!(plan.total(), 65);
    }

    #[test]
    fn test_irs_plan_covers_irs_types() {
        let plan = GenerationPlan::irs_forms();
        for document_type in [
            DocumentType::Form8283SectionA,
            DocumentType::Form8283SectionB,
            DocumentType::Form1098C,
            DocumentType::QualifiedAppraisal,
            DocumentType::StockConfirmation,
        ] {
            assert!(plan
                .categories
                .iter()
                .any(|c| c.renderer.document_type() == document_type));
        }
    }

    #[test]
    fn test_overrides_replace_counts() {
        let mut overrides = BTreeMap::new();
        overrides.insert("receipts".to_string(), TierCounts::new(1, 0, 0, 0));
        overrides.insert("unknown".to_string(), TierCounts::new(9, 9, 9, 9));
        let plan = GenerationPlan::primary().with_overrides(&overrides);
        assert_eq!(plan.categories[0].counts.total(), 1);
        assert_eq!(plan.categories[1].counts.total(), 20);
    }

    #[test]
    fn test_run_writes_images_and_manifest() {
        let dir = tempdir().unwrap();
        let catalog = SampleCatalog::builtin();
        let typeface = Typeface::builtin();
        let generator = Generator::new(&catalog, &typeface, DateRange::default(), dir.path());
        let plan = GenerationPlan {
            kind: ManifestKind::Primary,
            categories: vec![CategoryPlan::new(
                "receipts",
                ReceiptRenderer,
                TierCounts::new(1, 1, 0, 1),
            )],
        };

        let mut rng = StdRng::seed_from_u64(7);
        let mut written = Vec::new();
        let result = generator
            .run(&plan, &mut rng, |event| {
                if let GenerateEvent::DocumentWritten { filename, .. } = event {
                    written.push(filename);
                }
            })
            .unwrap();

        assert_eq!(result.manifest_path, dir.path().join("manifest.json"));
        assert!(result.manifest_path.exists());
        assert_eq!(result.manifest.total_documents, 3);
        assert_eq!(
            written,
            vec![
                "receipts/receipt_goodwill_high_001.png",
                "receipts/receipt_salvation-army_medium_002.png",
                "receipts/receipt_redcross_edge_003.png",
            ]
        );
        for entry in &result.manifest.documents {
            assert!(storage::resolve_manifest_filename(dir.path(), &entry.filename).exists());
        }
    }
}
