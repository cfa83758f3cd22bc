//! Scenario linking.
//!
//! Pulls documents out of generated manifests into donation bundles. Each
//! document type has one pool, except acknowledgment letters, which are
//! pooled per contribution variant. Entries are handed out in manifest order
//! and never reused within a run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::manifest::{load_manifest, write_json, ManifestError};
use super::scenarios::DonationScenario;
use crate::models::{
    DocumentType, DonationManifest, DonationRecord, LinkStatus, LinkedForm, Manifest,
    ManifestEntry, ManifestKind, GENERATED_BY, MANIFEST_VERSION,
};
use crate::render::Contribution;
use crate::storage;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which pool an entry belongs to. Only acknowledgment letters carry a
/// contribution variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PoolKey {
    form_type: DocumentType,
    contribution: Option<Contribution>,
}

impl PoolKey {
    fn of_entry(entry: &ManifestEntry) -> Self {
        Self {
            form_type: entry.document_type,
            contribution: (entry.document_type == DocumentType::AcknowledgmentLetter)
                .then(|| Contribution::of_fields(&entry.expected_fields)),
        }
    }

    fn for_scenario(scenario: &DonationScenario, form_type: DocumentType) -> Self {
        Self {
            form_type,
            contribution: (form_type == DocumentType::AcknowledgmentLetter)
                .then(|| Contribution::for_asset(scenario.asset_type)),
        }
    }

    fn source_manifests(&self) -> Vec<ManifestKind> {
        match self.contribution {
            Some(contribution) => vec![contribution.source_manifest()],
            None => self.form_type.source_manifests().to_vec(),
        }
    }
}

/// Entries of one pool and how many have been handed out.
#[derive(Debug, Default)]
struct FormPool {
    entries: Vec<ManifestEntry>,
    cursor: usize,
}

impl FormPool {
    fn take(&mut self) -> Option<&ManifestEntry> {
        let entry = self.entries.get(self.cursor)?;
        self.cursor += 1;
        Some(entry)
    }
}

/// Needed vs. available vs. linked for one form type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRow {
    pub form_type: DocumentType,
    pub needed: usize,
    pub available: usize,
    pub linked: usize,
}

impl CoverageRow {
    pub fn is_covered(&self) -> bool {
        self.linked >= self.needed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub rows: Vec<CoverageRow>,
}

impl CoverageReport {
    pub fn row(&self, form_type: DocumentType) -> Option<&CoverageRow> {
        self.rows.iter().find(|r| r.form_type == form_type)
    }

    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(CoverageRow::is_covered)
    }
}

#[derive(Debug)]
pub struct LinkOutcome {
    pub manifest: DonationManifest,
    pub manifest_path: PathBuf,
    pub coverage: CoverageReport,
}

/// Load the manifests to link from. The IRS forms manifest is always read;
/// the primary one only when `merge_primary` is set.
pub fn load_sources(root: &Path, merge_primary: bool) -> Result<Vec<(ManifestKind, Manifest)>, LinkError> {
    let mut kinds = Vec::new();
    if merge_primary {
        kinds.push(ManifestKind::Primary);
    }
    kinds.push(ManifestKind::IrsForms);

    let mut sources = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let path = root.join(kind.filename());
        let manifest = load_manifest(&path)?;
        info!(
            "Loaded {} documents from {}",
            manifest.documents.len(),
            path.display()
        );
        sources.push((kind, manifest));
    }
    Ok(sources)
}

pub struct Linker {
    root: PathBuf,
    pools: HashMap<PoolKey, FormPool>,
    merged: Vec<ManifestKind>,
}

impl Linker {
    /// Build pools from already loaded manifests, in the order given.
    pub fn new(root: &Path, sources: Vec<(ManifestKind, Manifest)>) -> Self {
        let mut pools: HashMap<PoolKey, FormPool> = HashMap::new();
        let mut merged = Vec::new();
        for (kind, manifest) in sources {
            merged.push(kind);
            for entry in manifest.documents {
                pools.entry(PoolKey::of_entry(&entry)).or_default().entries.push(entry);
            }
        }
        Self {
            root: root.to_path_buf(),
            pools,
            merged,
        }
    }

    /// Entries of `form_type` across all of its pools.
    pub fn available(&self, form_type: DocumentType) -> usize {
        self.pools
            .iter()
            .filter(|(key, _)| key.form_type == form_type)
            .map(|(_, pool)| pool.entries.len())
            .sum()
    }

    fn unmerged_source(&self, key: &PoolKey) -> Option<ManifestKind> {
        key.source_manifests()
            .into_iter()
            .find(|kind| !self.merged.contains(kind))
    }

    /// Link every scenario in order and write `manifest_donations.json`.
    pub fn link(mut self, scenarios: &[DonationScenario]) -> Result<LinkOutcome, LinkError> {
        let mut donations = Vec::with_capacity(scenarios.len());
        let mut needed: HashMap<DocumentType, usize> = HashMap::new();
        let mut linked: HashMap<DocumentType, usize> = HashMap::new();

        for scenario in scenarios {
            let requirement = scenario.requirement();
            let mut forms = Vec::with_capacity(requirement.forms.len());
            for &form_type in &requirement.forms {
                *needed.entry(form_type).or_default() += 1;
                let form = self.link_form(scenario, form_type)?;
                if form.status == LinkStatus::Linked {
                    *linked.entry(form_type).or_default() += 1;
                }
                forms.push(form);
            }

            donations.push(DonationRecord {
                donation_id: scenario.id.to_string(),
                asset_type: scenario.asset_type,
                amount: scenario.amount,
                description: scenario.description.to_string(),
                irs_requirements: requirement,
                linked_forms: forms,
            });
        }

        let coverage = CoverageReport {
            rows: DocumentType::ALL
                .into_iter()
                .filter(|t| needed.contains_key(t) || self.available(*t) > 0)
                .map(|form_type| CoverageRow {
                    form_type,
                    needed: needed.get(&form_type).copied().unwrap_or(0),
                    available: self.available(form_type),
                    linked: linked.get(&form_type).copied().unwrap_or(0),
                })
                .collect(),
        };

        let manifest = DonationManifest {
            version: MANIFEST_VERSION.to_string(),
            generated_by: GENERATED_BY.to_string(),
            generated_at: Utc::now(),
            total_donations: donations.len(),
            donations,
        };
        let manifest_path = self.root.join(storage::DONATION_MANIFEST);
        write_json(&manifest_path, &manifest)?;
        info!(
            "Linked {} donations into {}",
            manifest.total_donations,
            manifest_path.display()
        );

        Ok(LinkOutcome {
            manifest,
            manifest_path,
            coverage,
        })
    }

    fn link_form(
        &mut self,
        scenario: &DonationScenario,
        form_type: DocumentType,
    ) -> Result<LinkedForm, LinkError> {
        let root = self.root.clone();
        let key = PoolKey::for_scenario(scenario, form_type);
        if let Some(entry) = self.pools.get_mut(&key).and_then(FormPool::take) {
            let filename = storage::donation_filename(scenario.id, form_type);
            let from = storage::resolve_manifest_filename(&root, &entry.filename);
            let to = storage::donations_dir(&root).join(&filename);
            storage::copy_into(&from, &to).map_err(|source| LinkError::Copy {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;
            debug!("Linked {} as {}", entry.filename, filename);

            return Ok(LinkedForm {
                form_type,
                status: LinkStatus::Linked,
                filename: Some(format!("{}/{}", storage::DONATIONS_DIR, filename)),
                source_filename: Some(entry.filename.clone()),
                quality: Some(entry.quality),
                expected_fields: Some(entry.expected_fields.clone()),
            });
        }

        let status = match self.unmerged_source(&key) {
            Some(kind) => {
                warn!(
                    "Donation {}: {} needs linking from {}",
                    scenario.id,
                    form_type,
                    kind.filename()
                );
                LinkStatus::NeedsLinking
            }
            None => {
                warn!("Donation {}: no {} left to link", scenario.id, form_type);
                LinkStatus::Missing
            }
        };
        Ok(LinkedForm::unlinked(form_type, status))
    }
}

/// Load sources from `root` and link `scenarios` against them.
pub fn link_scenarios(
    root: &Path,
    scenarios: &[DonationScenario],
    merge_primary: bool,
) -> Result<LinkOutcome, LinkError> {
    let sources = load_sources(root, merge_primary)?;
    Linker::new(root, sources).link(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetType, Money, QualityTier};
    use crate::services::manifest::ManifestAssembler;
    use tempfile::tempdir;

    fn manifest_with(root: &Path, files: &[(DocumentType, &str)]) -> Manifest {
        let mut assembler = ManifestAssembler::new();
        for (document_type, name) in files {
            let filename = storage::manifest_filename(*document_type, name);
            let path = storage::resolve_manifest_filename(root, &filename);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, name.as_bytes()).unwrap();
            let mut fields = serde_json::Map::new();
            fields.insert("source".into(), (*name).into());
            if name.starts_with("acknowledgment_inkind") {
                fields.insert("item_description".into(), "Winter coats".into());
            }
            assembler.record(
                document_type.category_dir(),
                ManifestEntry {
                    filename,
                    document_type: *document_type,
                    quality: QualityTier::High,
                    synthetic: true,
                    expected_fields: fields,
                },
            );
        }
        assembler.finish(Utc::now())
    }

    fn vehicle(id: &'static str) -> DonationScenario {
        DonationScenario {
            id,
            asset_type: AssetType::Vehicle,
            amount: Money::from_dollars(3000),
            description: "Used truck",
        }
    }

    #[test]
    fn test_pool_entries_are_consumed_once() {
        let dir = tempdir().unwrap();
        let irs = manifest_with(
            dir.path(),
            &[
                (DocumentType::Form1098C, "a.png"),
                (DocumentType::Form1098C, "b.png"),
                (DocumentType::Form8283SectionA, "c.png"),
            ],
        );
        let linker = Linker::new(dir.path(), vec![(ManifestKind::IrsForms, irs)]);
        let outcome = linker
            .link(&[vehicle("001"), vehicle("002"), vehicle("003")])
            .unwrap();

        let statuses: Vec<Vec<LinkStatus>> = outcome
            .manifest
            .donations
            .iter()
            .map(|d| d.linked_forms.iter().map(|f| f.status).collect())
            .collect();
        assert_eq!(
            statuses,
            vec![
                vec![LinkStatus::Linked, LinkStatus::Linked],
                vec![LinkStatus::Linked, LinkStatus::Missing],
                vec![LinkStatus::Missing, LinkStatus::Missing],
            ]
        );

        let first = &outcome.manifest.donations[0].linked_forms[0];
        assert_eq!(first.source_filename.as_deref(), Some("form_1098c/a.png"));
        assert_eq!(
            first.filename.as_deref(),
            Some("donations/Donation_001_form_1098c.png")
        );
        let second = &outcome.manifest.donations[1].linked_forms[0];
        assert_eq!(second.source_filename.as_deref(), Some("form_1098c/b.png"));

        let copied = storage::donations_dir(dir.path()).join("Donation_002_form_1098c.png");
        assert_eq!(std::fs::read(copied).unwrap(), b"b.png");
    }

    #[test]
    fn test_unmerged_primary_types_need_linking() {
        let dir = tempdir().unwrap();
        let irs = manifest_with(dir.path(), &[]);
        let cash = DonationScenario {
            id: "001",
            asset_type: AssetType::Cash,
            amount: Money::from_dollars(100),
            description: "Cash",
        };
        let outcome = Linker::new(dir.path(), vec![(ManifestKind::IrsForms, irs)])
            .link(&[cash, vehicle("002")])
            .unwrap();

        let donations = &outcome.manifest.donations;
        assert_eq!(donations[0].linked_forms[0].status, LinkStatus::NeedsLinking);
        assert_eq!(donations[1].linked_forms[0].status, LinkStatus::Missing);
    }

    fn scenario(id: &'static str, asset_type: AssetType, dollars: i64) -> DonationScenario {
        DonationScenario {
            id,
            asset_type,
            amount: Money::from_dollars(dollars),
            description: "Gift",
        }
    }

    #[test]
    fn test_letters_match_contribution_variant() {
        let dir = tempdir().unwrap();
        let primary = manifest_with(
            dir.path(),
            &[
                (DocumentType::AcknowledgmentLetter, "acknowledgment_a.png"),
                (DocumentType::BankStatement, "bank_statement_a.png"),
            ],
        );
        let irs = manifest_with(
            dir.path(),
            &[
                (DocumentType::AcknowledgmentLetter, "acknowledgment_inkind_a.png"),
                (DocumentType::Form8283SectionA, "form_8283a_a.png"),
            ],
        );
        let linker = Linker::new(
            dir.path(),
            vec![(ManifestKind::Primary, primary), (ManifestKind::IrsForms, irs)],
        );
        assert_eq!(linker.available(DocumentType::AcknowledgmentLetter), 2);

        let outcome = linker
            .link(&[
                scenario("001", AssetType::Goods, 1200),
                scenario("002", AssetType::Cash, 800),
            ])
            .unwrap();
        let donations = &outcome.manifest.donations;
        assert_eq!(
            donations[0].linked_forms[0].source_filename.as_deref(),
            Some("acknowledgment_letters/acknowledgment_inkind_a.png")
        );
        assert_eq!(
            donations[1].linked_forms[0].source_filename.as_deref(),
            Some("acknowledgment_letters/acknowledgment_a.png")
        );
    }

    #[test]
    fn test_letter_variant_pools_do_not_substitute() {
        let dir = tempdir().unwrap();
        let irs = manifest_with(
            dir.path(),
            &[
                (DocumentType::AcknowledgmentLetter, "acknowledgment_inkind_a.png"),
                (DocumentType::Form8283SectionA, "form_8283a_a.png"),
                (DocumentType::Form8283SectionA, "form_8283a_b.png"),
            ],
        );
        let outcome = Linker::new(dir.path(), vec![(ManifestKind::IrsForms, irs)])
            .link(&[
                scenario("001", AssetType::Cash, 800),
                scenario("002", AssetType::Goods, 1200),
                scenario("003", AssetType::Goods, 1500),
            ])
            .unwrap();
        let letter = |i: usize| outcome.manifest.donations[i].linked_forms[0].status;

        // Cash letters live in the unmerged primary manifest.
        assert_eq!(letter(0), LinkStatus::NeedsLinking);
        assert_eq!(letter(1), LinkStatus::Linked);
        assert_eq!(letter(2), LinkStatus::Missing);
    }

    #[test]
    fn test_coverage_report_counts() {
        let dir = tempdir().unwrap();
        let irs = manifest_with(dir.path(), &[(DocumentType::Form1098C, "a.png")]);
        let outcome = Linker::new(dir.path(), vec![(ManifestKind::IrsForms, irs)])
            .link(&[vehicle("001"), vehicle("002")])
            .unwrap();

        let row = outcome.coverage.row(DocumentType::Form1098C).unwrap();
        assert_eq!((row.needed, row.available, row.linked), (2, 1, 1));
        assert!(!outcome.coverage.is_complete());
    }

    #[test]
    fn test_linked_form_carries_source_fields() {
        let dir = tempdir().unwrap();
        let irs = manifest_with(
            dir.path(),
            &[
                (DocumentType::Form1098C, "a.png"),
                (DocumentType::Form8283SectionA, "c.png"),
            ],
        );
        let outcome = Linker::new(dir.path(), vec![(ManifestKind::IrsForms, irs)])
            .link(&[vehicle("001")])
            .unwrap();
        let form = &outcome.manifest.donations[0].linked_forms[1];
        assert_eq!(form.quality, Some(QualityTier::High));
        assert_eq!(form.expected_fields.as_ref().unwrap()["source"], "c.png");
        assert!(outcome.manifest_path.exists());
    }

    #[test]
    fn test_missing_irs_manifest_is_fatal() {
        let dir = tempdir().unwrap();
        let err = link_scenarios(dir.path(), &[vehicle("001")], false).unwrap_err();
        assert!(matches!(err, LinkError::Manifest(ManifestError::Read { .. })));
    }

    #[test]
    fn test_missing_source_file_is_fatal() {
        let dir = tempdir().unwrap();
        let mut irs = manifest_with(dir.path(), &[(DocumentType::Form1098C, "a.png")]);
        irs.documents[0].filename = "form_1098c/gone.png".to_string();
        let err = Linker::new(dir.path(), vec![(ManifestKind::IrsForms, irs)])
            .link(&[vehicle("001")])
            .unwrap_err();
        assert!(matches!(err, LinkError::Copy { .. }));
    }
}
