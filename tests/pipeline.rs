//! End-to-end generation and linking against a temporary output root.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use synthdocs::catalog::SampleCatalog;
use synthdocs::models::{
    AssetType, DocumentType, LinkStatus, Manifest, ManifestKind, Money, QualityTier,
};
use synthdocs::render::Typeface;
use synthdocs::sampling::DateRange;
use synthdocs::services::{
    link_scenarios, load_manifest, DonationScenario, GenerationPlan, Generator, TierCounts,
    SCENARIOS,
};
use synthdocs::storage;

fn generate(root: &Path, kind: ManifestKind, overrides: &BTreeMap<String, TierCounts>, seed: u64) -> Manifest {
    let catalog = SampleCatalog::builtin();
    let typeface = Typeface::builtin();
    let generator = Generator::new(&catalog, &typeface, DateRange::default(), root);
    let plan = GenerationPlan::for_kind(kind).with_overrides(overrides);
    let mut rng = StdRng::seed_from_u64(seed);
    generator.run(&plan, &mut rng, |_| {}).unwrap().manifest
}

fn tier_split(manifest: &Manifest, document_type: DocumentType) -> Vec<usize> {
    QualityTier::ALL
        .iter()
        .map(|tier| {
            manifest
                .entries_of(document_type)
                .filter(|e| e.quality == *tier)
                .count()
        })
        .collect()
}

fn files_under(dir: &Path, prefix: &str, out: &mut BTreeSet<String>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().to_string();
        let rel = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };
        if entry.file_type().unwrap().is_dir() {
            files_under(&entry.path(), &rel, out);
        } else {
            out.insert(rel);
        }
    }
}

#[test]
fn test_primary_run_counts() {
    let dir = tempdir().unwrap();
    let manifest = generate(dir.path(), ManifestKind::Primary, &BTreeMap::new(), 2025);

    assert_eq!(manifest.total_documents, 65);
    assert_eq!(manifest.documents.len(), 65);
    let counts: Vec<_> = manifest
        .document_counts
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(
        counts,
        vec![("acknowledgment_letters", 20), ("bank_statements", 15), ("receipts", 30)]
    );

    assert_eq!(tier_split(&manifest, DocumentType::Receipt), vec![12, 9, 6, 3]);
    assert_eq!(
        tier_split(&manifest, DocumentType::AcknowledgmentLetter),
        vec![10, 6, 4, 0]
    );
    assert_eq!(tier_split(&manifest, DocumentType::BankStatement), vec![8, 5, 2, 0]);

    let on_disk = load_manifest(&dir.path().join("manifest.json")).unwrap();
    assert_eq!(on_disk, manifest);
}

#[test]
fn test_manifest_matches_files_on_disk() {
    let dir = tempdir().unwrap();
    let manifest = generate(dir.path(), ManifestKind::Primary, &BTreeMap::new(), 7);

    let listed: BTreeSet<String> = manifest.documents.iter().map(|e| e.filename.clone()).collect();
    let mut found = BTreeSet::new();
    files_under(&storage::documents_dir(dir.path()), "", &mut found);

    assert_eq!(listed.len(), manifest.documents.len());
    assert_eq!(listed, found);
}

#[test]
fn test_every_entry_has_organization_and_numeric_amount() {
    let dir = tempdir().unwrap();
    let manifest = generate(dir.path(), ManifestKind::Primary, &BTreeMap::new(), 99);

    for entry in manifest.entries_of(DocumentType::Receipt) {
        let fields = &entry.expected_fields;
        let ein = fields["ein"].as_str().unwrap();
        assert_eq!(ein.len(), 10);
        assert_eq!(&ein[2..3], "-");
        assert!(fields["organization_name"].is_string());
        assert!(fields["amount"].is_number());
    }
}

#[test]
fn test_full_link_covers_every_scenario() {
    let dir = tempdir().unwrap();
    generate(dir.path(), ManifestKind::Primary, &BTreeMap::new(), 1);
    generate(dir.path(), ManifestKind::IrsForms, &BTreeMap::new(), 2);

    let outcome = link_scenarios(dir.path(), SCENARIOS, true).unwrap();
    assert_eq!(outcome.manifest.total_donations, SCENARIOS.len());
    assert!(outcome.coverage.is_complete());

    let mut sources = HashSet::new();
    for donation in &outcome.manifest.donations {
        for form in &donation.linked_forms {
            assert_eq!(form.status, LinkStatus::Linked);
            let source = form.source_filename.clone().unwrap();
            assert!(sources.insert(source), "source linked twice");
            let copied = storage::resolve_manifest_filename(dir.path(), form.filename.as_ref().unwrap());
            assert!(copied.exists());
        }
    }
    assert!(dir.path().join("manifest_donations.json").exists());

    for donation in &outcome.manifest.donations {
        let Some(letter) = donation
            .linked_forms
            .iter()
            .find(|f| f.form_type == DocumentType::AcknowledgmentLetter)
        else {
            continue;
        };
        let fields = letter.expected_fields.as_ref().unwrap();
        let in_kind = fields.contains_key("item_description");
        assert_eq!(in_kind, donation.asset_type != AssetType::Cash, "{}", donation.donation_id);
    }
}

#[test]
fn test_non_cash_donation_gets_in_kind_letter() {
    let dir = tempdir().unwrap();
    generate(dir.path(), ManifestKind::Primary, &BTreeMap::new(), 5);
    generate(dir.path(), ManifestKind::IrsForms, &BTreeMap::new(), 6);

    let outcome = link_scenarios(dir.path(), SCENARIOS, true).unwrap();
    let furniture = outcome
        .manifest
        .donations
        .iter()
        .find(|d| d.donation_id == "007")
        .unwrap();
    let letter = furniture
        .linked_forms
        .iter()
        .find(|f| f.form_type == DocumentType::AcknowledgmentLetter)
        .unwrap();
    assert_eq!(letter.status, LinkStatus::Linked);
    assert!(letter
        .source_filename
        .as_deref()
        .unwrap()
        .starts_with("acknowledgment_letters/acknowledgment_inkind_"));
}

#[test]
fn test_section_a_boundary_scenarios() {
    let at = SCENARIOS
        .iter()
        .find(|s| s.asset_type == AssetType::Goods && s.amount == Money::from_dollars(5000))
        .unwrap();
    let above = SCENARIOS
        .iter()
        .find(|s| s.asset_type == AssetType::Goods && s.amount == Money::from_dollars(5001))
        .unwrap();

    let at_forms = at.requirement().forms;
    assert!(at_forms.contains(&DocumentType::Form8283SectionA));
    assert!(!at_forms.contains(&DocumentType::QualifiedAppraisal));

    let above_forms = above.requirement().forms;
    assert!(above_forms.contains(&DocumentType::Form8283SectionB));
    assert!(above_forms.contains(&DocumentType::QualifiedAppraisal));
}

#[test]
fn test_exhausted_pool_reports_missing_and_unmerged_primary() {
    let dir = tempdir().unwrap();
    let mut overrides = BTreeMap::new();
    overrides.insert("form_1098c".to_string(), TierCounts::new(2, 0, 0, 0));
    generate(dir.path(), ManifestKind::IrsForms, &overrides, 3);

    let vehicle = |id| DonationScenario {
        id,
        asset_type: AssetType::Vehicle,
        amount: Money::from_dollars(2500),
        description: "Used car",
    };
    let scenarios = [
        vehicle("001"),
        vehicle("002"),
        vehicle("003"),
        vehicle("004"),
        vehicle("005"),
        DonationScenario {
            id: "006",
            asset_type: AssetType::Cash,
            amount: Money::from_dollars(100),
            description: "Cash gift",
        },
    ];

    let outcome = link_scenarios(dir.path(), &scenarios, false).unwrap();
    let vehicle_statuses: Vec<LinkStatus> = outcome.manifest.donations[..5]
        .iter()
        .map(|d| d.linked_forms[0].status)
        .collect();
    let missing = vehicle_statuses
        .iter()
        .filter(|s| **s == LinkStatus::Missing)
        .count();
    assert_eq!(missing, 3);
    assert_eq!(&vehicle_statuses[..2], &[LinkStatus::Linked, LinkStatus::Linked]);

    let cash = &outcome.manifest.donations[5].linked_forms[0];
    assert_eq!(cash.form_type, DocumentType::Receipt);
    assert_eq!(cash.status, LinkStatus::NeedsLinking);

    let row = outcome.coverage.row(DocumentType::Form1098C).unwrap();
    assert_eq!((row.needed, row.available, row.linked), (5, 2, 2));
}

#[test]
fn test_linking_without_irs_manifest_fails() {
    let dir = tempdir().unwrap();
    generate(dir.path(), ManifestKind::Primary, &BTreeMap::new(), 4);
    assert!(link_scenarios(dir.path(), SCENARIOS, true).is_err());
}
