//! Generation and linking services.
//!
//! These hold the batch logic behind the CLI commands. They report progress
//! through events and return plain values, leaving presentation to callers.

pub mod generator;
pub mod linker;
pub mod manifest;
pub mod scenarios;

pub use generator::{
    CategoryPlan, GenerateError, GenerateEvent, GenerationPlan, GenerationResult, Generator,
    TierCounts,
};
pub use linker::{link_scenarios, CoverageReport, CoverageRow, LinkError, LinkOutcome, Linker};
pub use manifest::{load_manifest, write_json, ManifestAssembler, ManifestError};
pub use scenarios::{required_forms, DonationScenario, SCENARIOS};
