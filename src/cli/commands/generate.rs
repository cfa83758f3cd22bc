//! Document generation commands.

use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::RngCore;

use crate::catalog::SampleCatalog;
use crate::config::Settings;
use crate::models::ManifestKind;
use crate::render::Typeface;
use crate::services::{GenerateEvent, GenerationPlan, Generator};

/// Generate one document set and write its manifest.
pub fn cmd_generate(settings: &Settings, kind: ManifestKind, rng: &mut dyn RngCore) -> anyhow::Result<()> {
    let catalog = SampleCatalog::builtin();
    let typeface = Typeface::load(&settings.font_regular, &settings.font_bold);
    if typeface.is_builtin() {
        println!(
            "{} Fonts not found, using the built-in bitmap face",
            style("!").yellow()
        );
    }

    let plan = GenerationPlan::for_kind(kind).with_overrides(&settings.plan);
    let generator = Generator::new(&catalog, &typeface, settings.dates, &settings.output_dir);

    println!(
        "{} Generating {} documents into {}",
        style("→").cyan(),
        plan.total(),
        settings.output_dir.display()
    );

    let progress = ProgressBar::new(plan.total() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap(),
    );

    let result = generator.run(&plan, rng, |event| match event {
        GenerateEvent::CategoryStarted { key, .. } => {
            progress.set_message(format!("Generating {}...", key));
        }
        GenerateEvent::DocumentWritten { .. } => progress.inc(1),
        GenerateEvent::CategoryFinished { key, count } => {
            progress.println(format!("  {} {} {}", style("✓").green(), count, key));
        }
    });
    progress.finish_and_clear();
    let result = result.with_context(|| format!("failed to generate {}", kind.filename()))?;

    println!(
        "{} Generated {} documents, manifest saved to {}",
        style("✓").green(),
        result.manifest.total_documents,
        result.manifest_path.display()
    );
    Ok(())
}
