//! Scenario linking command.

use anyhow::Context;
use console::style;

use crate::config::Settings;
use crate::models::{LinkStatus, ManifestKind};
use crate::services::{link_scenarios, CoverageReport, SCENARIOS};

/// Link generated documents into the donation scenarios.
pub fn cmd_link(settings: &Settings, merge_primary: bool) -> anyhow::Result<()> {
    let root = &settings.output_dir;
    if !merge_primary {
        println!(
            "{} Not merging {}; primary forms will need linking",
            style("!").yellow(),
            ManifestKind::Primary.filename()
        );
    }

    let outcome =
        link_scenarios(root, SCENARIOS, merge_primary).context("failed to link donation scenarios")?;

    for donation in &outcome.manifest.donations {
        println!(
            "\n{} {} ({}, {})",
            style(format!("Donation {}", donation.donation_id)).bold(),
            donation.description,
            donation.asset_type.as_str(),
            donation.amount
        );
        println!("  {}", style(&donation.irs_requirements.rule).dim());
        for form in &donation.linked_forms {
            let mark = match form.status {
                LinkStatus::Linked => style("✓").green(),
                LinkStatus::NeedsLinking => style("○").yellow(),
                LinkStatus::Missing => style("✗").red(),
            };
            match form.filename {
                Some(ref filename) => println!("  {} {} → {}", mark, form.form_type, filename),
                None => println!("  {} {} ({})", mark, form.form_type, form.status.as_str()),
            }
        }
    }

    print_coverage(&outcome.coverage);

    println!(
        "\n{} Linked {} donations, manifest saved to {}",
        style("✓").green(),
        outcome.manifest.total_donations,
        outcome.manifest_path.display()
    );
    Ok(())
}

fn print_coverage(coverage: &CoverageReport) {
    println!("\n{}", style("Coverage").bold());
    println!(
        "  {:<24} {:>8} {:>10} {:>8}",
        "form type", "needed", "available", "linked"
    );
    for row in &coverage.rows {
        let line = format!(
            "  {:<24} {:>8} {:>10} {:>8}",
            row.form_type.as_str(),
            row.needed,
            row.available,
            row.linked
        );
        if row.is_covered() {
            println!("{}", line);
        } else {
            println!("{}", style(line).yellow());
        }
    }
    if !coverage.is_complete() {
        println!(
            "{} Some requirements are unmet; see the coverage table above",
            style("!").yellow()
        );
    }
}
