//! Run projections for a rate/term/product grid or a CSV of scenarios
//!
//! Outputs one summary line per scenario for comparison across products

use anyhow::{bail, Context, Result};
use clap::Parser;
use savings_projection::report::{format_money, write_sweep_csv};
use savings_projection::scenario::{load_scenarios, summarize_batch, ScenarioOutcome, SweepParams};
use savings_projection::ProductVariant;
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with sweep parameters (defaults apply when omitted)
    #[arg(long, conflicts_with = "scenarios")]
    params: Option<PathBuf>,

    /// CSV file of individual scenarios instead of a generated grid
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Fail instead of writing output when any scenario is rejected
    #[arg(long)]
    strict: bool,

    /// Output CSV path
    #[arg(long, default_value = "sweep_output.csv")]
    output: PathBuf,
}

fn best_for(outcomes: &[ScenarioOutcome], variant: ProductVariant) -> Option<&ScenarioOutcome> {
    outcomes
        .iter()
        .filter(|o| o.input.product_variant == variant)
        .max_by(|a, b| a.summary.net_withdrawal.total_cmp(&b.summary.net_withdrawal))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let inputs = match (&cli.scenarios, &cli.params) {
        (Some(path), _) => {
            println!("Loading scenarios from {}...", path.display());
            load_scenarios(path).with_context(|| format!("Failed to load {}", path.display()))?
        }
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let params: SweepParams = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            params.generate()
        }
        (None, None) => SweepParams::default().generate(),
    };
    println!("Prepared {} scenarios in {:?}", inputs.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let batch = summarize_batch(&inputs);
    println!(
        "Projections complete in {:?} ({} rejected)",
        proj_start.elapsed(),
        batch.rejected.len()
    );
    for rejection in &batch.rejected {
        eprintln!(
            "  scenario {} ({}, {} months, rate {}): {}",
            rejection.index,
            rejection.input.product_variant,
            rejection.input.term_months,
            rejection.input.annual_effective_rate,
            rejection.error
        );
    }
    if cli.strict && !batch.rejected.is_empty() {
        bail!("{} scenarios rejected", batch.rejected.len());
    }
    let outcomes = batch.outcomes;

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    write_sweep_csv(file, &outcomes)?;
    println!("Output written to {}", cli.output.display());

    println!("\nBest net withdrawal by product:");
    for variant in [ProductVariant::ContributionAccount, ProductVariant::TermDeposit] {
        if let Some(best) = best_for(&outcomes, variant) {
            println!(
                "  {:<22} {} at {:.2}% over {} months",
                variant.display_name(),
                format_money(best.summary.net_withdrawal),
                best.input.annual_effective_rate * 100.0,
                best.summary.term_months,
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
