//! Project a single savings scenario and print the monthly table
//!
//! Inputs come from an optional JSON file; individual flags override its fields.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::error;
use savings_projection::report::{render_summary, render_table, write_rows_csv};
use savings_projection::{project, ProductVariant, ProjectionInput};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with projection input fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial capital
    #[arg(long)]
    capital: Option<f64>,

    /// Annual effective rate as a fraction (0.11 = 11%)
    #[arg(long)]
    rate: Option<f64>,

    /// Monthly contribution (contribution accounts only)
    #[arg(long)]
    contribution: Option<f64>,

    /// Term in months
    #[arg(long)]
    term: Option<u32>,

    /// Withholding rate as a fraction. Defaults to the product's typical rate.
    #[arg(long)]
    withholding: Option<f64>,

    /// Charge the flat levy on the final balance
    #[arg(long)]
    levy: bool,

    /// contribution-account or term-deposit
    #[arg(long)]
    product: Option<ProductVariant>,

    /// Label months with dates counted from this day (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn build_input(cli: &Cli) -> Result<ProjectionInput> {
    let mut input = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => ProjectionInput::default(),
    };

    if let Some(product) = cli.product {
        input.product_variant = product;
        if cli.config.is_none() {
            input.withholding_rate = product.default_withholding_rate();
        }
    }
    if let Some(capital) = cli.capital {
        input.initial_capital = capital;
    }
    if let Some(rate) = cli.rate {
        input.annual_effective_rate = rate;
    }
    if let Some(contribution) = cli.contribution {
        input.monthly_contribution = contribution;
    }
    if let Some(term) = cli.term {
        input.term_months = term;
    }
    if let Some(withholding) = cli.withholding {
        input.withholding_rate = withholding;
    }
    if cli.levy {
        input.apply_transaction_levy = true;
    }
    Ok(input)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = build_input(&cli)?;
    let result = project(&input)
        .inspect_err(|e| error!("Rejected projection input: {}", e))
        .context("Invalid projection input")?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Table => {
            write!(out, "{}", render_summary(&result))?;
            writeln!(out)?;
            write!(out, "{}", render_table(&result, cli.start_date))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            write_rows_csv(&mut out, &result, cli.start_date)?;
        }
    }
    out.flush()?;

    Ok(())
}
