//! CSV export of projection rows and sweep summaries

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::{percent_label, period_date};
use crate::assumptions::ProductVariant;
use crate::error::ReportError;
use crate::projection::ProjectionResult;
use crate::scenario::ScenarioOutcome;

/// Write the monthly rows as CSV.
///
/// The withheld column header restates the withholding rate. A `Date` column is
/// added when `start` is given.
pub fn write_rows_csv<W: Write>(
    writer: W,
    result: &ProjectionResult,
    start: Option<NaiveDate>,
) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let withheld_header = format!("Withheld ({})", percent_label(result.summary.withholding_rate));
    let mut header = vec!["Month"];
    if start.is_some() {
        header.push("Date");
    }
    header.extend([
        "Opening balance",
        "Contribution",
        "Gross interest",
        withheld_header.as_str(),
        "Net interest",
        "Closing balance",
    ]);
    wtr.write_record(&header)?;

    for row in result.monthly_rows() {
        let mut record = vec![row.period_index.to_string()];
        if let Some(start) = start {
            record.push(
                period_date(start, row.period_index)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            );
        }
        record.extend(
            [
                row.opening_balance,
                row.contribution,
                row.gross_interest,
                row.withheld_tax,
                row.net_interest,
                row.closing_balance,
            ]
            .iter()
            .map(|v| format!("{:.2}", v)),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct SweepRecord {
    product_variant: ProductVariant,
    term_months: u32,
    annual_effective_rate: f64,
    monthly_rate: f64,
    withholding_rate: f64,
    final_balance: f64,
    total_net_gain: f64,
    total_withheld_tax: f64,
    transaction_levy_cost: f64,
    net_withdrawal: f64,
}

impl From<&ScenarioOutcome> for SweepRecord {
    fn from(outcome: &ScenarioOutcome) -> Self {
        let s = &outcome.summary;
        Self {
            product_variant: s.product_variant,
            term_months: s.term_months,
            annual_effective_rate: outcome.input.annual_effective_rate,
            monthly_rate: s.monthly_rate,
            withholding_rate: s.withholding_rate,
            final_balance: s.final_balance,
            total_net_gain: s.total_net_gain,
            total_withheld_tax: s.total_withheld_tax,
            transaction_levy_cost: s.transaction_levy_cost,
            net_withdrawal: s.net_withdrawal,
        }
    }
}

/// Write one summary line per scenario
pub fn write_sweep_csv<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        wtr.serialize(SweepRecord::from(outcome))?;
    }
    wtr.flush()?;
    Ok(())
}
