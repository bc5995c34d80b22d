//! Plain-text rendering of projection results
//!
//! Dates are optional: when a start date is given each month is labelled with the
//! calendar date it closes on.

pub mod export;

use chrono::{Months, NaiveDate};
use std::fmt::Write;

use crate::projection::ProjectionResult;

pub use export::{write_rows_csv, write_sweep_csv};

/// Rate as a whole percentage label ("7%")
pub fn percent_label(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// Calendar date a period closes on, counting whole months from `start`
pub fn period_date(start: NaiveDate, period_index: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(period_index))
}

/// Money with thousands separators and no decimals ("$ 1,508,123")
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

/// Monthly table, opening state excluded
pub fn render_table(result: &ProjectionResult, start: Option<NaiveDate>) -> String {
    let withheld_header = format!("Withheld ({})", percent_label(result.summary.withholding_rate));
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>5} {:>11} {:>16} {:>14} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Date", "Opening", "Contribution", "Gross int.", withheld_header, "Net int.", "Closing"
    );
    for row in result.monthly_rows() {
        let date = start
            .and_then(|s| period_date(s, row.period_index))
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let contribution = if row.contribution > 0.0 {
            format_money(row.contribution)
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:>5} {:>11} {:>16} {:>14} {:>14} {:>14} {:>14} {:>16}",
            row.period_index,
            date,
            format_money(row.opening_balance),
            contribution,
            format_money(row.gross_interest),
            format_money(row.withheld_tax),
            format_money(row.net_interest),
            format_money(row.closing_balance),
        );
    }
    out
}

/// Summary block restating the withholding rate, and the levy when charged
pub fn render_summary(result: &ProjectionResult) -> String {
    let s = &result.summary;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", s.product_variant, s.product_variant.term_label(s.term_months));
    let _ = writeln!(out, "  Monthly rate:      {:.6}%", s.monthly_rate * 100.0);
    let _ = writeln!(out, "  Final balance:     {}", format_money(s.final_balance));
    let _ = writeln!(out, "  Net gain:          {}", format_money(s.total_net_gain));

    let mut tax_label = format!("Withholding ({})", percent_label(s.withholding_rate));
    if s.transaction_levy_cost > 0.0 {
        let _ = write!(tax_label, " + levy ({})", format_money(s.transaction_levy_cost));
    }
    let _ = writeln!(out, "  Taxes:             {} [{}]", format_money(s.total_tax_burden()), tax_label);
    let _ = writeln!(out, "  Net on withdrawal: {}", format_money(s.net_withdrawal));
    out
}
