//! Projection output rows and summary

use serde::{Deserialize, Serialize};

use crate::assumptions::ProductVariant;

/// One month of the projection. Period 0 is the opening state with no flows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub period_index: u32,
    pub opening_balance: f64,
    pub contribution: f64,
    pub gross_interest: f64,
    pub withheld_tax: f64,
    pub net_interest: f64,
    pub closing_balance: f64,
}

impl ProjectionRow {
    /// Opening row: only the closing balance is set
    pub fn initial(initial_capital: f64) -> Self {
        Self {
            closing_balance: initial_capital,
            ..Default::default()
        }
    }
}

/// Totals derived once the last row is known
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_balance: f64,
    pub total_net_gain: f64,
    pub total_withheld_tax: f64,
    pub transaction_levy_cost: f64,
    /// Final balance after the levy
    pub net_withdrawal: f64,
    pub withholding_rate: f64,
    pub term_months: u32,
    pub monthly_rate: f64,
    pub product_variant: ProductVariant,
}

impl ProjectionSummary {
    /// Withholding plus levy, everything the saver gives up to taxes
    pub fn total_tax_burden(&self) -> f64 {
        self.total_withheld_tax + self.transaction_levy_cost
    }
}

/// Rows for periods `0..=term_months` paired with their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub rows: Vec<ProjectionRow>,
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Rows for months 1..=term, without the opening state
    pub fn monthly_rows(&self) -> &[ProjectionRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Closing balance series, period 0 first (what a growth chart plots)
    pub fn balance_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.closing_balance).collect()
    }
}
