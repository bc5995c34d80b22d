//! Projection input parameters and their domain validation

use serde::{Deserialize, Serialize};

use crate::assumptions::ProductVariant;
use crate::error::DomainError;

/// Longest accepted term (100 years)
pub const MAX_TERM_MONTHS: u32 = 1_200;

/// Parameters for a single projection run.
///
/// Missing JSON fields fall back to the same starting values as [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting balance
    #[serde(default = "default_initial_capital")]
    pub initial_capital: f64,

    /// Annual effective rate as a fraction (0.11 = 11%)
    #[serde(default = "default_annual_rate")]
    pub annual_effective_rate: f64,

    /// Deposit added every month (ignored for term deposits)
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,

    /// Number of months to project, 1 to [`MAX_TERM_MONTHS`]
    #[serde(default = "default_term_months")]
    pub term_months: u32,

    /// Withholding tax on interest as a fraction in [0, 1)
    #[serde(default = "default_withholding_rate")]
    pub withholding_rate: f64,

    /// Charge the flat levy on the final balance
    #[serde(default)]
    pub apply_transaction_levy: bool,

    #[serde(default)]
    pub product_variant: ProductVariant,
}

fn default_initial_capital() -> f64 { 1_000_000.0 }
fn default_annual_rate() -> f64 { 0.11 }
fn default_monthly_contribution() -> f64 { 1_000_000.0 }
fn default_term_months() -> u32 { 12 }
fn default_withholding_rate() -> f64 { 0.07 }

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            initial_capital: 1_000_000.0,
            annual_effective_rate: 0.11,
            monthly_contribution: 1_000_000.0,
            term_months: 12,
            withholding_rate: 0.07,
            apply_transaction_levy: false,
            product_variant: ProductVariant::ContributionAccount,
        }
    }
}

impl ProjectionInput {
    /// Check numeric domain constraints.
    ///
    /// Non-finite values are rejected alongside out-of-range ones. The contribution is
    /// checked for every product even though term deposits never credit it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.initial_capital.is_finite() || self.initial_capital < 0.0 {
            return Err(DomainError::InvalidCapital(self.initial_capital));
        }

        let growth = 1.0 + self.annual_effective_rate;
        if !growth.is_finite() || growth <= 0.0 {
            return Err(DomainError::InvalidRate(format!(
                "annual effective rate {} must be greater than -1",
                self.annual_effective_rate
            )));
        }

        if !(0.0..1.0).contains(&self.withholding_rate) {
            return Err(DomainError::InvalidRate(format!(
                "withholding rate {} outside [0, 1)",
                self.withholding_rate
            )));
        }

        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(DomainError::InvalidTerm(self.term_months));
        }

        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(DomainError::InvalidContribution(self.monthly_contribution));
        }

        Ok(())
    }

    /// Contribution actually credited each month for this product
    pub fn effective_contribution(&self) -> f64 {
        if self.product_variant.allows_contributions() {
            self.monthly_contribution
        } else {
            0.0
        }
    }
}
