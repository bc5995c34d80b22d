//! Sweep generator for rate and term grids
//!
//! Expands one base input into every combination of:
//! - Annual effective rate
//! - Term in months
//! - Product variant

use serde::{Deserialize, Serialize};

use crate::assumptions::ProductVariant;
use crate::projection::ProjectionInput;

/// Parameters for generating a scenario grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepParams {
    /// Input every generated scenario starts from
    #[serde(default)]
    pub base: ProjectionInput,

    /// Annual effective rates to sweep
    #[serde(default = "default_annual_rates")]
    pub annual_rates: Vec<f64>,

    /// Terms in months to sweep
    #[serde(default = "default_terms")]
    pub terms: Vec<u32>,

    #[serde(default = "default_variants")]
    pub variants: Vec<ProductVariant>,

    /// Replace the base withholding rate with each product's typical rate
    #[serde(default)]
    pub product_withholding: bool,
}

fn default_annual_rates() -> Vec<f64> { vec![0.08, 0.09, 0.10, 0.11, 0.12] }
fn default_terms() -> Vec<u32> { vec![3, 6, 12, 24] }
fn default_variants() -> Vec<ProductVariant> {
    vec![ProductVariant::ContributionAccount, ProductVariant::TermDeposit]
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            base: ProjectionInput::default(),
            annual_rates: default_annual_rates(),
            terms: default_terms(),
            variants: default_variants(),
            product_withholding: false,
        }
    }
}

impl SweepParams {
    /// Number of scenarios [`SweepParams::generate`] produces
    pub fn len(&self) -> usize {
        self.variants.len() * self.terms.len() * self.annual_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every (variant, term, rate) combination, variant-major
    pub fn generate(&self) -> Vec<ProjectionInput> {
        let mut inputs = Vec::with_capacity(self.len());
        for &variant in &self.variants {
            let withholding_rate = if self.product_withholding {
                variant.default_withholding_rate()
            } else {
                self.base.withholding_rate
            };
            for &term_months in &self.terms {
                for &annual_effective_rate in &self.annual_rates {
                    inputs.push(ProjectionInput {
                        annual_effective_rate,
                        term_months,
                        withholding_rate,
                        product_variant: variant,
                        ..self.base
                    });
                }
            }
        }
        inputs
    }
}
