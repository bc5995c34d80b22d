//! Rate conversion between annual effective and monthly compounding rates

use crate::error::DomainError;

/// Number of compounding periods per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an annual effective rate into the equivalent monthly rate.
///
/// `(1 + annual)^(1/12) - 1`. Compounding the result twelve times gives back the
/// annual rate, so the projection computes it once and applies it to every month.
pub fn monthly_rate(annual_effective_rate: f64) -> Result<f64, DomainError> {
    let base = 1.0 + annual_effective_rate;
    if !base.is_finite() || base <= 0.0 {
        return Err(DomainError::InvalidRate(format!(
            "annual effective rate {} must be greater than -1",
            annual_effective_rate
        )));
    }
    Ok(base.powf(1.0 / MONTHS_PER_YEAR) - 1.0)
}

/// Convert a monthly rate back to its annual effective equivalent
pub fn annual_rate(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powf(MONTHS_PER_YEAR) - 1.0
}
