//! Withholding tax policies
//!
//! Each product withholds tax on interest at a different time. A policy is created
//! fresh for every projection run and may carry state across months of that run.

use super::cashflows::ProjectionRow;

/// Tax outcome for one month of interest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Withholding {
    pub withheld_tax: f64,
    pub net_interest: f64,
    /// Amount added to the balance from interest (before contributions)
    pub balance_delta: f64,
}

/// Timing rule for withholding tax on interest
pub trait WithholdingPolicy: Send {
    /// Apply the policy to one month's gross interest.
    ///
    /// Called once per month in order; `is_final_period` is true on the last month.
    fn withhold(&mut self, gross_interest: f64, is_final_period: bool) -> Withholding;

    /// Total net gain over the whole run, once all rows exist
    fn total_net_gain(&self, rows: &[ProjectionRow], total_withheld_tax: f64) -> f64;

    fn name(&self) -> &'static str;
}

/// Tax withheld on every month's interest (contribution accounts)
#[derive(Debug, Clone)]
pub struct PeriodicWithholding {
    rate: f64,
}

impl PeriodicWithholding {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl WithholdingPolicy for PeriodicWithholding {
    fn withhold(&mut self, gross_interest: f64, _is_final_period: bool) -> Withholding {
        let withheld_tax = gross_interest * self.rate;
        let net_interest = gross_interest - withheld_tax;
        Withholding {
            withheld_tax,
            net_interest,
            balance_delta: net_interest,
        }
    }

    /// Sum of every month's net interest
    fn total_net_gain(&self, rows: &[ProjectionRow], _total_withheld_tax: f64) -> f64 {
        rows.iter().skip(1).map(|r| r.net_interest).sum()
    }

    fn name(&self) -> &'static str {
        "periodic"
    }
}

/// Tax withheld once at maturity on all accrued interest (term deposits).
///
/// The balance compounds gross until the last month, which carries the whole tax charge.
#[derive(Debug, Clone)]
pub struct MaturityWithholding {
    rate: f64,
    accumulated_gross_interest: f64,
}

impl MaturityWithholding {
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            accumulated_gross_interest: 0.0,
        }
    }

    pub fn accumulated_gross_interest(&self) -> f64 {
        self.accumulated_gross_interest
    }
}

impl WithholdingPolicy for MaturityWithholding {
    fn withhold(&mut self, gross_interest: f64, is_final_period: bool) -> Withholding {
        self.accumulated_gross_interest += gross_interest;

        if !is_final_period {
            return Withholding {
                withheld_tax: 0.0,
                net_interest: gross_interest,
                balance_delta: gross_interest,
            };
        }

        let withheld_tax = self.accumulated_gross_interest * self.rate;
        Withholding {
            withheld_tax,
            net_interest: gross_interest - withheld_tax,
            balance_delta: gross_interest - withheld_tax,
        }
    }

    /// Accrued gross interest less the maturity tax. Not a row sum: only the final
    /// row carries tax, and it covers the whole term.
    fn total_net_gain(&self, _rows: &[ProjectionRow], total_withheld_tax: f64) -> f64 {
        self.accumulated_gross_interest - total_withheld_tax
    }

    fn name(&self) -> &'static str {
        "maturity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_withholding() {
        let mut policy = PeriodicWithholding::new(0.07);
        let w = policy.withhold(1_000.0, false);
        assert!((w.withheld_tax - 70.0).abs() < 1e-10);
        assert!((w.net_interest - 930.0).abs() < 1e-10);
        assert_eq!(w.balance_delta, w.net_interest);

        // Final month is no different
        let last = policy.withhold(1_000.0, true);
        assert_eq!(last, w);
    }

    #[test]
    fn test_maturity_withholding_defers_tax() {
        let mut policy = MaturityWithholding::new(0.04);

        let first = policy.withhold(100.0, false);
        assert_eq!(first.withheld_tax, 0.0);
        assert_eq!(first.net_interest, 100.0);
        assert_eq!(first.balance_delta, 100.0);

        policy.withhold(110.0, false);
        let last = policy.withhold(120.0, true);

        // Tax on the whole 330 accrued, not only the last month's 120
        assert!((last.withheld_tax - 13.2).abs() < 1e-10);
        assert!((last.net_interest - (120.0 - 13.2)).abs() < 1e-10);
        assert_eq!(last.balance_delta, last.net_interest);
        assert!((policy.accumulated_gross_interest() - 330.0).abs() < 1e-10);
        assert!((policy.total_net_gain(&[], last.withheld_tax) - 316.8).abs() < 1e-10);
    }

    #[test]
    fn test_single_month_deposit() {
        let mut policy = MaturityWithholding::new(0.04);
        let only = policy.withhold(50.0, true);
        assert!((only.withheld_tax - 2.0).abs() < 1e-12);
    }
}
