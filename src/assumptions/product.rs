//! Product variants and their withholding timing

use serde::{Deserialize, Serialize};

use super::tax::{DEFAULT_CONTRIBUTION_ACCOUNT_WITHHOLDING, DEFAULT_TERM_DEPOSIT_WITHHOLDING};
use crate::projection::{MaturityWithholding, PeriodicWithholding, WithholdingPolicy};

/// Days per month used for the term label of a deposit
const LABEL_DAYS_PER_MONTH: u64 = 30;

/// Savings product being projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductVariant {
    /// Open account accepting monthly deposits; tax withheld on every month's interest
    #[default]
    ContributionAccount,
    /// Fixed-term deposit; no deposits after opening, tax withheld once at maturity
    TermDeposit,
}

impl ProductVariant {
    /// Whether monthly contributions are credited for this product
    pub fn allows_contributions(&self) -> bool {
        match self {
            ProductVariant::ContributionAccount => true,
            ProductVariant::TermDeposit => false,
        }
    }

    /// Typical withholding rate applied to this product's interest
    pub fn default_withholding_rate(&self) -> f64 {
        match self {
            ProductVariant::ContributionAccount => DEFAULT_CONTRIBUTION_ACCOUNT_WITHHOLDING,
            ProductVariant::TermDeposit => DEFAULT_TERM_DEPOSIT_WITHHOLDING,
        }
    }

    /// Build a fresh withholding policy for one projection run
    pub fn withholding_policy(&self, withholding_rate: f64) -> Box<dyn WithholdingPolicy> {
        match self {
            ProductVariant::ContributionAccount => Box::new(PeriodicWithholding::new(withholding_rate)),
            ProductVariant::TermDeposit => Box::new(MaturityWithholding::new(withholding_rate)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductVariant::ContributionAccount => "Contribution account",
            ProductVariant::TermDeposit => "Term deposit",
        }
    }

    /// Human label for the term.
    ///
    /// Deposits are quoted in days (6 months = "180 days"). The label is cosmetic:
    /// interest is still compounded on whole months.
    pub fn term_label(&self, term_months: u32) -> String {
        match self {
            ProductVariant::ContributionAccount => format!("{} months", term_months),
            ProductVariant::TermDeposit => {
                format!("{} days", u64::from(term_months) * LABEL_DAYS_PER_MONTH)
            }
        }
    }
}

impl std::fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ProductVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "contribution_account" | "account" => Ok(ProductVariant::ContributionAccount),
            "term_deposit" | "deposit" => Ok(ProductVariant::TermDeposit),
            other => Err(format!("unknown product variant '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributions_allowed() {
        assert!(ProductVariant::ContributionAccount.allows_contributions());
        assert!(!ProductVariant::TermDeposit.allows_contributions());
    }

    #[test]
    fn test_term_labels() {
        assert_eq!(ProductVariant::TermDeposit.term_label(6), "180 days");
        assert_eq!(ProductVariant::TermDeposit.term_label(12), "360 days");
        assert_eq!(ProductVariant::ContributionAccount.term_label(12), "12 months");
    }

    #[test]
    fn test_term_label_large_terms() {
        assert_eq!(ProductVariant::TermDeposit.term_label(200_000_000), "6000000000 days");
        assert_eq!(
            ProductVariant::TermDeposit.term_label(u32::MAX),
            format!("{} days", u64::from(u32::MAX) * 30)
        );
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("term-deposit".parse::<ProductVariant>(), Ok(ProductVariant::TermDeposit));
        assert_eq!("Account".parse::<ProductVariant>(), Ok(ProductVariant::ContributionAccount));
        assert!("bond".parse::<ProductVariant>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ProductVariant::TermDeposit).unwrap();
        assert_eq!(json, "\"term_deposit\"");
    }
}
