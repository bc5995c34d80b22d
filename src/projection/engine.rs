//! Month-by-month projection loop

use log::{debug, trace};

use super::cashflows::{ProjectionResult, ProjectionRow, ProjectionSummary};
use super::input::ProjectionInput;
use crate::assumptions::tax::transaction_levy;
use crate::error::DomainError;
use crate::rates::monthly_rate;

/// Projection engine for a single validated input.
///
/// Construction validates the input and converts the rate, so [`ProjectionEngine::run`]
/// cannot fail part-way through the months.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    input: ProjectionInput,
    monthly_rate: f64,
}

impl ProjectionEngine {
    pub fn new(input: ProjectionInput) -> Result<Self, DomainError> {
        input.validate()?;
        let monthly_rate = monthly_rate(input.annual_effective_rate)?;
        Ok(Self { input, monthly_rate })
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Run every month and aggregate the summary
    pub fn run(&self) -> ProjectionResult {
        let input = &self.input;
        let term = input.term_months;
        let contribution = input.effective_contribution();
        let mut policy = input.product_variant.withholding_policy(input.withholding_rate);

        debug!(
            "Projecting {} for {} months: monthly rate {:.8}, {} withholding at {}",
            input.product_variant,
            term,
            self.monthly_rate,
            policy.name(),
            input.withholding_rate
        );

        let mut rows = Vec::with_capacity(term as usize + 1);
        rows.push(ProjectionRow::initial(input.initial_capital));

        let mut balance = input.initial_capital;
        for period in 1..=term {
            let gross_interest = balance * self.monthly_rate;
            let w = policy.withhold(gross_interest, period == term);
            let closing_balance = balance + w.balance_delta + contribution;

            let row = ProjectionRow {
                period_index: period,
                opening_balance: balance,
                contribution,
                gross_interest,
                withheld_tax: w.withheld_tax,
                net_interest: w.net_interest,
                closing_balance,
            };
            trace!("{:?}", row);
            rows.push(row);

            balance = closing_balance;
        }

        let total_withheld_tax: f64 = rows.iter().map(|r| r.withheld_tax).sum();
        let total_net_gain = policy.total_net_gain(&rows, total_withheld_tax);
        let transaction_levy_cost = transaction_levy(balance, input.apply_transaction_levy);

        let summary = ProjectionSummary {
            final_balance: balance,
            total_net_gain,
            total_withheld_tax,
            transaction_levy_cost,
            net_withdrawal: balance - transaction_levy_cost,
            withholding_rate: input.withholding_rate,
            term_months: term,
            monthly_rate: self.monthly_rate,
            product_variant: input.product_variant,
        };
        debug!(
            "Final balance {:.2}, net gain {:.2}, withheld {:.2}, levy {:.2}",
            summary.final_balance,
            summary.total_net_gain,
            summary.total_withheld_tax,
            summary.transaction_levy_cost
        );

        ProjectionResult { rows, summary }
    }
}

/// Validate `input` and project it
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, DomainError> {
    Ok(ProjectionEngine::new(*input)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{ProductVariant, FLAT_LEVY_RATE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn scenario_a() -> ProjectionInput {
        ProjectionInput {
            initial_capital: 1_000_000.0,
            annual_effective_rate: 0.11,
            monthly_contribution: 500_000.0,
            term_months: 12,
            withholding_rate: 0.07,
            apply_transaction_levy: false,
            product_variant: ProductVariant::ContributionAccount,
        }
    }

    fn scenario_b() -> ProjectionInput {
        ProjectionInput {
            initial_capital: 1_000_000.0,
            annual_effective_rate: 0.105,
            monthly_contribution: 0.0,
            term_months: 6,
            withholding_rate: 0.04,
            apply_transaction_levy: true,
            product_variant: ProductVariant::TermDeposit,
        }
    }

    #[test]
    fn test_row_count_and_opening_row() {
        for input in [scenario_a(), scenario_b()] {
            let result = project(&input).unwrap();
            assert_eq!(result.rows.len(), input.term_months as usize + 1);

            let opening = &result.rows[0];
            assert_eq!(*opening, ProjectionRow::initial(input.initial_capital));
            for (i, row) in result.rows.iter().enumerate() {
                assert_eq!(row.period_index as usize, i);
            }
        }
    }

    #[test]
    fn test_scenario_a_first_month() {
        let result = project(&scenario_a()).unwrap();
        assert_abs_diff_eq!(result.summary.monthly_rate, 0.0087, epsilon = 1e-4);

        let row = &result.rows[1];
        assert_eq!(row.opening_balance, 1_000_000.0);
        assert_eq!(row.contribution, 500_000.0);
        assert_abs_diff_eq!(row.gross_interest, 8_734.59, epsilon = 0.01);
        assert_abs_diff_eq!(row.withheld_tax, 611.42, epsilon = 0.01);
        assert_abs_diff_eq!(row.net_interest, 8_123.17, epsilon = 0.01);
        assert_abs_diff_eq!(row.closing_balance, 1_508_123.17, epsilon = 0.01);
        assert_eq!(result.summary.transaction_levy_cost, 0.0);
    }

    #[test]
    fn test_scenario_b_term_deposit() {
        let input = scenario_b();
        let result = project(&input).unwrap();

        for row in &result.rows[1..6] {
            assert_eq!(row.withheld_tax, 0.0);
            assert_eq!(row.net_interest, row.gross_interest);
            assert_eq!(row.contribution, 0.0);
        }

        let accumulated: f64 = result.rows[1..].iter().map(|r| r.gross_interest).sum();
        let last = &result.rows[6];
        assert!(last.withheld_tax > 0.0);
        assert_relative_eq!(last.withheld_tax, 0.04 * accumulated, max_relative = 1e-12);
        assert_abs_diff_eq!(last.withheld_tax, 2_047.59, epsilon = 0.01);

        let summary = &result.summary;
        assert_abs_diff_eq!(summary.final_balance, 1_049_142.21, epsilon = 0.01);
        assert_eq!(summary.transaction_levy_cost, summary.final_balance * FLAT_LEVY_RATE);
        assert_eq!(summary.net_withdrawal, summary.final_balance - summary.transaction_levy_cost);
        assert_relative_eq!(
            summary.total_net_gain,
            accumulated - summary.total_withheld_tax,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_closing_balance_identity() {
        for input in [scenario_a(), scenario_b()] {
            let result = project(&input).unwrap();
            for pair in result.rows.windows(2) {
                let (prev, row) = (&pair[0], &pair[1]);
                assert_eq!(row.opening_balance, prev.closing_balance);
                let expected = row.opening_balance
                    + (row.gross_interest - row.withheld_tax)
                    + row.contribution;
                assert_relative_eq!(row.closing_balance, expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_monotonic_growth_contribution_account() {
        let input = ProjectionInput { term_months: 120, ..scenario_a() };
        let result = project(&input).unwrap();
        for pair in result.rows.windows(2) {
            assert!(pair[1].closing_balance >= pair[0].closing_balance);
        }
    }

    #[test]
    fn test_zero_rate_identity() {
        for variant in [ProductVariant::ContributionAccount, ProductVariant::TermDeposit] {
            let input = ProjectionInput {
                annual_effective_rate: 0.0,
                monthly_contribution: 0.0,
                product_variant: variant,
                ..scenario_a()
            };
            let result = project(&input).unwrap();
            for row in &result.rows {
                assert_eq!(row.closing_balance, input.initial_capital);
            }
            assert_eq!(result.summary.total_net_gain, 0.0);
            assert_eq!(result.summary.total_withheld_tax, 0.0);
        }
    }

    #[test]
    fn test_contribution_account_conservation() {
        let result = project(&scenario_a()).unwrap();
        let sum: f64 = result.rows.iter().skip(1).map(|r| r.net_interest).sum();
        assert_eq!(sum, result.summary.total_net_gain);

        let withheld: f64 = result.rows.iter().map(|r| r.withheld_tax).sum();
        assert_eq!(withheld, result.summary.total_withheld_tax);
    }

    #[test]
    fn test_term_deposit_ignores_contribution() {
        let input = ProjectionInput { monthly_contribution: 250_000.0, ..scenario_b() };
        let with = project(&input).unwrap();
        let without = project(&scenario_b()).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_levy_gating() {
        let input = ProjectionInput { apply_transaction_levy: false, ..scenario_b() };
        let summary = project(&input).unwrap().summary;
        assert_eq!(summary.transaction_levy_cost, 0.0);
        assert_eq!(summary.net_withdrawal, summary.final_balance);
        assert_eq!(summary.total_tax_burden(), summary.total_withheld_tax);
    }

    #[test]
    fn test_summary_echoes_input() {
        let summary = project(&scenario_b()).unwrap().summary;
        assert_eq!(summary.withholding_rate, 0.04);
        assert_eq!(summary.term_months, 6);
        assert_eq!(summary.product_variant, ProductVariant::TermDeposit);
    }

    #[test]
    fn test_idempotent() {
        let first = project(&scenario_a()).unwrap();
        let second = project(&scenario_a()).unwrap();
        assert_eq!(first, second);

        let first = project(&scenario_b()).unwrap();
        let second = project(&scenario_b()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_reusable() {
        let engine = ProjectionEngine::new(scenario_b()).unwrap();
        assert_eq!(engine.run(), engine.run());
    }

    #[test]
    fn test_validation_before_simulation() {
        let input = ProjectionInput { term_months: 0, ..scenario_a() };
        assert_eq!(project(&input), Err(DomainError::InvalidTerm(0)));

        let input = ProjectionInput { annual_effective_rate: -2.0, ..scenario_a() };
        assert!(matches!(ProjectionEngine::new(input), Err(DomainError::InvalidRate(_))));
    }

    #[test]
    fn test_single_month_term_deposit() {
        let input = ProjectionInput { term_months: 1, ..scenario_b() };
        let result = project(&input).unwrap();
        let row = &result.rows[1];
        assert_relative_eq!(row.withheld_tax, row.gross_interest * 0.04, max_relative = 1e-12);
    }
}
