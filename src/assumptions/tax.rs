//! Tax rates applied to interest income and withdrawals

// ============================================================================
// Transactional Levy
// ============================================================================
// Flat levy charged on the balance moved out of the account at withdrawal
// (4 per thousand). Independent of interest earned.

/// Flat levy rate on the withdrawn balance (0.4%)
pub const FLAT_LEVY_RATE: f64 = 0.004;

// ============================================================================
// Default Withholding Rates
// ============================================================================

/// Default withholding on interest for contribution accounts (7%)
pub const DEFAULT_CONTRIBUTION_ACCOUNT_WITHHOLDING: f64 = 0.07;

/// Default withholding on interest for term deposits (4%)
pub const DEFAULT_TERM_DEPOSIT_WITHHOLDING: f64 = 0.04;

/// Levy owed when withdrawing `balance`, or zero when the levy does not apply
pub fn transaction_levy(balance: f64, apply: bool) -> f64 {
    if apply {
        balance * FLAT_LEVY_RATE
    } else {
        0.0
    }
}
