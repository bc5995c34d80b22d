//! Product and tax assumptions

pub mod product;
pub mod tax;

pub use product::ProductVariant;
pub use tax::{
    FLAT_LEVY_RATE, DEFAULT_CONTRIBUTION_ACCOUNT_WITHHOLDING, DEFAULT_TERM_DEPOSIT_WITHHOLDING,
};
