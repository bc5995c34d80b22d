//! Savings projection engine
//!
//! Projects a capital balance month by month under compound interest, periodic
//! contributions and withholding tax, for contribution accounts (tax withheld every
//! month) and term deposits (tax withheld once at maturity).

pub mod error;
pub mod rates;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod report;

pub use error::DomainError;
pub use assumptions::{ProductVariant, FLAT_LEVY_RATE};
pub use projection::{
    project, ProjectionEngine, ProjectionInput, ProjectionResult, ProjectionRow, ProjectionSummary,
    MAX_TERM_MONTHS,
};
