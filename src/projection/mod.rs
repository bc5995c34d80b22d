//! Projection engine for contribution accounts and term deposits

mod input;
mod withholding;
mod engine;
mod cashflows;

pub use input::{ProjectionInput, MAX_TERM_MONTHS};
pub use withholding::{Withholding, WithholdingPolicy, PeriodicWithholding, MaturityWithholding};
pub use engine::{project, ProjectionEngine};
pub use cashflows::{ProjectionRow, ProjectionSummary, ProjectionResult};
