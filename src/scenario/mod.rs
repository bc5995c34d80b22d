//! Scenario sets: batches of independent projections

pub mod loader;
pub mod generator;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::DomainError;
use crate::projection::{project, ProjectionInput, ProjectionResult, ProjectionSummary};

pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use generator::SweepParams;

/// Input paired with its projected summary
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub input: ProjectionInput,
    pub summary: ProjectionSummary,
}

/// Project every input in parallel. Results keep the order of `inputs`.
pub fn project_batch(inputs: &[ProjectionInput]) -> Vec<Result<ProjectionResult, DomainError>> {
    let results: Vec<_> = inputs.par_iter().map(project).collect();
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!("Projected {} scenarios ({} rejected)", results.len(), failed);
    results
}

/// Input rejected by validation, with its position in the batch
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRejection {
    pub index: usize,
    pub input: ProjectionInput,
    pub error: DomainError,
}

/// Summaries of a batch split into valid outcomes and rejections, both in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub outcomes: Vec<ScenarioOutcome>,
    pub rejected: Vec<ScenarioRejection>,
}

/// Project every input in parallel and summarize each one
pub fn summarize_batch(inputs: &[ProjectionInput]) -> BatchSummary {
    let mut batch = BatchSummary::default();
    for (index, (input, result)) in inputs.iter().zip(project_batch(inputs)).enumerate() {
        match result {
            Ok(result) => batch.outcomes.push(ScenarioOutcome {
                input: *input,
                summary: result.summary,
            }),
            Err(error) => {
                warn!("Scenario {} rejected: {}", index, error);
                batch.rejected.push(ScenarioRejection { index, input: *input, error });
            }
        }
    }
    batch
}
