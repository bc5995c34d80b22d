//! Load scenario inputs from CSV
//!
//! Columns match the `ProjectionInput` field names. Missing columns take the
//! input defaults; every row is validated before it is returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::ScenarioError;
use crate::projection::ProjectionInput;

/// Load and validate scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectionInput>, ScenarioError> {
    let file = File::open(path.as_ref())?;
    let inputs = load_scenarios_from_reader(file)?;
    debug!("Loaded {} scenarios from {}", inputs.len(), path.as_ref().display());
    Ok(inputs)
}

/// Load and validate scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ProjectionInput>, ScenarioError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut inputs = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let input: ProjectionInput = record.deserialize(Some(&headers))?;
        if let Err(source) = input.validate() {
            // Line the record starts on; quoted fields may span several
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(ScenarioError::Invalid { line, source });
        }
        inputs.push(input);
    }
    Ok(inputs)
}
