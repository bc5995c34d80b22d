//! Error types for the projection engine and its file surfaces

use thiserror::Error;

/// Numeric domain violation detected before a projection starts.
///
/// The engine never returns a partial result: any of these aborts the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid initial capital {0}: must be a non-negative amount")]
    InvalidCapital(f64),

    #[error("invalid rate: {0}")]
    InvalidRate(String),

    #[error("invalid term of {0} months: must be between 1 and {max} months", max = crate::projection::MAX_TERM_MONTHS)]
    InvalidTerm(u32),

    #[error("invalid monthly contribution {0}: must be a non-negative amount")]
    InvalidContribution(f64),
}

/// Failure loading scenario inputs from CSV
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scenario on line {line}: {source}")]
    Invalid {
        line: u64,
        #[source]
        source: DomainError,
    },
}

/// Failure writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidCapital(-5.0);
        assert!(err.to_string().contains("-5"));

        let err = DomainError::InvalidTerm(0);
        assert!(err.to_string().contains("0 months"));

        let err = DomainError::InvalidTerm(5_000);
        assert!(err.to_string().contains("between 1 and 1200 months"));

        let err = DomainError::InvalidRate("withholding rate 1 outside [0, 1)".to_string());
        assert!(err.to_string().contains("withholding rate"));
    }
}
