//! Engine error type.

use thiserror::Error;

use crate::models::SimulationResult;
use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors reported by the scheduling engine.
///
/// Every error is deterministic: calling again with the same input
/// reproduces it.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// Input failed validation. Nothing was simulated.
    #[error("invalid input: {}", join_messages(.errors))]
    InvalidInput { errors: Vec<ValidationError> },

    /// A textual list could not be parsed into integers.
    #[error("could not parse '{token}' in {field} as an integer")]
    Parse { field: String, token: String },

    /// The simulated clock passed the configured ceiling.
    ///
    /// `partial` holds everything computed up to the ceiling and has
    /// `complete == false`.
    #[error("simulation exceeded the time limit of {limit} ticks")]
    SimulationBoundsExceeded {
        limit: i64,
        partial: Box<SimulationResult>,
    },
}

impl EngineError {
    /// Validation problems, if this is an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            EngineError::InvalidInput { errors } => errors,
            _ => &[],
        }
    }

    /// Partial result, if the run hit the time ceiling.
    pub fn partial_result(&self) -> Option<&SimulationResult> {
        match self {
            EngineError::SimulationBoundsExceeded { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

impl From<Vec<ValidationError>> for EngineError {
    fn from(errors: Vec<ValidationError>) -> Self {
        EngineError::InvalidInput { errors }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
