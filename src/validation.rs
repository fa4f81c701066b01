//! Input validation for scheduling runs.
//!
//! Checks the process list and run parameters before any simulation
//! starts. Detects:
//! - Empty process labels
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quanta
//! - Negative simulated-time ceilings
//!
//! All problems are collected and reported together. Duplicate labels are
//! not an error: each process is a distinct instance identified by its
//! input position.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::config::SimulationConfig;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process label is empty or whitespace.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Parallel input columns have different lengths.
    LengthMismatch,
    /// The simulated-time ceiling is negative.
    NegativeTimeLimit,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks, per process:
/// 1. Label is not blank
/// 2. `arrival_time >= 0`
/// 3. `burst_time > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process #{i} has an empty id"),
            ));
        } else if !seen.insert(p.id.as_str()) {
            warn!(
                process = %p.id,
                index = i,
                "duplicate process id, treating as a distinct instance"
            );
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates run parameters.
///
/// `check_quantum` is set only for Round Robin, the one algorithm that
/// reads the quantum.
pub fn validate_config(config: &SimulationConfig, check_quantum: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if check_quantum && config.quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {}", config.quantum),
        ));
    }

    if config.max_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeTimeLimit,
            format!("Time limit must not be negative, got {}", config.max_time),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates processes and parameters together.
pub fn validate_input(
    processes: &[Process],
    config: &SimulationConfig,
    check_quantum: bool,
) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Err(more) = validate_config(config, check_quantum) {
        errors.extend(more);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_input(&sample_processes(), &SimulationConfig::default(), true).is_ok());
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_empty_id() {
        let procs = vec![Process::new("  ", 0, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("P1", -1, 4)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_zero_burst_rejected() {
        let procs = vec![Process::new("P1", 0, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_negative_burst_rejected() {
        let procs = vec![Process::new("P1", 0, -3)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_duplicate_ids_tolerated() {
        let procs = vec![Process::new("P1", 0, 1), Process::new("P1", 0, 2)];
        assert!(validate_processes(&procs).is_ok());
    }

    #[test]
    fn test_quantum_checked_only_when_requested() {
        let config = SimulationConfig::default().with_quantum(0);
        assert!(validate_config(&config, false).is_ok());

        let errors = validate_config(&config, true).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_negative_time_limit() {
        let config = SimulationConfig::default().with_max_time(-1);
        let errors = validate_config(&config, false).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeTimeLimit);
    }

    #[test]
    fn test_multiple_errors() {
        // Empty id + negative arrival + zero burst + bad quantum
        let procs = vec![Process::new("", -2, 0)];
        let config = SimulationConfig::default().with_quantum(-1);

        let errors = validate_input(&procs, &config, true).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
