//! Process model.
//!
//! A process is the unit of work handed to the CPU scheduler: it becomes
//! ready at its arrival time and needs `burst_time` units of CPU to finish.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A process to be scheduled on a single CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process label. Need not be unique; duplicates are distinct instances.
    pub id: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important). Ignored by
    /// non-priority algorithms.
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

/// Builds process lists from parallel columns.
///
/// This mirrors how a form-based front end collects input: one list of
/// labels, one of arrival times, one of burst times and, for the priority
/// algorithms, one of priorities.
#[derive(Debug, Clone, Copy)]
pub struct ProcessTable;

impl ProcessTable {
    /// Zips parallel columns into processes.
    ///
    /// # Errors
    /// `EngineError::InvalidInput` with a `LengthMismatch` entry for every
    /// column whose length differs from `ids`.
    pub fn from_columns<S: AsRef<str>>(
        ids: &[S],
        arrivals: &[i64],
        bursts: &[i64],
        priorities: Option<&[i32]>,
    ) -> Result<Vec<Process>> {
        let n = ids.len();
        let mut errors = Vec::new();

        let mut check = |column: &str, len: usize| {
            if len != n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LengthMismatch,
                    format!("{column} has {len} values but {n} process ids were given"),
                ));
            }
        };
        check("arrival times", arrivals.len());
        check("burst times", bursts.len());
        if let Some(p) = priorities {
            check("priorities", p.len());
        }

        if !errors.is_empty() {
            return Err(EngineError::InvalidInput { errors });
        }

        Ok((0..n)
            .map(|i| {
                let process = Process::new(ids[i].as_ref().trim(), arrivals[i], bursts[i]);
                match priorities {
                    Some(p) => process.with_priority(p[i]),
                    None => process,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
    }

    #[test]
    fn test_from_columns() {
        let procs = ProcessTable::from_columns(&["P1", " P2"], &[0, 1], &[5, 3], Some(&[2, 1][..]))
            .unwrap();
        assert_eq!(procs.len(), 2);
        assert_eq!(procs[1], Process::new("P2", 1, 3).with_priority(1));
    }

    #[test]
    fn test_from_columns_without_priorities() {
        let procs = ProcessTable::from_columns(&["A"], &[4], &[2], None).unwrap();
        assert_eq!(procs[0].priority, 0);
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let err = ProcessTable::from_columns(&["P1", "P2"], &[0], &[5, 3, 1], Some(&[1, 2][..]))
            .unwrap_err();
        match err {
            EngineError::InvalidInput { errors } => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .all(|e| e.kind == ValidationErrorKind::LengthMismatch));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
