//! Per-process metrics and the simulation result container.

use serde::{Deserialize, Serialize};

use super::{Process, Schedule};
use crate::scheduler::Algorithm;

/// Timing metrics of one process after a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process label.
    pub process_id: String,
    /// Position in the input list.
    pub process_index: usize,
    /// Arrival tick (copied from input).
    pub arrival_time: i64,
    /// Burst length (copied from input).
    pub burst_time: i64,
    /// Tick at which the process first got the CPU.
    pub first_start: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `first_start - arrival_time`.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Derives metrics from a process and the ticks it started and finished at.
    pub fn derive(
        process: &Process,
        process_index: usize,
        first_start: i64,
        completion_time: i64,
    ) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process_id: process.id.clone(),
            process_index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            first_start,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_start - process.arrival_time,
        }
    }
}

/// Output of one simulation: the CPU timeline plus metrics for every process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// CPU timeline.
    pub schedule: Schedule,
    /// Metrics in input order. Processes that never finished (only possible
    /// in a partial result) are absent.
    pub metrics: Vec<ProcessMetrics>,
    /// `false` when the run was cut short by the simulated-time ceiling.
    pub complete: bool,
}

impl SimulationResult {
    /// Finds metrics by process label (first match for duplicate labels).
    pub fn metrics_for(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.process_id == process_id)
    }

    /// Finds metrics by input position.
    pub fn metrics_at(&self, process_index: usize) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.process_index == process_index)
    }

    /// Completion ticks in input order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.metrics.iter().map(|m| m.completion_time).collect()
    }

    /// Waiting ticks in input order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.metrics.iter().map(|m| m.waiting_time).collect()
    }

    /// Turnaround ticks in input order.
    pub fn turnaround_times(&self) -> Vec<i64> {
        self.metrics.iter().map(|m| m.turnaround_time).collect()
    }

    /// Timeline as `(process_id, start, end)` triples, ready for charting.
    pub fn timeline(&self) -> Vec<(&str, i64, i64)> {
        self.schedule
            .entries
            .iter()
            .map(|e| (e.process_id.as_str(), e.start_time, e.end_time))
            .collect()
    }
}
