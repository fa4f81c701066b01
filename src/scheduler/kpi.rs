//! Schedule quality metrics (KPIs).
//!
//! Summarises one simulation run in the figures usually tabulated next to
//! a Gantt chart.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion tick |
//! | Avg Waiting | Mean of `turnaround - burst` |
//! | Avg Turnaround | Mean of `completion - arrival` |
//! | Avg Response | Mean of `first start - arrival` |
//! | CPU Utilization | Busy ticks / `[first arrival, makespan]` |
//! | Throughput | Completed processes per tick over the same window |
//! | Context Switches | Adjacent entries that change process |
//! | Idle Time | Ticks inside the window with no process running |

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Summary performance indicators of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion tick.
    pub makespan: i64,
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Mean response time (ticks).
    pub avg_response_time: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: i64,
    /// Fraction of the observed window the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of process changes between adjacent entries.
    pub context_switches: usize,
    /// Idle ticks between the first arrival and the makespan.
    pub idle_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation result.
    ///
    /// The observed window starts at the earliest arrival among finished
    /// processes and ends at the makespan.
    pub fn calculate(result: &SimulationResult) -> Self {
        let metrics = &result.metrics;
        let schedule = &result.schedule;
        let makespan = schedule.makespan();

        let mean = |values: Vec<i64>| -> f64 {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<i64>() as f64 / values.len() as f64
            }
        };

        let avg_waiting_time = mean(metrics.iter().map(|m| m.waiting_time).collect());
        let avg_turnaround_time = mean(metrics.iter().map(|m| m.turnaround_time).collect());
        let avg_response_time = mean(metrics.iter().map(|m| m.response_time).collect());
        let max_waiting_time = metrics.iter().map(|m| m.waiting_time).max().unwrap_or(0);

        let window_start = metrics
            .iter()
            .map(|m| m.arrival_time)
            .min()
            .or_else(|| schedule.start_time())
            .unwrap_or(0);
        let window = makespan - window_start;
        let busy = schedule.busy_time();

        let (cpu_utilization, throughput) = if window > 0 {
            (
                busy as f64 / window as f64,
                metrics.len() as f64 / window as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            avg_waiting_time,
            avg_turnaround_time,
            avg_response_time,
            max_waiting_time,
            cpu_utilization,
            throughput,
            context_switches: schedule.context_switches(),
            idle_time: (window - busy).max(0),
        }
    }
}
