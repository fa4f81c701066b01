//! CPU scheduling simulators and KPI evaluation.
//!
//! One pure function per algorithm. Each takes the process list and a
//! `SimulationConfig`, validates both, and returns the CPU timeline with
//! per-process metrics:
//!
//! | Function | Preemptive | Selection key |
//! |----------|-----------|---------------|
//! | [`fcfs`] | no | arrival |
//! | [`sjf`] | no | burst |
//! | [`srtf`] | yes, per tick | remaining work |
//! | [`priority_non_preemptive`] | no | priority |
//! | [`priority_preemptive`] | yes, per tick | priority |
//! | [`round_robin`] | yes, per quantum | FIFO queue |
//!
//! Ties always fall back to `(arrival_time, input_index)`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod run_loop;
mod shortest_job;
mod timeline;

pub use fcfs::fcfs;
pub use kpi::ScheduleKpi;
pub use priority::{priority_non_preemptive, priority_preemptive, priority_rules};
pub use round_robin::round_robin;
pub use shortest_job::{sjf, sjf_rules, srtf, srtf_rules};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::{EngineError, Result};
use crate::models::{Process, SimulationResult};

/// The six supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Priority, non-preemptive.
    PriorityNonPreemptive,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round Robin.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Short name (e.g., "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::PriorityNonPreemptive => "Priority",
            Algorithm::PriorityPreemptive => "Priority (Preemptive)",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Full name (e.g., "Shortest Remaining Time First").
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::PriorityNonPreemptive => "Priority Scheduling (Non-Preemptive)",
            Algorithm::PriorityPreemptive => "Priority Scheduling (Preemptive)",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::PriorityPreemptive | Algorithm::RoundRobin
        )
    }

    /// Whether the algorithm reads `Process::priority`.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive
        )
    }

    /// Whether the algorithm reads `SimulationConfig::quantum`.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace(&['_', ' '][..], "-");
        match key.as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "srtf" | "srt" => Ok(Algorithm::Srtf),
            "priority" | "priority-non-preemptive" => Ok(Algorithm::PriorityNonPreemptive),
            "priority-preemptive" => Ok(Algorithm::PriorityPreemptive),
            "rr" | "round-robin" => Ok(Algorithm::RoundRobin),
            _ => Err(EngineError::Parse {
                field: "algorithm".into(),
                token: s.to_string(),
            }),
        }
    }
}

/// Runs `algorithm` on `processes`.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    match algorithm {
        Algorithm::Fcfs => fcfs(processes, config),
        Algorithm::Sjf => sjf(processes, config),
        Algorithm::Srtf => srtf(processes, config),
        Algorithm::PriorityNonPreemptive => priority_non_preemptive(processes, config),
        Algorithm::PriorityPreemptive => priority_preemptive(processes, config),
        Algorithm::RoundRobin => round_robin(processes, config),
    }
}

/// Stateless front door to all algorithms with a fixed configuration.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Algorithm, SchedulerEngine};
///
/// let engine = SchedulerEngine::new().with_quantum(2);
/// let procs = vec![Process::new("P1", 0, 3)];
///
/// for algorithm in Algorithm::ALL {
///     let result = engine.simulate(algorithm, &procs).unwrap();
///     assert_eq!(result.schedule.makespan(), 3);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerEngine {
    config: SimulationConfig,
}

impl SchedulerEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Sets the simulated-time ceiling.
    pub fn with_max_time(mut self, max_time: i64) -> Self {
        self.config.max_time = max_time;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs `algorithm`.
    pub fn simulate(
        &self,
        algorithm: Algorithm,
        processes: &[Process],
    ) -> Result<SimulationResult> {
        simulate(algorithm, processes, &self.config)
    }

    /// Runs every algorithm on the same input.
    ///
    /// Results are returned in `Algorithm::ALL` order; a failing algorithm
    /// does not stop the others.
    pub fn compare(&self, processes: &[Process]) -> Vec<(Algorithm, Result<SimulationResult>)> {
        Algorithm::ALL
            .iter()
            .map(|&a| (a, self.simulate(a, processes)))
            .collect()
    }

    /// FCFS with this engine's configuration.
    pub fn fcfs(&self, processes: &[Process]) -> Result<SimulationResult> {
        fcfs(processes, &self.config)
    }

    /// SJF with this engine's configuration.
    pub fn sjf(&self, processes: &[Process]) -> Result<SimulationResult> {
        sjf(processes, &self.config)
    }

    /// SRTF with this engine's configuration.
    pub fn srtf(&self, processes: &[Process]) -> Result<SimulationResult> {
        srtf(processes, &self.config)
    }

    /// Non-preemptive priority with this engine's configuration.
    pub fn priority_non_preemptive(&self, processes: &[Process]) -> Result<SimulationResult> {
        priority_non_preemptive(processes, &self.config)
    }

    /// Preemptive priority with this engine's configuration.
    pub fn priority_preemptive(&self, processes: &[Process]) -> Result<SimulationResult> {
        priority_preemptive(processes, &self.config)
    }

    /// Round Robin with an explicit quantum.
    pub fn round_robin(&self, processes: &[Process], quantum: i64) -> Result<SimulationResult> {
        round_robin(processes, &self.config.with_quantum(quantum))
    }
}
