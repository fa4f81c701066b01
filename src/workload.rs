//! Seeded random workload generation.
//!
//! Produces reproducible process sets for demos, classroom exercises, and
//! invariant checks. The same `(spec, seed)` pair always yields the same
//! processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a random workload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: i64,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
    /// Probability that a process is "short" (burst drawn from the lower
    /// quarter of the range), giving the mixed workloads where SJF and
    /// SRTF differ visibly from FCFS.
    pub p_short: f64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            max_burst: 10,
            max_priority: 5,
            p_short: 0.3,
        }
    }
}

impl WorkloadSpec {
    /// Sets the process count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }
}

/// Generates a process set labelled `P1..Pn`.
///
/// Out-of-range spec values are clamped: arrivals and priorities to at
/// least 0, bursts to at least 1, so the output always passes validation.
pub fn random_processes(spec: &WorkloadSpec, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_arrival = spec.max_arrival.max(0);
    let max_burst = spec.max_burst.max(1);
    let short_cap = (max_burst / 4).max(1);
    let max_priority = spec.max_priority.max(0);
    let p_short = spec.p_short.clamp(0.0, 1.0);

    (1..=spec.count)
        .map(|n| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = if rng.random_bool(p_short) {
                rng.random_range(1..=short_cap)
            } else {
                rng.random_range(1..=max_burst)
            };
            let priority = rng.random_range(0..=max_priority);
            Process::new(format!("P{n}"), arrival, burst).with_priority(priority)
        })
        .collect()
}
