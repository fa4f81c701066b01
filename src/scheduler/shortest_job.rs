//! Shortest Job First and Shortest Remaining Time First.
//!
//! Both pick the ready process with the least work. SJF looks at the whole
//! burst and never interrupts a running process; SRTF looks at remaining
//! work every tick and preempts as soon as a shorter one is ready.
//!
//! # Tie-breaking
//! `(work, arrival_time, input_index)` ascending.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::run_loop::{run_per_tick, run_to_completion};
use super::Algorithm;
use crate::config::SimulationConfig;
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{Process, SimulationResult};

/// Rule engine used by SJF.
pub fn sjf_rules() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::ShortestBurst)
        .with_tie_breaker(rules::ArrivalOrder)
}

/// Rule engine used by SRTF.
pub fn srtf_rules() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::ShortestRemaining)
        .with_tie_breaker(rules::ArrivalOrder)
}

/// Simulates non-preemptive Shortest Job First.
pub fn sjf(processes: &[Process], config: &SimulationConfig) -> Result<SimulationResult> {
    run_to_completion(Algorithm::Sjf, &sjf_rules(), processes, config)
}

/// Simulates Shortest Remaining Time First (preemptive SJF).
///
/// # Example
///
/// ```
/// use cpu_schedule::config::SimulationConfig;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::srtf;
///
/// let procs = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
/// let result = srtf(&procs, &SimulationConfig::default()).unwrap();
/// assert_eq!(result.timeline(), vec![("P1", 0, 1), ("P2", 1, 5), ("P1", 5, 12)]);
/// ```
pub fn srtf(processes: &[Process], config: &SimulationConfig) -> Result<SimulationResult> {
    run_per_tick(Algorithm::Srtf, &srtf_rules(), processes, config)
}
