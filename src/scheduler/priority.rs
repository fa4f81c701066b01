//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower priority number = more important. The non-preemptive variant
//! decides only when the CPU becomes free; the preemptive variant decides
//! every tick, so a more important arrival interrupts the running process.
//!
//! # Tie-breaking
//! `(priority, arrival_time, input_index)` ascending, in both variants.

use super::run_loop::{run_per_tick, run_to_completion};
use super::Algorithm;
use crate::config::SimulationConfig;
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{Process, SimulationResult};

/// Rule engine shared by both priority variants.
pub fn priority_rules() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::HighestPriority)
        .with_tie_breaker(rules::ArrivalOrder)
}

/// Simulates non-preemptive priority scheduling.
pub fn priority_non_preemptive(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    run_to_completion(
        Algorithm::PriorityNonPreemptive,
        &priority_rules(),
        processes,
        config,
    )
}

/// Simulates preemptive priority scheduling.
pub fn priority_preemptive(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    run_per_tick(
        Algorithm::PriorityPreemptive,
        &priority_rules(),
        processes,
        config,
    )
}
