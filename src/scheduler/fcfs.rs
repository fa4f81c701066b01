//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by `(arrival_time, input_index)`.
//! 2. Walk the order with a single clock starting at t=0.
//! 3. If the next process has not arrived yet, the CPU idles until it does.
//! 4. The process runs its whole burst; no preemption.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use super::timeline::Timeline;
use super::Algorithm;
use crate::config::SimulationConfig;
use crate::dispatching::{rules, RuleEngine, SelectionContext};
use crate::error::Result;
use crate::models::{Process, SimulationResult};

/// Simulates FCFS scheduling.
///
/// # Example
///
/// ```
/// use cpu_schedule::config::SimulationConfig;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::fcfs;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = fcfs(&procs, &SimulationConfig::default()).unwrap();
/// assert_eq!(result.timeline(), vec![("P1", 0, 5), ("P2", 5, 8)]);
/// ```
pub fn fcfs(processes: &[Process], config: &SimulationConfig) -> Result<SimulationResult> {
    let mut timeline = Timeline::start(Algorithm::Fcfs, processes, config)?;

    let order = RuleEngine::new()
        .with_rule(rules::ArrivalOrder)
        .sort_indices(processes, &SelectionContext::at_time(0));

    let mut time = 0;
    for i in order {
        let process = &processes[i];
        if time < process.arrival_time {
            time = process.arrival_time;
            timeline.idle_until(time)?;
        }
        let end = time.saturating_add(process.burst_time);
        timeline.run(i, time, end)?;
        timeline.complete(i, end);
        time = end;
    }

    Ok(timeline.finish())
}
