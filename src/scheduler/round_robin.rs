//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived into a FIFO ready queue, in
//!    `(arrival_time, input_index)` order. Each process is admitted once.
//! 2. Pop the head and run it for `min(quantum, remaining)` ticks. A slice
//!    that directly follows a slice of the same process extends its entry.
//! 3. Admit processes that arrived during that slice.
//! 4. Only then, if the popped process has work left, append it to the
//!    back of the queue.
//! 5. If the queue is empty but work remains, idle until the next arrival.
//!
//! Newcomers therefore enter the queue ahead of the process whose slice
//! just ended.

use std::collections::VecDeque;

use super::timeline::{next_arrival, Timeline};
use super::Algorithm;
use crate::config::SimulationConfig;
use crate::dispatching::{rules, RuleEngine, SelectionContext};
use crate::error::Result;
use crate::models::{Process, SimulationResult};

/// Simulates Round Robin with `config.quantum` as the time slice.
///
/// # Errors
/// `InvalidInput` if the quantum is not positive.
///
/// # Example
///
/// ```
/// use cpu_schedule::config::SimulationConfig;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::round_robin;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let config = SimulationConfig::default().with_quantum(2);
/// let result = round_robin(&procs, &config).unwrap();
/// assert_eq!(result.completion_times(), vec![8, 7]);
/// ```
pub fn round_robin(processes: &[Process], config: &SimulationConfig) -> Result<SimulationResult> {
    let mut timeline = Timeline::start(Algorithm::RoundRobin, processes, config)?;
    let quantum = config.quantum;

    let arrival_order = RuleEngine::new()
        .with_rule(rules::ArrivalOrder)
        .sort_indices(processes, &SelectionContext::at_time(0));

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut queued = vec![false; processes.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut time = 0;

    admit(processes, &arrival_order, time, &mut queued, &mut queue);

    loop {
        let Some(i) = queue.pop_front() else {
            if remaining.iter().all(|&r| r == 0) {
                break;
            }
            time = next_arrival(processes, time, |i| !queued[i])
                .unwrap_or_else(|| time.saturating_add(1));
            timeline.idle_until(time)?;
            admit(processes, &arrival_order, time, &mut queued, &mut queue);
            continue;
        };

        let slice = quantum.min(remaining[i]);
        let end = time.saturating_add(slice);
        timeline.run(i, time, end)?;
        time = end;
        remaining[i] -= slice;

        admit(processes, &arrival_order, time, &mut queued, &mut queue);

        if remaining[i] > 0 {
            queue.push_back(i);
        } else {
            timeline.complete(i, time);
        }
    }

    Ok(timeline.finish())
}

/// Enqueues every not-yet-queued process that has arrived by `time`.
fn admit(
    processes: &[Process],
    arrival_order: &[usize],
    time: i64,
    queued: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    for &i in arrival_order {
        if processes[i].arrival_time > time {
            break;
        }
        if !queued[i] {
            queued[i] = true;
            queue.push_back(i);
        }
    }
}
