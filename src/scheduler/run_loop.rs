//! Generic selection loops.
//!
//! SJF and non-preemptive Priority share `run_to_completion`; SRTF and
//! preemptive Priority share `run_per_tick`. The algorithms differ only in
//! the `RuleEngine` they pass in.

use tracing::trace;

use super::timeline::{next_arrival, Timeline};
use super::Algorithm;
use crate::config::SimulationConfig;
use crate::dispatching::{RuleEngine, SelectionContext};
use crate::error::Result;
use crate::models::{Process, SimulationResult};

/// Non-preemptive selection.
///
/// Whenever the CPU is free, the engine picks among arrived, unfinished
/// processes and the winner runs its whole burst. With nothing ready, the
/// clock skips to the next arrival.
pub(crate) fn run_to_completion(
    algorithm: Algorithm,
    engine: &RuleEngine,
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    let mut timeline = Timeline::start(algorithm, processes, config)?;
    let mut done = vec![false; processes.len()];
    let mut finished = 0;
    let mut time = 0;

    while finished < processes.len() {
        let ctx = SelectionContext::at_time(time);
        match engine.select_ready(processes, &ctx, |i| !done[i]) {
            Some(i) => {
                let end = time.saturating_add(processes[i].burst_time);
                timeline.run(i, time, end)?;
                timeline.complete(i, end);
                done[i] = true;
                finished += 1;
                time = end;
            }
            None => {
                time = next_arrival(processes, time, |i| !done[i])
                    .unwrap_or_else(|| time.saturating_add(1));
                timeline.idle_until(time)?;
            }
        }
    }

    Ok(timeline.finish())
}

/// Preemptive selection, one tick at a time.
///
/// Each tick the engine picks among arrived processes with work left; the
/// winner runs for one tick. Consecutive ticks of the same process are
/// merged into one schedule entry.
pub(crate) fn run_per_tick(
    algorithm: Algorithm,
    engine: &RuleEngine,
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    let mut timeline = Timeline::start(algorithm, processes, config)?;
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut previous: Option<usize> = None;
    let mut finished = 0;
    let mut time = 0;

    while finished < processes.len() {
        let ctx = SelectionContext::at_time(time).with_remaining(&remaining);
        let selected = engine.select_ready(processes, &ctx, |i| remaining[i] > 0);

        let Some(i) = selected else {
            time = next_arrival(processes, time, |i| remaining[i] > 0)
                .unwrap_or_else(|| time.saturating_add(1));
            timeline.idle_until(time)?;
            continue;
        };

        if let Some(prev) = previous {
            if prev != i && remaining[prev] > 0 {
                trace!(
                    time,
                    preempted = %processes[prev].id,
                    by = %processes[i].id,
                    "preemption"
                );
            }
        }

        timeline.run(i, time, time + 1)?;
        remaining[i] -= 1;
        time += 1;
        if remaining[i] == 0 {
            timeline.complete(i, time);
            finished += 1;
        }
        previous = Some(i);
    }

    Ok(timeline.finish())
}
