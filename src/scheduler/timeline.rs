//! Per-run simulation state shared by all algorithms.
//!
//! A `Timeline` owns the schedule under construction and the start and
//! completion ticks of every process. It is created per invocation and
//! consumed when the run ends, so no state survives between calls.

use tracing::{debug, warn};

use super::Algorithm;
use crate::config::SimulationConfig;
use crate::error::{EngineError, Result};
use crate::models::{Process, ProcessMetrics, Schedule, SimulationResult};
use crate::validation::validate_input;

pub(crate) struct Timeline<'a> {
    algorithm: Algorithm,
    processes: &'a [Process],
    max_time: i64,
    schedule: Schedule,
    first_start: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
}

impl<'a> Timeline<'a> {
    /// Validates the input and opens an empty timeline.
    pub(crate) fn start(
        algorithm: Algorithm,
        processes: &'a [Process],
        config: &SimulationConfig,
    ) -> Result<Self> {
        validate_input(processes, config, algorithm.uses_quantum())?;

        debug!(
            %algorithm,
            processes = processes.len(),
            quantum = config.quantum,
            max_time = config.max_time,
            "starting simulation"
        );

        Ok(Self {
            algorithm,
            processes,
            max_time: config.max_time,
            schedule: Schedule::new(),
            first_start: vec![None; processes.len()],
            completion: vec![None; processes.len()],
        })
    }

    /// Gives the CPU to `index` during `[start, end)`, merging with the
    /// previous entry when it is the same process and contiguous.
    pub(crate) fn run(&mut self, index: usize, start: i64, end: i64) -> Result<()> {
        // Work past the ceiling is cut at the ceiling
        let capped_end = end.min(self.max_time);
        if capped_end > start {
            let id = self.processes[index].id.as_str();
            self.schedule.record(id, index, start, capped_end);
            self.first_start[index].get_or_insert(start);
        }

        if end > self.max_time {
            return Err(self.bounds_exceeded());
        }
        Ok(())
    }

    /// Lets the CPU idle until `time`.
    pub(crate) fn idle_until(&self, time: i64) -> Result<()> {
        if time > self.max_time {
            return Err(self.bounds_exceeded());
        }
        Ok(())
    }

    /// Marks `index` as finished at `time`.
    pub(crate) fn complete(&mut self, index: usize, time: i64) {
        self.completion[index] = Some(time);
    }

    /// Closes the run.
    pub(crate) fn finish(self) -> SimulationResult {
        let result = self.snapshot(true);
        debug!(
            algorithm = %self.algorithm,
            entries = result.schedule.entry_count(),
            makespan = result.schedule.makespan(),
            "simulation finished"
        );
        result
    }

    fn snapshot(&self, complete: bool) -> SimulationResult {
        let metrics = self
            .processes
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match (self.first_start[i], self.completion[i]) {
                (Some(start), Some(done)) => Some(ProcessMetrics::derive(p, i, start, done)),
                _ => None,
            })
            .collect();

        SimulationResult {
            algorithm: self.algorithm,
            schedule: self.schedule.clone(),
            metrics,
            complete,
        }
    }

    fn bounds_exceeded(&self) -> EngineError {
        warn!(
            algorithm = %self.algorithm,
            limit = self.max_time,
            "simulation hit the time limit, returning partial schedule"
        );
        EngineError::SimulationBoundsExceeded {
            limit: self.max_time,
            partial: Box::new(self.snapshot(false)),
        }
    }
}

/// Earliest arrival strictly after `time` among processes accepted by `pending`.
pub(crate) fn next_arrival<F>(processes: &[Process], time: i64, pending: F) -> Option<i64>
where
    F: Fn(usize) -> bool,
{
    processes
        .iter()
        .enumerate()
        .filter(|&(i, p)| p.arrival_time > time && pending(i))
        .map(|(_, p)| p.arrival_time)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs() -> Vec<Process> {
        vec![Process::new("P1", 0, 3), Process::new("P2", 5, 2)]
    }

    #[test]
    fn test_run_and_finish() {
        let procs = procs();
        let mut t = Timeline::start(Algorithm::Fcfs, &procs, &SimulationConfig::default()).unwrap();
        t.run(0, 0, 3).unwrap();
        t.complete(0, 3);
        t.idle_until(5).unwrap();
        t.run(1, 5, 7).unwrap();
        t.complete(1, 7);

        let result = t.finish();
        assert!(result.complete);
        assert_eq!(result.schedule.entry_count(), 2);
        assert_eq!(result.completion_times(), vec![3, 7]);
        assert_eq!(result.waiting_times(), vec![0, 0]);
    }

    #[test]
    fn test_contiguous_runs_merge() {
        let procs = procs();
        let config = SimulationConfig::default();
        let mut t = Timeline::start(Algorithm::RoundRobin, &procs, &config).unwrap();
        t.run(0, 0, 2).unwrap();
        t.run(0, 2, 3).unwrap();
        t.idle_until(5).unwrap();
        t.run(1, 5, 6).unwrap();
        t.run(1, 6, 7).unwrap();

        let schedule = t.finish().schedule;
        assert_eq!(schedule.entry_count(), 2);
        assert_eq!(schedule.entries[0].end_time, 3);
    }

    #[test]
    fn test_saturated_end_hits_ceiling() {
        let procs = vec![Process::new("big", 5, i64::MAX)];
        let config = SimulationConfig::default();
        let mut t = Timeline::start(Algorithm::Fcfs, &procs, &config).unwrap();
        let err = t.run(0, 5, 5_i64.saturating_add(i64::MAX)).unwrap_err();
        assert_eq!(err.partial_result().unwrap().schedule.makespan(), config.max_time);
    }

    #[test]
    fn test_ceiling_truncates_and_fails() {
        let procs = procs();
        let config = SimulationConfig::default().with_max_time(2);
        let mut t = Timeline::start(Algorithm::Fcfs, &procs, &config).unwrap();

        let err = t.run(0, 0, 3).unwrap_err();
        let partial = err.partial_result().unwrap();
        assert!(!partial.complete);
        assert_eq!(partial.schedule.entries[0].end_time, 2);
        assert!(partial.metrics.is_empty());
    }

    #[test]
    fn test_idle_past_ceiling_fails() {
        let procs = procs();
        let config = SimulationConfig::default().with_max_time(4);
        let t = Timeline::start(Algorithm::Sjf, &procs, &config).unwrap();
        assert!(matches!(
            t.idle_until(5),
            Err(EngineError::SimulationBoundsExceeded { limit: 4, .. })
        ));
    }

    #[test]
    fn test_start_rejects_invalid_input() {
        let procs = vec![Process::new("P1", 0, 0)];
        let err = Timeline::start(Algorithm::Fcfs, &procs, &SimulationConfig::default())
            .err()
            .unwrap();
        assert_eq!(err.validation_errors().len(), 1);
    }

    #[test]
    fn test_next_arrival() {
        let procs = vec![
            Process::new("A", 0, 1),
            Process::new("B", 7, 1),
            Process::new("C", 4, 1),
        ];
        assert_eq!(next_arrival(&procs, 0, |_| true), Some(4));
        assert_eq!(next_arrival(&procs, 0, |i| i != 2), Some(7));
        assert_eq!(next_arrival(&procs, 7, |_| true), None);
    }
}
