//! Schedule (solution) model.
//!
//! A schedule is the CPU timeline produced by one simulation run: an
//! ordered list of occupied intervals. Idle time is implicit, appearing as
//! gaps between consecutive entries.

use serde::{Deserialize, Serialize};

/// A CPU timeline.
///
/// Entries are kept in chronological order and never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Occupied intervals, ordered by start time.
    pub entries: Vec<ScheduleEntry>,
}

/// One contiguous interval during which a single process holds the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Label of the running process.
    pub process_id: String,
    /// Position of the process in the input list (disambiguates duplicate labels).
    pub process_index: usize,
    /// Start tick (inclusive).
    pub start_time: i64,
    /// End tick (exclusive).
    pub end_time: i64,
}

/// An interval during which no process was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// Start tick (inclusive).
    pub start_time: i64,
    /// End tick (exclusive).
    pub end_time: i64,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        process_id: impl Into<String>,
        process_index: usize,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            process_id: process_id.into(),
            process_index,
            start_time,
            end_time,
        }
    }

    /// Duration (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl IdleGap {
    /// Duration (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Records that `process_index` ran during `[start, end)`.
    ///
    /// If the last entry belongs to the same process and ends exactly at
    /// `start`, it is extended instead of opening a new entry.
    pub fn record(&mut self, process_id: &str, process_index: usize, start: i64, end: i64) {
        if let Some(last) = self.entries.last_mut() {
            if last.process_index == process_index && last.end_time == start {
                last.end_time = end;
                return;
            }
        }
        self.add_entry(ScheduleEntry::new(process_id, process_index, start, end));
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Earliest start tick, or `None` for an empty schedule.
    pub fn start_time(&self) -> Option<i64> {
        self.entries.iter().map(|e| e.start_time).min()
    }

    /// Makespan: latest end tick across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end_time).max().unwrap_or(0)
    }

    /// Total ticks during which the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(ScheduleEntry::duration).sum()
    }

    /// Returns all entries for the process at `process_index`.
    pub fn entries_for_process(&self, process_index: usize) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_index == process_index)
            .collect()
    }

    /// Returns all entries whose label equals `process_id`.
    pub fn entries_for_id(&self, process_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Total CPU ticks given to the process at `process_index`.
    pub fn service_time(&self, process_index: usize) -> i64 {
        self.entries_for_process(process_index)
            .iter()
            .map(|e| e.duration())
            .sum()
    }

    /// Tick at which the process first got the CPU.
    pub fn first_start(&self, process_index: usize) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.process_index == process_index)
            .map(|e| e.start_time)
    }

    /// Completion tick for a process (latest end of its entries).
    pub fn completion_time(&self, process_index: usize) -> Option<i64> {
        self.entries_for_process(process_index)
            .iter()
            .map(|e| e.end_time)
            .max()
    }

    /// Gaps between consecutive entries.
    ///
    /// Time before the first entry is not reported; callers that care about
    /// idle time before the first arrival compare against `start_time()`.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        self.entries
            .windows(2)
            .filter(|w| w[1].start_time > w[0].end_time)
            .map(|w| IdleGap {
                start_time: w[0].end_time,
                end_time: w[1].start_time,
            })
            .collect()
    }

    /// Number of times the CPU switched from one process to another.
    ///
    /// A switch across an idle gap still counts.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].process_index != w[1].process_index)
            .count()
    }

    /// Whether entries are chronological and pairwise disjoint.
    pub fn is_well_formed(&self) -> bool {
        self.entries.iter().all(|e| e.end_time > e.start_time)
            && self
                .entries
                .windows(2)
                .all(|w| w[0].end_time <= w[1].start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_entry(ScheduleEntry::new("P1", 0, 0, 3));
        s.add_entry(ScheduleEntry::new("P2", 1, 3, 5));
        s.add_entry(ScheduleEntry::new("P1", 0, 7, 9));
        s
    }

    #[test]
    fn test_schedule_makespan() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 9);
        assert_eq!(s.start_time(), Some(0));
    }

    #[test]
    fn test_busy_and_service_time() {
        let s = sample_schedule();
        assert_eq!(s.busy_time(), 7);
        assert_eq!(s.service_time(0), 5);
        assert_eq!(s.service_time(1), 2);
        assert_eq!(s.service_time(9), 0);
    }

    #[test]
    fn test_entries_for_process() {
        let s = sample_schedule();
        assert_eq!(s.entries_for_process(0).len(), 2);
        assert_eq!(s.entries_for_id("P2").len(), 1);
        assert_eq!(s.first_start(0), Some(0));
        assert_eq!(s.completion_time(0), Some(9));
        assert_eq!(s.completion_time(5), None);
    }

    #[test]
    fn test_idle_gaps() {
        let s = sample_schedule();
        let gaps = s.idle_gaps();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0], IdleGap { start_time: 5, end_time: 7 });
        assert_eq!(gaps[0].duration(), 2);
    }

    #[test]
    fn test_record_coalesces_contiguous_units() {
        let mut s = Schedule::new();
        s.record("P1", 0, 0, 1);
        s.record("P1", 0, 1, 2);
        s.record("P2", 1, 2, 3);
        s.record("P1", 0, 3, 4);
        // Same process but not contiguous → new entry
        s.record("P1", 0, 6, 7);

        assert_eq!(s.entry_count(), 4);
        assert_eq!(s.entries[0], ScheduleEntry::new("P1", 0, 0, 2));
        assert_eq!(s.entries[3], ScheduleEntry::new("P1", 0, 6, 7));
    }

    #[test]
    fn test_record_keeps_duplicate_labels_apart() {
        let mut s = Schedule::new();
        s.record("P", 0, 0, 1);
        s.record("P", 1, 1, 2);
        assert_eq!(s.entry_count(), 2);
    }

    #[test]
    fn test_context_switches() {
        let s = sample_schedule();
        assert_eq!(s.context_switches(), 2);
        assert_eq!(Schedule::new().context_switches(), 0);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample_schedule().is_well_formed());

        let mut overlapping = Schedule::new();
        overlapping.add_entry(ScheduleEntry::new("P1", 0, 0, 3));
        overlapping.add_entry(ScheduleEntry::new("P2", 1, 2, 4));
        assert!(!overlapping.is_well_formed());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.start_time(), None);
        assert!(s.idle_gaps().is_empty());
    }
}
