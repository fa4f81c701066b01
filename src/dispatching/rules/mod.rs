//! Built-in selection rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ArrivalOrder` | arrival tick | FCFS, tie-breaking everywhere |
//! | `ShortestBurst` | burst length | SJF |
//! | `ShortestRemaining` | remaining ticks | SRTF |
//! | `HighestPriority` | priority number | Priority (both variants) |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::Process;

/// First come, first served.
///
/// Earlier arrival runs first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(
        &self,
        process: &Process,
        _index: usize,
        _context: &SelectionContext<'_>,
    ) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

/// Shortest Job First.
///
/// Scores by total burst length, ignoring progress already made.
/// Minimizes mean waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(
        &self,
        process: &Process,
        _index: usize,
        _context: &SelectionContext<'_>,
    ) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Uses `context.remaining` if tracked, falls back to the burst length.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(
        &self,
        process: &Process,
        index: usize,
        context: &SelectionContext<'_>,
    ) -> RuleScore {
        context
            .remaining_for(index)
            .unwrap_or(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority number (lower number = more important).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(
        &self,
        process: &Process,
        _index: usize,
        _context: &SelectionContext<'_>,
    ) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order() {
        let ctx = SelectionContext::at_time(10);
        let early = Process::new("early", 1, 5);
        let late = Process::new("late", 4, 5);
        assert!(ArrivalOrder.evaluate(&early, 0, &ctx) < ArrivalOrder.evaluate(&late, 1, &ctx));
    }

    #[test]
    fn test_shortest_burst() {
        let ctx = SelectionContext::at_time(0);
        let short = Process::new("short", 0, 2);
        let long = Process::new("long", 0, 8);
        assert!(ShortestBurst.evaluate(&short, 0, &ctx) < ShortestBurst.evaluate(&long, 1, &ctx));
    }

    #[test]
    fn test_shortest_remaining_with_context() {
        // "long" has almost finished
        let remaining = [1, 2];
        let ctx = SelectionContext::at_time(0).with_remaining(&remaining);
        let long = Process::new("long", 0, 8);
        let short = Process::new("short", 0, 2);
        assert_eq!(ShortestRemaining.evaluate(&long, 0, &ctx), 1);
        assert!(
            ShortestRemaining.evaluate(&long, 0, &ctx) < ShortestRemaining.evaluate(&short, 1, &ctx)
        );
    }

    #[test]
    fn test_shortest_remaining_fallback() {
        let ctx = SelectionContext::at_time(0);
        let p = Process::new("P", 0, 6);
        assert_eq!(ShortestRemaining.evaluate(&p, 0, &ctx), 6);
    }

    #[test]
    fn test_highest_priority() {
        let ctx = SelectionContext::at_time(0);
        let urgent = Process::new("urgent", 0, 5).with_priority(1);
        let relaxed = Process::new("relaxed", 0, 5).with_priority(4);
        assert!(
            HighestPriority.evaluate(&urgent, 0, &ctx) < HighestPriority.evaluate(&relaxed, 1, &ctx)
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(ArrivalOrder.name(), "FCFS");
    }
}
