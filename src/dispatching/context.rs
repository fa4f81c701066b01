//! Simulation state passed to selection rules.

/// Runtime state visible to selection rules.
///
/// Holds the simulated clock and, for preemptive algorithms, the remaining
/// work of every process indexed by input position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionContext<'a> {
    /// Current simulation tick.
    pub current_time: i64,
    /// Remaining ticks per process (by input index). Empty = not tracked.
    pub remaining: &'a [i64],
}

impl<'a> SelectionContext<'a> {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            remaining: &[],
        }
    }

    /// Attaches remaining-work bookkeeping.
    pub fn with_remaining(mut self, remaining: &'a [i64]) -> Self {
        self.remaining = remaining;
        self
    }

    /// Remaining work for `index`, or `None` if not tracked.
    pub fn remaining_for(&self, index: usize) -> Option<i64> {
        self.remaining.get(index).copied()
    }
}
