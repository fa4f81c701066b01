//! Selection rules and rule engine for picking the next process.
//!
//! Every decision point in the simulators ("which ready process gets the
//! CPU now?") goes through a `RuleEngine`. An engine evaluates a primary
//! rule, falls back to tie-breaking rules, and finally to input position,
//! so the comparator is always total and deterministic:
//!
//! ```text
//! (primary key, tie-breaker keys..., input_index)   ascending
//! ```
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine, SelectionContext};
//! use cpu_schedule::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalOrder);
//!
//! let procs = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
//! let ctx = SelectionContext::at_time(0);
//! assert_eq!(engine.select_ready(&procs, &ctx, |_| true), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SelectionContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (runs first).
pub type RuleScore = i64;

/// A rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = runs first.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores the process at `index` given the current simulation state.
    fn evaluate(&self, process: &Process, index: usize, context: &SelectionContext<'_>)
        -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
