//! Rule engine for process selection.
//!
//! Composes a primary rule with tie-breaking rules. Ties that survive
//! every rule are broken by input position, so selection never depends on
//! iteration order or sort stability.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier rules tie.
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when all previous rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts all process indices by rule evaluation (first = runs first).
    pub fn sort_indices(
        &self,
        processes: &[Process],
        context: &SelectionContext<'_>,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(processes, a, b, context));
        indices
    }

    /// Returns the best index among processes that have arrived by
    /// `context.current_time` and satisfy `eligible`.
    pub fn select_ready<F>(
        &self,
        processes: &[Process],
        context: &SelectionContext<'_>,
        eligible: F,
    ) -> Option<usize>
    where
        F: Fn(usize) -> bool,
    {
        (0..processes.len())
            .filter(|&i| processes[i].has_arrived(context.current_time) && eligible(i))
            .min_by(|&a, &b| self.compare(processes, a, b, context))
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(
        &self,
        process: &Process,
        index: usize,
        context: &SelectionContext<'_>,
    ) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, index, context))
            .collect()
    }

    fn compare(
        &self,
        processes: &[Process],
        a: usize,
        b: usize,
        context: &SelectionContext<'_>,
    ) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(&processes[a], a, context);
            let score_b = rule.evaluate(&processes[b], b, context);
            if score_a != score_b {
                return score_a.cmp(&score_b);
            }
        }

        // All rules tied → lower input index wins
        a.cmp(&b)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
