//! Simulation run parameters.

use serde::{Deserialize, Serialize};

/// Default Round Robin time slice (ticks).
pub const DEFAULT_QUANTUM: i64 = 2;

/// Default simulated-time ceiling (ticks).
pub const DEFAULT_MAX_TIME: i64 = 1_000_000;

/// Parameters shared by all scheduling algorithms.
///
/// Only Round Robin reads `quantum`; every algorithm honours `max_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time slice (ticks). Must be positive.
    pub quantum: i64,
    /// The run fails with `SimulationBoundsExceeded` once the simulated
    /// clock would pass this tick.
    pub max_time: i64,
}

impl SimulationConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the simulated-time ceiling.
    pub fn with_max_time(mut self, max_time: i64) -> Self {
        self.max_time = max_time;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            max_time: DEFAULT_MAX_TIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::new();
        assert_eq!(c.quantum, DEFAULT_QUANTUM);
        assert_eq!(c.max_time, DEFAULT_MAX_TIME);
    }

    #[test]
    fn test_builder() {
        let c = SimulationConfig::new().with_quantum(4).with_max_time(100);
        assert_eq!(c.quantum, 4);
        assert_eq!(c.max_time, 100);
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SimulationConfig = serde_json::from_str(r#"{"quantum": 3}"#).unwrap();
        assert_eq!(c.quantum, 3);
        assert_eq!(c.max_time, DEFAULT_MAX_TIME);
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = SimulationConfig::new().with_quantum(5);
        let json = serde_json::to_string(&c).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
