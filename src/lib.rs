//! CPU scheduling simulation engine.
//!
//! Computes the exact CPU timeline of classical single-core scheduling
//! policies and the per-process metrics derived from it. Intended for
//! teaching: every run is deterministic, and ties are resolved by a
//! documented comparator instead of iteration order.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Schedule`, `ScheduleEntry`,
//!   `ProcessMetrics`, `SimulationResult`
//! - **`scheduler`**: FCFS, SJF, SRTF, Priority (both variants), Round Robin,
//!   and `ScheduleKpi`
//! - **`dispatching`**: Selection rules and the rule engine behind every
//!   "who runs next" decision
//! - **`validation`**: Input integrity checks
//! - **`config`**: Run parameters (quantum, time ceiling)
//! - **`input`**: Comma-separated form parsing
//! - **`gantt`**: Plain-text Gantt charts
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::config::SimulationConfig;
//! use cpu_schedule::gantt;
//! use cpu_schedule::input::parse_processes;
//! use cpu_schedule::scheduler::{simulate, Algorithm, ScheduleKpi};
//!
//! let procs = parse_processes("P1,P2,P3", "0,1,2", "5,3,8", None).unwrap();
//! let result = simulate(Algorithm::Fcfs, &procs, &SimulationConfig::default()).unwrap();
//!
//! assert_eq!(result.waiting_times(), vec![0, 4, 6]);
//! assert_eq!(ScheduleKpi::calculate(&result).makespan, 16);
//! println!("{}", gantt::render(&result.schedule));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod config;
pub mod dispatching;
pub mod error;
pub mod gantt;
pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{EngineError, Result};
