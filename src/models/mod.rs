//! CPU scheduling domain models.
//!
//! Provides the input and output types shared by every scheduling
//! algorithm in this crate.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: arrival, burst, priority |
//! | `ScheduleEntry` | Output: one occupied CPU interval |
//! | `Schedule` | Output: ordered timeline of entries |
//! | `ProcessMetrics` | Output: completion, turnaround, waiting |
//! | `SimulationResult` | Output: schedule + metrics of one run |

mod metrics;
mod process;
mod schedule;

pub use metrics::{ProcessMetrics, SimulationResult};
pub use process::{Process, ProcessTable};
pub use schedule::{IdleGap, Schedule, ScheduleEntry};
