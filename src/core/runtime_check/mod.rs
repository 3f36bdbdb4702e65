//! Host runtime health evaluation.
//!
//! This module contains the business logic for reducing one host runtime
//! snapshot into a single severity, message and exit code: the severity
//! scale, the status normalizers, the message accumulator and the
//! per-category evaluators driven by the mode runner.

mod evaluators;
pub mod report;
pub mod runner;
pub mod severity;
pub mod snapshot;

pub use report::{render_perfdata, CheckReport, PerfData};
pub use runner::{evaluate, CheckMode, EvaluationResult};
pub use severity::{connection_state_severity, health_state_severity, Severity};
pub use snapshot::{ComponentHealth, HealthSystemRuntime, HostRuntimeSnapshot, NumericSensor};
