use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical alert level, ordered from best to worst.
///
/// `Unknown` sits outside the OK < WARNING < CRITICAL magnitude order; the
/// reduction in [`super::report::CheckReport::reduce`] only reports it when no
/// warning or critical entry was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Monitoring-plugin exit code (OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3)
    pub fn exit_code(&self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }

    /// Parse a severity name as accepted by `--maintenance-state`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "OK" => Some(Severity::Ok),
            "WARNING" => Some(Severity::Warning),
            "CRITICAL" => Some(Severity::Critical),
            "UNKNOWN" => Some(Severity::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a vendor health-state color key to a severity.
///
/// Case-insensitive and total: any unrecognized key (including the empty
/// string) is `Unknown`. Used for the overall status color, per-component
/// health-state keys and numeric-sensor health-state keys alike.
pub fn health_state_severity(key: &str) -> Severity {
    match key.to_lowercase().as_str() {
        "green" => Severity::Ok,
        "yellow" => Severity::Warning,
        "red" => Severity::Critical,
        _ => Severity::Unknown,
    }
}

/// Map a host connection state to a severity.
///
/// Connection states are not colors and get their own table: anything other
/// than the two degraded states counts as connected.
pub fn connection_state_severity(state: &str) -> Severity {
    match state {
        "disconnected" => Severity::Warning,
        "notResponding" => Severity::Critical,
        _ => Severity::Ok,
    }
}
