use log::debug;

use super::evaluators::{
    eval_connection_state, eval_cpu, eval_memory, eval_numeric_sensors, eval_overall_status,
    eval_storage, eval_temperature, Verdict, TEMP_ALL_GREEN,
};
use super::report::{CheckReport, PerfData};
use super::severity::Severity;
use super::snapshot::HostRuntimeSnapshot;

/// Which runtime aspect to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    Con,
    Health,
    Issues,
    Status,
    Temp,
    Version,
}

impl CheckMode {
    pub const NAMES: [&'static str; 6] = ["con", "health", "issues", "status", "temp", "version"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "con" => Some(CheckMode::Con),
            "health" => Some(CheckMode::Health),
            "issues" => Some(CheckMode::Issues),
            "status" => Some(CheckMode::Status),
            "temp" => Some(CheckMode::Temp),
            "version" => Some(CheckMode::Version),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Con => "con",
            CheckMode::Health => "health",
            CheckMode::Issues => "issues",
            CheckMode::Status => "status",
            CheckMode::Temp => "temp",
            CheckMode::Version => "version",
        }
    }
}

/// Terminal output of one evaluation.
///
/// `early_exit` records that the run short-circuited (maintenance mode,
/// missing host, an immediately fatal condition) instead of reducing the
/// full report.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub severity: Severity,
    pub message: String,
    pub early_exit: bool,
    pub perfdata: Vec<PerfData>,
}

impl EvaluationResult {
    fn terminal(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            early_exit: true,
            perfdata: Vec::new(),
        }
    }
}

/// Evaluate one host snapshot in the requested mode.
///
/// Pure over its inputs: no I/O, no retries, no state outliving the call.
/// `snapshot` is `None` when the host could not be resolved in inventory.
/// The maintenance check runs before any mode dispatch and wins over
/// everything else.
pub fn evaluate(
    snapshot: Option<&HostRuntimeSnapshot>,
    host_name: &str,
    mode: CheckMode,
    maintenance_default: Severity,
) -> EvaluationResult {
    let Some(host) = snapshot else {
        return EvaluationResult::terminal(Severity::Unknown, format!("host {} not found", host_name));
    };

    if host.in_maintenance_mode {
        return EvaluationResult::terminal(
            maintenance_default,
            format!("host {} is in maintenance mode, check skipped", host_name),
        );
    }

    debug!("evaluating host {} in mode {}", host_name, mode.as_str());

    match mode {
        CheckMode::Con => verdict_result(eval_connection_state(&host.connection_state)),
        CheckMode::Status => verdict_result(eval_overall_status(&host.overall_status)),
        CheckMode::Version => match &host.product_full_name {
            Some(version) => EvaluationResult::terminal(Severity::Ok, version.clone()),
            None => EvaluationResult::terminal(Severity::Unknown, "product version unavailable"),
        },
        CheckMode::Issues => EvaluationResult::terminal(
            Severity::Unknown,
            "check mode 'issues' is not implemented",
        ),
        CheckMode::Health => eval_health_mode(host),
        CheckMode::Temp => eval_temp_mode(host),
    }
}

fn eval_health_mode(host: &HostRuntimeSnapshot) -> EvaluationResult {
    let mut report = CheckReport::new();

    // Absent collections mean "no data", never an error.
    if let Some(health) = &host.health {
        eval_memory(&health.memory, &mut report);
        if let Verdict::Terminal { severity, message } = eval_cpu(&health.cpu, &mut report) {
            return EvaluationResult::terminal(severity, message);
        }
        eval_storage(&health.storage, &mut report);
        eval_numeric_sensors(&health.sensors, &mut report);
    }

    let allok = report.green_summary();
    finish(report, &allok)
}

fn eval_temp_mode(host: &HostRuntimeSnapshot) -> EvaluationResult {
    let mut report = CheckReport::new();

    if let Verdict::Terminal { severity, message } =
        eval_temperature(host.health.as_ref(), &mut report)
    {
        return EvaluationResult::terminal(severity, message);
    }

    finish(report, TEMP_ALL_GREEN)
}

fn finish(mut report: CheckReport, allok: &str) -> EvaluationResult {
    let perfdata = report.take_perfdata();
    let (severity, message) = report.reduce(allok);
    let message = if message.is_empty() {
        "everything ok".to_string()
    } else {
        message
    };
    EvaluationResult {
        severity,
        message,
        early_exit: false,
        perfdata,
    }
}

fn verdict_result(verdict: Verdict) -> EvaluationResult {
    match verdict {
        Verdict::Terminal { severity, message } => EvaluationResult::terminal(severity, message),
        // single-reading evaluators never accumulate
        Verdict::Accumulated => EvaluationResult::terminal(Severity::Ok, "everything ok"),
    }
}
