use log::debug;

use super::report::CheckReport;
use super::severity::{connection_state_severity, health_state_severity, Severity};
use super::snapshot::{ComponentHealth, HealthSystemRuntime, NumericSensor};

/// Outcome of one evaluator pass.
///
/// `Terminal` ends the whole evaluation immediately with the given result;
/// `Accumulated` means the evaluator wrote its findings into the shared
/// report and the run continues to the final reduction.
#[derive(Debug, PartialEq)]
pub(crate) enum Verdict {
    Terminal { severity: Severity, message: String },
    Accumulated,
}

/// CIM providers that stop answering report their components as unknown;
/// check_vmware_esx treated that as a dead hardware-monitoring agent.
pub(crate) const CIM_UNREACHABLE: &str = "No result from CIM server regarding health state. \
     CIM server is probably not running or not running correctly! \
     Please restart!";

pub(crate) const TEMP_UNAVAILABLE: &str = "Temperature status unavailable";
pub(crate) const TEMP_ALL_GREEN: &str = "All temperature sensors green";

/// Sensor types that never carry meaningful readings.
const IGNORED_SENSOR_TYPE: &str = "Software Components";

pub(crate) fn eval_memory(readings: &[ComponentHealth], report: &mut CheckReport) {
    for info in readings {
        let severity = health_state_severity(&info.status_key);
        report.add(
            severity,
            format!(
                "{} [Type: Memory] [Name: {}] [Summary: {}]",
                severity, info.name, info.summary
            ),
        );
        report.tally("memory");
    }
}

/// A CPU package whose health state cannot be resolved means the monitoring
/// agent itself is broken, which is worse than any single degraded reading.
pub(crate) fn eval_cpu(readings: &[ComponentHealth], report: &mut CheckReport) -> Verdict {
    for info in readings {
        let severity = health_state_severity(&info.status_key);
        if severity == Severity::Unknown {
            return Verdict::Terminal {
                severity: Severity::Critical,
                message: CIM_UNREACHABLE.to_string(),
            };
        }
        report.add(
            severity,
            format!(
                "{} [Type: CPU] [Name: {}] [Summary: {}]",
                severity, info.name, info.summary
            ),
        );
        report.tally("cpu");
    }
    Verdict::Accumulated
}

/// Storage elements frequently report a literal "unknown" status for slots
/// the controller does not populate; those are dropped before formatting.
/// The `[Type: Memory]` tag is historical and kept for downstream parsers.
pub(crate) fn eval_storage(readings: &[ComponentHealth], report: &mut CheckReport) {
    for info in readings.iter().filter(|r| r.status_key != "unknown") {
        let severity = health_state_severity(&info.status_key);
        report.add(
            severity,
            format!(
                "{} [Type: Memory] [Name: {}] [Summary: {}]",
                severity, info.name, info.summary
            ),
        );
        report.tally("storage");
    }
}

pub(crate) fn eval_numeric_sensors(sensors: &[NumericSensor], report: &mut CheckReport) {
    for info in sensors {
        if info.sensor_type == IGNORED_SENSOR_TYPE {
            continue;
        }
        // Sensors the platform recognizes but cannot actually read announce
        // themselves this way; they carry no data worth reporting.
        if info.health_label.contains("unknown") && info.health_summary.contains("Cannot report") {
            debug!("skipping sensor without valid data: {}", info.name);
            continue;
        }

        let severity = health_state_severity(&info.health_key);
        report.add(
            severity,
            format!(
                "{} [Type: {}] [Name: {}] [Label: {}] [Summary: {}]",
                severity, info.sensor_type, info.name, info.health_label, info.health_summary
            ),
        );
        report.tally(&info.sensor_type);
    }
}

pub(crate) fn eval_temperature(
    health: Option<&HealthSystemRuntime>,
    report: &mut CheckReport,
) -> Verdict {
    let Some(health) = health else {
        return Verdict::Terminal {
            severity: Severity::Unknown,
            message: TEMP_UNAVAILABLE.to_string(),
        };
    };

    for info in health.sensors.iter().filter(|s| s.sensor_type == "temperature") {
        let severity = health_state_severity(&info.health_key);
        let name = info.name.strip_suffix(" Temp").unwrap_or(&info.name);
        report.add_perfdata(name, info.scaled_reading());
        report.add(severity, format!("{} is {}", name, info.health_key));
    }
    Verdict::Accumulated
}

pub(crate) fn eval_overall_status(color: &str) -> Verdict {
    Verdict::Terminal {
        severity: health_state_severity(color),
        message: format!("overall status is {}", color.to_uppercase()),
    }
}

pub(crate) fn eval_connection_state(state: &str) -> Verdict {
    Verdict::Terminal {
        severity: connection_state_severity(state),
        message: format!("connection state is '{}'", state),
    }
}
