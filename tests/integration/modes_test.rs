use vhc::core::runtime_check::{
    evaluate, CheckMode, ComponentHealth, HealthSystemRuntime, HostRuntimeSnapshot, NumericSensor,
    Severity,
};

fn host(name: &str) -> HostRuntimeSnapshot {
    HostRuntimeSnapshot {
        name: name.to_string(),
        overall_status: "green".to_string(),
        connection_state: "connected".to_string(),
        ..Default::default()
    }
}

fn temperature_sensor(name: &str, key: &str, reading: i64, modifier: i32) -> NumericSensor {
    NumericSensor {
        name: name.to_string(),
        sensor_type: "temperature".to_string(),
        health_key: key.to_string(),
        health_label: key.to_string(),
        health_summary: "Sensor is operating under normal conditions".to_string(),
        current_reading: reading,
        unit_modifier: modifier,
        base_units: "degrees C".to_string(),
    }
}

#[test]
fn test_version_mode_reports_product_full_name() {
    let mut snapshot = host("esx01");
    snapshot.product_full_name = Some("VMware ESXi 8.0.2 build-23305546".to_string());

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Version, Severity::Unknown);
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "VMware ESXi 8.0.2 build-23305546");
}

#[test]
fn test_issues_mode_is_rejected() {
    let result = evaluate(Some(&host("esx01")), "esx01", CheckMode::Issues, Severity::Unknown);
    assert_eq!(result.severity, Severity::Unknown);
    assert_eq!(result.message, "check mode 'issues' is not implemented");
}

#[test]
fn test_temp_mode_collects_perfdata_and_messages() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        sensors: vec![
            temperature_sensor("CPU 1 Temp", "green", 420, -1),
            temperature_sensor("Inlet Temp", "yellow", 38, 0),
            NumericSensor {
                name: "PS 1 Voltage".to_string(),
                sensor_type: "voltage".to_string(),
                health_key: "green".to_string(),
                ..Default::default()
            },
        ],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Temp, Severity::Unknown);
    assert_eq!(result.severity, Severity::Warning);
    assert_eq!(result.message, "CPU 1 is green\nInlet is yellow");

    // only temperature sensors produce metrics, with the unit modifier applied
    assert_eq!(result.perfdata.len(), 2);
    assert_eq!(result.perfdata[0].label, "CPU 1");
    assert_eq!(result.perfdata[0].value, 42.0);
    assert_eq!(result.perfdata[1].label, "Inlet");
    assert_eq!(result.perfdata[1].value, 38.0);
}

#[test]
fn test_temp_mode_all_green_summary() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        sensors: vec![temperature_sensor("CPU 1 Temp", "green", 420, -1)],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Temp, Severity::Unknown);
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "All temperature sensors green");
    assert_eq!(result.perfdata.len(), 1);
}

#[test]
fn test_health_mode_counts_sensors_per_type() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        memory: vec![ComponentHealth {
            name: "DIMM 1".to_string(),
            status_key: "green".to_string(),
            summary: "ok".to_string(),
        }],
        sensors: vec![
            temperature_sensor("CPU 1 Temp", "green", 420, -1),
            temperature_sensor("Inlet Temp", "green", 38, 0),
            NumericSensor {
                name: "Fan 1".to_string(),
                sensor_type: "fan".to_string(),
                health_key: "green".to_string(),
                ..Default::default()
            },
        ],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(
        result.message,
        "All 4 health checks are GREEN: memory: 1, temperature: 2, fan: 1"
    );
}

#[test]
fn test_health_mode_skips_software_components_and_unreadable_sensors() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        sensors: vec![
            NumericSensor {
                name: "esx-svc".to_string(),
                sensor_type: "Software Components".to_string(),
                health_key: "red".to_string(),
                ..Default::default()
            },
            NumericSensor {
                name: "System Board 1 Riser".to_string(),
                sensor_type: "other".to_string(),
                health_key: "gray".to_string(),
                health_label: "unknown".to_string(),
                health_summary: "Cannot report on the current status of the physical element"
                    .to_string(),
                ..Default::default()
            },
        ],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "All 0 health checks are GREEN: ");
}

#[test]
fn test_health_mode_warning_beats_unknown_sensor() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        memory: vec![
            ComponentHealth {
                name: "DIMM 1".to_string(),
                status_key: "gray".to_string(),
                summary: "no reading".to_string(),
            },
            ComponentHealth {
                name: "DIMM 2".to_string(),
                status_key: "yellow".to_string(),
                summary: "correctable errors".to_string(),
            },
        ],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    // the unrecognized state is reported in the lines but never outranks
    // the recorded warning
    assert_eq!(result.severity, Severity::Warning);
    assert!(result.message.contains("UNKNOWN [Type: Memory] [Name: DIMM 1]"));
    assert!(result.message.contains("WARNING [Type: Memory] [Name: DIMM 2]"));
}
