use vhc::core::runtime_check::{
    evaluate, CheckMode, ComponentHealth, HealthSystemRuntime, HostRuntimeSnapshot, Severity,
};

fn host(name: &str) -> HostRuntimeSnapshot {
    HostRuntimeSnapshot {
        name: name.to_string(),
        overall_status: "green".to_string(),
        connection_state: "connected".to_string(),
        ..Default::default()
    }
}

fn component(name: &str, status_key: &str, summary: &str) -> ComponentHealth {
    ComponentHealth {
        name: name.to_string(),
        status_key: status_key.to_string(),
        summary: summary.to_string(),
    }
}

#[test]
fn test_connection_mode_disconnected_host() {
    let mut snapshot = host("esx01");
    snapshot.connection_state = "disconnected".to_string();

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Con, Severity::Unknown);
    assert_eq!(result.severity, Severity::Warning);
    assert_eq!(result.message, "connection state is 'disconnected'");
    assert_eq!(result.severity.exit_code(), 1);
}

#[test]
fn test_connection_mode_responding_host_is_ok() {
    let result = evaluate(Some(&host("esx01")), "esx01", CheckMode::Con, Severity::Unknown);
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "connection state is 'connected'");
}

#[test]
fn test_status_mode_uppercases_color() {
    let mut snapshot = host("esx01");
    snapshot.overall_status = "yellow".to_string();

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Status, Severity::Unknown);
    assert_eq!(result.severity, Severity::Warning);
    assert_eq!(result.message, "overall status is YELLOW");
}

#[test]
fn test_health_mode_single_green_memory_module() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        memory: vec![component("DIMM 1", "green", "Memory is operating normally")],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "All 1 health checks are GREEN: memory: 1");
    assert_eq!(result.severity.exit_code(), 0);
}

#[test]
fn test_health_mode_degraded_memory_joins_all_lines() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        memory: vec![
            component("DIMM 1", "green", "ok"),
            component("DIMM 2", "red", "uncorrectable errors"),
        ],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(
        result.message,
        "OK [Type: Memory] [Name: DIMM 1] [Summary: ok]\n\
         CRITICAL [Type: Memory] [Name: DIMM 2] [Summary: uncorrectable errors]"
    );
}

#[test]
fn test_health_mode_cpu_unknown_escalates_over_everything() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        memory: vec![component("DIMM 1", "green", "ok")],
        cpu: vec![component("CPU 0", "purple", "???")],
        storage: vec![component("Controller 0", "green", "ok")],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    assert_eq!(result.severity, Severity::Critical);
    assert!(result.message.starts_with("No result from CIM server"));
    assert!(result.early_exit);
}

#[test]
fn test_health_mode_storage_unknown_readings_are_dropped() {
    let mut snapshot = host("esx01");
    snapshot.health = Some(HealthSystemRuntime {
        storage: vec![
            component("Controller 0", "green", "healthy"),
            component("Slot 4", "unknown", "not populated"),
        ],
        ..Default::default()
    });

    let result = evaluate(Some(&snapshot), "esx01", CheckMode::Health, Severity::Unknown);
    // the dropped reading counts nowhere: neither message nor tally
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "All 1 health checks are GREEN: storage: 1");
}

#[test]
fn test_temp_mode_without_health_subsystem() {
    let result = evaluate(Some(&host("esx01")), "esx01", CheckMode::Temp, Severity::Unknown);
    assert_eq!(result.severity, Severity::Unknown);
    assert_eq!(result.message, "Temperature status unavailable");
    assert_eq!(result.severity.exit_code(), 3);
}

#[test]
fn test_maintenance_mode_short_circuits_with_configured_severity() {
    let mut snapshot = host("esx02");
    snapshot.in_maintenance_mode = true;
    // sensor data that would otherwise go critical
    snapshot.health = Some(HealthSystemRuntime {
        memory: vec![component("DIMM 1", "red", "failed")],
        ..Default::default()
    });

    for mode in [CheckMode::Health, CheckMode::Temp, CheckMode::Con] {
        let result = evaluate(Some(&snapshot), "esx02", mode, Severity::Warning);
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(
            result.message,
            "host esx02 is in maintenance mode, check skipped"
        );
        assert!(result.early_exit);
    }
}

#[test]
fn test_unresolved_host_is_unknown() {
    let result = evaluate(None, "esx99", CheckMode::Status, Severity::Unknown);
    assert_eq!(result.severity, Severity::Unknown);
    assert_eq!(result.message, "host esx99 not found");
}
