use log::debug;
use serde::Deserialize;

use crate::core::runtime_check::{
    ComponentHealth, HealthSystemRuntime, HostRuntimeSnapshot, NumericSensor,
};
use crate::error::Result;

use super::session::VsphereSession;

/// Inventory summary returned by the host listing endpoint.
#[derive(Debug, Deserialize)]
struct HostSummary {
    host: String,
    name: String,
}

/// Runtime document for one host, as served by the endpoint.
#[derive(Debug, Deserialize)]
struct RuntimeDocument {
    overall_status: String,
    connection_state: String,
    in_maintenance_mode: bool,
    #[serde(default)]
    product: Option<ProductInfo>,
    #[serde(default)]
    health_system: Option<HealthDocument>,
}

#[derive(Debug, Deserialize)]
struct ProductInfo {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct HealthDocument {
    #[serde(default)]
    memory_status: Vec<StatusElement>,
    #[serde(default)]
    cpu_status: Vec<StatusElement>,
    #[serde(default)]
    storage_status: Vec<StatusElement>,
    #[serde(default)]
    numeric_sensors: Vec<SensorElement>,
}

#[derive(Debug, Deserialize)]
struct StatusElement {
    name: String,
    status: ElementStatus,
}

#[derive(Debug, Deserialize)]
struct ElementStatus {
    key: String,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct SensorElement {
    name: String,
    sensor_type: String,
    health_state: HealthState,
    current_reading: i64,
    unit_modifier: i32,
    #[serde(default)]
    base_units: String,
}

#[derive(Debug, Deserialize)]
struct HealthState {
    key: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    summary: String,
}

/// Resolve `name` in the inventory and assemble its runtime snapshot.
///
/// Returns `Ok(None)` when the inventory has no host by that name; the
/// evaluation core turns that into its not-found terminal result.
pub fn fetch_host_runtime(
    session: &VsphereSession,
    name: &str,
) -> Result<Option<HostRuntimeSnapshot>> {
    let hosts: Vec<HostSummary> = session.get_json(&format!("api/vcenter/host?names={}", name))?;

    let Some(summary) = hosts.into_iter().find(|h| h.name == name) else {
        debug!("host {} not present in inventory", name);
        return Ok(None);
    };

    let runtime: RuntimeDocument =
        session.get_json(&format!("api/vcenter/host/{}/runtime", summary.host))?;

    Ok(Some(build_snapshot(summary.name, runtime)))
}

fn build_snapshot(name: String, runtime: RuntimeDocument) -> HostRuntimeSnapshot {
    HostRuntimeSnapshot {
        name,
        captured_at: chrono::Utc::now().timestamp(),
        overall_status: runtime.overall_status,
        connection_state: runtime.connection_state,
        in_maintenance_mode: runtime.in_maintenance_mode,
        product_full_name: runtime.product.map(|p| p.full_name),
        health: runtime.health_system.map(build_health),
    }
}

fn build_health(doc: HealthDocument) -> HealthSystemRuntime {
    HealthSystemRuntime {
        memory: doc.memory_status.into_iter().map(build_component).collect(),
        cpu: doc.cpu_status.into_iter().map(build_component).collect(),
        storage: doc.storage_status.into_iter().map(build_component).collect(),
        sensors: doc.numeric_sensors.into_iter().map(build_sensor).collect(),
    }
}

fn build_component(element: StatusElement) -> ComponentHealth {
    ComponentHealth {
        name: element.name,
        status_key: element.status.key,
        summary: element.status.summary,
    }
}

fn build_sensor(element: SensorElement) -> NumericSensor {
    NumericSensor {
        name: element.name,
        sensor_type: element.sensor_type,
        health_key: element.health_state.key,
        health_label: element.health_state.label,
        health_summary: element.health_state.summary,
        current_reading: element.current_reading,
        unit_modifier: element.unit_modifier,
        base_units: element.base_units,
    }
}
