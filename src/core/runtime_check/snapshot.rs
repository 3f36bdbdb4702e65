use serde::{Deserialize, Serialize};

/// Complete runtime snapshot for one managed host.
///
/// Populated once by the client before evaluation; the evaluators never query
/// live API objects. Optional sub-records model data the endpoint may simply
/// not have: an absent health subsystem is `None`, absent category
/// collections are empty vectors and are skipped silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostRuntimeSnapshot {
    pub name: String,
    pub captured_at: i64, // Unix timestamp
    /// Overall status color word ("green", "yellow", "red", "gray")
    pub overall_status: String,
    /// Connection state string ("connected", "disconnected", "notResponding")
    pub connection_state: String,
    pub in_maintenance_mode: bool,
    /// Full product name ("VMware ESXi 8.0.2 build-23305546")
    pub product_full_name: Option<String>,
    pub health: Option<HealthSystemRuntime>,
}

/// Hardware health subsystem data as reported by the host's CIM provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthSystemRuntime {
    pub memory: Vec<ComponentHealth>,
    pub cpu: Vec<ComponentHealth>,
    pub storage: Vec<ComponentHealth>,
    pub sensors: Vec<NumericSensor>,
}

/// Health state of one hardware component (memory module, CPU package,
/// storage element).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    /// Vendor status key, normally a color word
    pub status_key: String,
    pub summary: String,
}

/// One numeric sensor reading (temperature, voltage, fan, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumericSensor {
    pub name: String,
    /// Free-form sensor type string ("temperature", "voltage", "fan",
    /// "Software Components")
    pub sensor_type: String,
    pub health_key: String,
    pub health_label: String,
    pub health_summary: String,
    pub current_reading: i64,
    /// Decimal exponent applied to `current_reading` to obtain the value in
    /// `base_units`
    pub unit_modifier: i32,
    pub base_units: String,
}

impl NumericSensor {
    /// Physical value of the reading, with the unit modifier applied.
    pub fn scaled_reading(&self) -> f64 {
        self.current_reading as f64 * 10f64.powi(self.unit_modifier)
    }
}
