use serde::{Deserialize, Serialize};

use crate::entity::{hardware::null_as_zero, HardwareSpec};

use super::{cpu::CpuTable, power::estimate_battery_life};

/// A device as listed in the catalog, metadata included.
///
/// Only the physical attributes reach the scorers, through
/// [`DeviceRecord::to_hardware_spec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub cpu_model: String,
    #[serde(rename = "ramGB", default, deserialize_with = "null_as_zero")]
    pub ram_gb: f64,
    #[serde(rename = "storageGB", default, deserialize_with = "null_as_zero")]
    pub storage_gb: f64,
    /// Battery capacity in watt-hours
    #[serde(default)]
    pub battery_wh: Option<f64>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub screen_size_inches: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub weight_grams: f64,
}

impl DeviceRecord {
    /// Resolve CPU figures and estimate battery life.
    ///
    /// An unknown CPU model leaves the benchmark at 0 and the battery
    /// estimate unknown, since there is no TDP to estimate from.
    pub fn to_hardware_spec(&self, cpus: &CpuTable) -> HardwareSpec {
        let cpu = cpus.lookup(&self.cpu_model);

        let battery_life_hours = match (cpu, self.battery_wh) {
            (Some(cpu), Some(capacity)) => {
                estimate_battery_life(capacity, cpu.tdp_watts, self.screen_size_inches)
            }
            _ => None,
        };

        HardwareSpec {
            cpu_benchmark_score: cpu.map(|c| c.benchmark_score).unwrap_or(0.0),
            ram_gb: self.ram_gb,
            storage_gb: self.storage_gb,
            battery_life_hours,
            screen_size_inches: self.screen_size_inches,
            weight_grams: self.weight_grams,
        }
    }
}
