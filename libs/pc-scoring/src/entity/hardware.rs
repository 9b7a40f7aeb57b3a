use serde::{Deserialize, Deserializer, Serialize};

/// Physical and performance attributes of one evaluable device.
///
/// Field names on the wire follow the catalog frontend (`cpuBenchmarkScore`,
/// `ramGB`, ...). Absent or `null` numeric fields deserialize as `0`, which
/// the scorers treat as "unknown".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareSpec {
    /// Relative CPU performance index
    #[serde(rename = "cpuBenchmarkScore", default, deserialize_with = "null_as_zero")]
    pub cpu_benchmark_score: f64,
    #[serde(rename = "ramGB", default, deserialize_with = "null_as_zero")]
    pub ram_gb: f64,
    #[serde(rename = "storageGB", default, deserialize_with = "null_as_zero")]
    pub storage_gb: f64,
    /// Estimated battery life, `None` when it could not be estimated
    #[serde(rename = "batteryLifeHours", default)]
    pub battery_life_hours: Option<f64>,
    #[serde(rename = "screenSizeInches", default, deserialize_with = "null_as_zero")]
    pub screen_size_inches: f64,
    #[serde(rename = "weightGrams", default, deserialize_with = "null_as_zero")]
    pub weight_grams: f64,
}

/// Reads a number that may be `null`, `null` becoming `0`
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Option::unwrap_or_default)
}
