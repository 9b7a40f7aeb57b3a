use std::env;

pub mod catalog;
pub mod entity;
pub mod error;
pub mod scoring;

// Re-export commonly used types
pub use catalog::{CpuTable, DeviceCatalog, DeviceRecord};
pub use entity::{HardwareSpec, RelativeScoreWeights, ScoreWeights, UsageCategory};
pub use error::CatalogError;
pub use scoring::{
    compute_absolute_score, compute_relative_score, get_relative_usage_score_weights,
    rank_population, rank_population_with_weights, resolve_usage_weights, RankedSpec,
};

mod defaults {
    pub const CATALOG_PATH: &str = "data/devices.json";
    pub const CPU_TABLE_PATH: &str = "data/cpus.json";
}

/// Load the CPU table and device catalog named by `CPU_TABLE_PATH` and
/// `CATALOG_PATH`, reading a `.env` file first if one exists.
pub fn initialize_catalog() -> Result<DeviceCatalog, CatalogError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cpu_table_path =
        env::var("CPU_TABLE_PATH").unwrap_or(String::from(defaults::CPU_TABLE_PATH));
    let catalog_path = env::var("CATALOG_PATH").unwrap_or(String::from(defaults::CATALOG_PATH));

    let cpus = CpuTable::load(&cpu_table_path)?;
    DeviceCatalog::load(&catalog_path, &cpus)
}
