//! Device catalog
//!
//! Turns catalog records into scorer inputs:
//! - CPU model name -> benchmark score and TDP via [`CpuTable`]
//! - battery capacity, TDP and screen size -> estimated battery life
//!
//! Records and their specs are resolved once at load time.

pub mod cpu;
pub mod device;
pub mod power;

use std::{collections::HashMap, fs, path::Path};

use crate::{
    entity::{HardwareSpec, UsageCategory},
    error::CatalogError,
    scoring::{rank_population, PopulationStats, RankedSpec},
};

pub use cpu::{CpuProfile, CpuTable};
pub use device::DeviceRecord;
pub use power::{estimate_battery_life, estimate_power_draw};

/// A catalog record with its resolved hardware spec
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub record: DeviceRecord,
    pub spec: HardwareSpec,
}

/// Immutable set of scoreable devices
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    entries: Vec<CatalogEntry>,
    /// Device id -> position in `entries`
    index: HashMap<String, usize>,
    stats: PopulationStats,
}

impl DeviceCatalog {
    pub fn new(records: Vec<DeviceRecord>, cpus: &CpuTable) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            if index.insert(record.id.clone(), entries.len()).is_some() {
                return Err(CatalogError::DuplicateDevice(record.id));
            }

            let spec = record.to_hardware_spec(cpus);
            if spec.cpu_benchmark_score == 0.0 {
                tracing::warn!(
                    "Unknown CPU `{}` for device {}, scoring it as unknown",
                    record.cpu_model,
                    record.id
                );
            }

            entries.push(CatalogEntry { record, spec });
        }

        let stats = PopulationStats::from_specs(entries.iter().map(|e| &e.spec));

        Ok(Self {
            entries,
            index,
            stats,
        })
    }

    /// Parse a JSON array of [`DeviceRecord`]s
    pub fn from_json_str(json: &str, origin: &str, cpus: &CpuTable) -> Result<Self, CatalogError> {
        let records: Vec<DeviceRecord> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        Self::new(records, cpus)
    }

    pub fn load(path: impl AsRef<Path>, cpus: &CpuTable) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json, &path.display().to_string(), cpus)?;
        tracing::info!("Loaded {} devices from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index
            .get(id)
            .and_then(|&position| self.entries.get(position))
    }

    /// Min/max ranges of the whole catalog
    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    /// Rank the whole catalog for `category`, keyed by device id
    pub fn rank(&self, category: UsageCategory) -> Vec<RankedSpec<String>> {
        let population: Vec<(String, HardwareSpec)> = self
            .entries
            .iter()
            .map(|e| (e.record.id.clone(), e.spec))
            .collect();

        rank_population(&population, category)
    }

    /// [`DeviceCatalog::rank`] with each result paired with its entry
    pub fn rank_entries(
        &self,
        category: UsageCategory,
    ) -> Vec<(RankedSpec<usize>, &CatalogEntry)> {
        let population: Vec<(usize, HardwareSpec)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, e)| (position, e.spec))
            .collect();

        rank_population(&population, category)
            .into_iter()
            .filter_map(|ranked| {
                let entry = self.entries.get(ranked.id)?;
                Some((ranked, entry))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
