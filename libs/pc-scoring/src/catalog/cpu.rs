use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Benchmark and power figures for one CPU model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuProfile {
    pub model: String,
    pub benchmark_score: f64,
    /// Thermal design power
    pub tdp_watts: f64,
}

/// CPU performance lookup keyed by model name.
///
/// Lookups ignore case and collapse whitespace, so `"Intel  Core i7-1360P "`
/// finds `"intel core i7-1360p"`.
#[derive(Debug, Clone, Default)]
pub struct CpuTable {
    profiles: HashMap<String, CpuProfile>,
}

impl CpuTable {
    pub fn from_profiles(profiles: Vec<CpuProfile>) -> Result<Self, CatalogError> {
        let mut table = HashMap::with_capacity(profiles.len());

        for profile in profiles {
            let key = model_key(&profile.model);
            if table.contains_key(&key) {
                return Err(CatalogError::DuplicateCpu(profile.model));
            }
            table.insert(key, profile);
        }

        Ok(Self { profiles: table })
    }

    /// Parse a JSON array of [`CpuProfile`]s
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<CpuProfile> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        Self::from_profiles(profiles)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json_str(&json, &path.display().to_string())?;
        tracing::debug!("Loaded {} CPU profiles from {}", table.len(), path.display());

        Ok(table)
    }

    pub fn lookup(&self, model: &str) -> Option<&CpuProfile> {
        self.profiles.get(&model_key(model))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn model_key(model: &str) -> String {
    model
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
