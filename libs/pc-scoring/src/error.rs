use std::{fmt::Debug, path::PathBuf};
use thiserror::Error;

/// Failures while loading the device catalog or the CPU table.
///
/// Scoring itself never fails; only the data feeding it can.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in `{origin}`: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Duplicate device id `{0}`")]
    DuplicateDevice(String),

    #[error("Duplicate CPU model `{0}`")]
    DuplicateCpu(String),
}
