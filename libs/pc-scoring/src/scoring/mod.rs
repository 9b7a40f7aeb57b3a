//! Device scoring
//!
//! Two ways to turn a [`HardwareSpec`](crate::entity::HardwareSpec) into a number:
//! - Absolute score: multiples of 10 against fixed baselines, unbounded
//! - Relative score (0-100): min-max normalized against a population, category-aware

pub mod absolute;
pub mod ranking;
pub mod relative;

use serde::Serialize;

pub use absolute::{
    compute_absolute_score, resolve_usage_weights, AbsoluteScoreCalculator, AbsoluteScoreResult,
};
pub use ranking::{rank_population, rank_population_with_weights, RankedSpec};
pub use relative::{
    compute_relative_score, get_relative_usage_score_weights, normalize, normalize_mid_optimal,
    DimensionRange, PopulationStats, RelativeScoreCalculator, RelativeScoreResult,
};

/// A scored hardware dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Cpu,
    Ram,
    Rom,
    Battery,
    Screen,
    Weight,
}

/// Individual score component breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub dimension: Dimension,
    /// Input value the dimension was scored from
    pub value: f64,
    /// Dimension score before weighting
    pub points: f64,
    pub weight: f64,
    /// `points * weight`
    pub score: f64,
}

impl ScoreBreakdown {
    fn new(dimension: Dimension, value: f64, points: f64, weight: f64) -> Self {
        Self {
            dimension,
            value,
            points,
            weight,
            score: points * weight,
        }
    }
}

/// Round half away from zero. NaN collapses to 0, infinities saturate.
pub(crate) fn round_score(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    value.round() as i64
}
