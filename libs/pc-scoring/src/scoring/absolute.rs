//! Absolute score
//!
//! Scores one device in isolation against fixed reference baselines.
//! A device matching every baseline scores 10 per dimension before weighting,
//! so the all-ones total for a baseline device is 40.

use serde::Serialize;

use crate::entity::{HardwareSpec, ScoreWeights, UsageCategory};

use super::{round_score, Dimension, ScoreBreakdown};

/// Reference values for a "typical" device
pub mod baseline {
    /// Benchmark points
    pub const CPU_BENCHMARK: f64 = 6000.0;
    pub const RAM_GB: f64 = 12.0;
    pub const STORAGE_GB: f64 = 512.0;
    pub const BATTERY_HOURS: f64 = 4.0;
}

/// Substituted when a device has no battery estimate
pub const DEFAULT_BATTERY_LIFE_HOURS: f64 = 2.0;

/// Points awarded for a value equal to its baseline
const POINTS_AT_BASELINE: f64 = 10.0;

/// Stationary use weights CPU 9x
const HOME_WEIGHTS: ScoreWeights = ScoreWeights {
    cpu: 9.0,
    ram: 1.0,
    rom: 1.0,
    battery: 1.0,
};

const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights::uniform(1.0);

/// Result of an absolute score calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteScoreResult {
    /// Rounded total
    pub total: i64,
    /// Weighted sum before rounding
    pub raw_total: f64,
    pub breakdown: Vec<ScoreBreakdown>,
}

/// Absolute score calculator
pub struct AbsoluteScoreCalculator;

impl AbsoluteScoreCalculator {
    /// Score `spec` as `(value / baseline) * 10 * weight` summed over
    /// cpu, ram, rom and battery.
    ///
    /// Negative or NaN inputs are not rejected; they flow through the
    /// arithmetic unchanged.
    pub fn calculate(spec: &HardwareSpec, weights: &ScoreWeights) -> AbsoluteScoreResult {
        let battery = spec
            .battery_life_hours
            .unwrap_or(DEFAULT_BATTERY_LIFE_HOURS);

        let breakdown = vec![
            Self::dimension(
                Dimension::Cpu,
                spec.cpu_benchmark_score,
                baseline::CPU_BENCHMARK,
                weights.cpu,
            ),
            Self::dimension(Dimension::Ram, spec.ram_gb, baseline::RAM_GB, weights.ram),
            Self::dimension(
                Dimension::Rom,
                spec.storage_gb,
                baseline::STORAGE_GB,
                weights.rom,
            ),
            Self::dimension(
                Dimension::Battery,
                battery,
                baseline::BATTERY_HOURS,
                weights.battery,
            ),
        ];

        let raw_total = breakdown.iter().map(|b| b.score).sum::<f64>();

        AbsoluteScoreResult {
            total: round_score(raw_total),
            raw_total,
            breakdown,
        }
    }

    fn dimension(dimension: Dimension, value: f64, baseline: f64, weight: f64) -> ScoreBreakdown {
        ScoreBreakdown::new(
            dimension,
            value,
            value / baseline * POINTS_AT_BASELINE,
            weight,
        )
    }
}

/// Absolute score of `spec`, all-ones weights when `weights` is `None`
pub fn compute_absolute_score(spec: &HardwareSpec, weights: Option<&ScoreWeights>) -> i64 {
    let weights = weights.copied().unwrap_or_default();
    AbsoluteScoreCalculator::calculate(spec, &weights).total
}

/// Weight profile of the absolute scorer for a usage category
pub fn resolve_usage_weights(category: UsageCategory) -> ScoreWeights {
    match category {
        UsageCategory::Home => HOME_WEIGHTS,
        UsageCategory::Mobile | UsageCategory::Cafe => DEFAULT_WEIGHTS,
        UsageCategory::Unrecognized => DEFAULT_WEIGHTS,
    }
}
