//! Relative score (0-100)
//!
//! Each dimension is normalized to 0-10 against the min/max observed in a
//! population, shaped by the usage category:
//! - cpu, ram, rom, battery: larger is better, every category
//! - screen: mobile smaller, cafe closest to the midpoint, home and unknown larger
//! - device weight: lighter is better, scaled by 0.7 for cafe, fixed 5 for home
//!
//! The weighted sum is rescaled against the total a device scoring 10 on
//! every dimension would reach.

use serde::Serialize;

use crate::entity::{HardwareSpec, RelativeScoreWeights, UsageCategory};

use super::{round_score, Dimension, ScoreBreakdown};

/// Score of a dimension with no spread in the population
const NEUTRAL_POINTS: f64 = 5.0;
const MAX_POINTS: f64 = 10.0;

/// Lighter matters for cafe use, but less than for mobile
const CAFE_WEIGHT_FACTOR: f64 = 0.7;

/// Linear min-max normalization onto 0-10.
///
/// Returns 5 when `min == max`. With `reverse` smaller values score higher.
/// The result is not clamped: values outside `[min, max]` land outside 0-10.
pub fn normalize(value: f64, min: f64, max: f64, reverse: bool) -> f64 {
    if min == max {
        return NEUTRAL_POINTS;
    }

    let n = (value - min) / (max - min) * MAX_POINTS;
    if reverse {
        MAX_POINTS - n
    } else {
        n
    }
}

/// Scores values closest to the midpoint of `[min, max]` highest.
///
/// Returns 5 when `min == max`, 10 at the midpoint and 0 at either end.
pub fn normalize_mid_optimal(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return NEUTRAL_POINTS;
    }

    let mid = (min + max) / 2.0;
    let dist = (value - mid).abs();
    let max_dist = (mid - min).max(max - mid);

    MAX_POINTS - dist / max_dist * MAX_POINTS
}

/// Observed range of one dimension, non-positive values excluded
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DimensionRange {
    /// No positive value in the population
    #[default]
    Empty,
    Span { min: f64, max: f64 },
}

impl DimensionRange {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .fold(Self::Empty, |range, value| range.include(value))
    }

    /// Widen the range to cover `value`. Values `<= 0` and NaN are ignored.
    pub fn include(self, value: f64) -> Self {
        if !(value > 0.0) {
            return self;
        }

        match self {
            Self::Empty => Self::Span {
                min: value,
                max: value,
            },
            Self::Span { min, max } => Self::Span {
                min: min.min(value),
                max: max.max(value),
            },
        }
    }

    fn points(&self, value: f64, curve: Curve) -> f64 {
        let (min, max) = match *self {
            Self::Empty => return NEUTRAL_POINTS,
            Self::Span { min, max } => (min, max),
        };

        let points = match curve {
            Curve::Larger => normalize(value, min, max, false),
            Curve::Smaller => normalize(value, min, max, true),
            Curve::MidOptimal => normalize_mid_optimal(value, min, max),
        };

        // Targets outside the population's range stay within 0-10
        points.clamp(0.0, MAX_POINTS)
    }
}

/// Per-dimension ranges of a population, computed in one pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopulationStats {
    pub cpu: DimensionRange,
    pub ram: DimensionRange,
    pub rom: DimensionRange,
    pub battery: DimensionRange,
    pub screen: DimensionRange,
    pub weight: DimensionRange,
}

impl PopulationStats {
    pub fn from_specs<'a, I>(population: I) -> Self
    where
        I: IntoIterator<Item = &'a HardwareSpec>,
    {
        population
            .into_iter()
            .fold(Self::default(), |stats, spec| stats.include(spec))
    }

    pub fn include(self, spec: &HardwareSpec) -> Self {
        Self {
            cpu: self.cpu.include(spec.cpu_benchmark_score),
            ram: self.ram.include(spec.ram_gb),
            rom: self.rom.include(spec.storage_gb),
            // Unknown battery never widens the range
            battery: match spec.battery_life_hours {
                Some(hours) => self.battery.include(hours),
                None => self.battery,
            },
            screen: self.screen.include(spec.screen_size_inches),
            weight: self.weight.include(spec.weight_grams),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Curve {
    Larger,
    Smaller,
    MidOptimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum WeightRule {
    Scaled(Curve, f64),
    Fixed(f64),
}

fn screen_curve(category: UsageCategory) -> Curve {
    match category {
        UsageCategory::Mobile => Curve::Smaller,
        UsageCategory::Cafe => Curve::MidOptimal,
        UsageCategory::Home => Curve::Larger,
        UsageCategory::Unrecognized => Curve::Larger,
    }
}

fn weight_rule(category: UsageCategory) -> WeightRule {
    match category {
        UsageCategory::Mobile => WeightRule::Scaled(Curve::Smaller, 1.0),
        UsageCategory::Cafe => WeightRule::Scaled(Curve::Smaller, CAFE_WEIGHT_FACTOR),
        // Irrelevant for a stationary device
        UsageCategory::Home => WeightRule::Fixed(NEUTRAL_POINTS),
        UsageCategory::Unrecognized => WeightRule::Scaled(Curve::Smaller, 1.0),
    }
}

/// Result of a relative score calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeScoreResult {
    /// Rounded score, 0-100
    pub total: i64,
    /// Weighted sum of dimension points before rescaling
    pub raw_total: f64,
    /// `sum(weights) * 10`
    pub max_possible: f64,
    pub breakdown: Vec<ScoreBreakdown>,
}

/// Relative score calculator
pub struct RelativeScoreCalculator;

impl RelativeScoreCalculator {
    /// Score `target` against precomputed population ranges
    pub fn calculate(
        stats: &PopulationStats,
        target: &HardwareSpec,
        category: UsageCategory,
        weights: &RelativeScoreWeights,
    ) -> RelativeScoreResult {
        let battery = target.battery_life_hours.unwrap_or(0.0);

        let device_weight_points = match weight_rule(category) {
            WeightRule::Scaled(curve, factor) => {
                stats.weight.points(target.weight_grams, curve) * factor
            }
            WeightRule::Fixed(points) => points,
        };

        let breakdown = vec![
            ScoreBreakdown::new(
                Dimension::Cpu,
                target.cpu_benchmark_score,
                stats.cpu.points(target.cpu_benchmark_score, Curve::Larger),
                weights.cpu,
            ),
            ScoreBreakdown::new(
                Dimension::Ram,
                target.ram_gb,
                stats.ram.points(target.ram_gb, Curve::Larger),
                weights.ram,
            ),
            ScoreBreakdown::new(
                Dimension::Rom,
                target.storage_gb,
                stats.rom.points(target.storage_gb, Curve::Larger),
                weights.rom,
            ),
            ScoreBreakdown::new(
                Dimension::Battery,
                battery,
                stats.battery.points(battery, Curve::Larger),
                weights.battery,
            ),
            ScoreBreakdown::new(
                Dimension::Screen,
                target.screen_size_inches,
                stats
                    .screen
                    .points(target.screen_size_inches, screen_curve(category)),
                weights.screen,
            ),
            ScoreBreakdown::new(
                Dimension::Weight,
                target.weight_grams,
                device_weight_points,
                weights.weight,
            ),
        ];

        let raw_total = breakdown.iter().map(|b| b.score).sum::<f64>();
        let max_possible = weights.sum() * MAX_POINTS;

        // All-zero weights leave nothing to rescale against
        let total = if max_possible > 0.0 {
            round_score(raw_total / max_possible * 100.0)
        } else {
            0
        };

        RelativeScoreResult {
            total,
            raw_total,
            max_possible,
            breakdown,
        }
    }
}

/// Relative score of `target` against `population`.
///
/// Uses [`get_relative_usage_score_weights`] when `weights` is `None`.
pub fn compute_relative_score(
    population: &[HardwareSpec],
    target: &HardwareSpec,
    category: UsageCategory,
    weights: Option<&RelativeScoreWeights>,
) -> i64 {
    let stats = PopulationStats::from_specs(population);
    let weights = weights
        .copied()
        .unwrap_or_else(|| get_relative_usage_score_weights(category));

    RelativeScoreCalculator::calculate(&stats, target, category, &weights).total
}

/// Relative weights do not vary by category; only normalization shape does
pub fn get_relative_usage_score_weights(category: UsageCategory) -> RelativeScoreWeights {
    match category {
        UsageCategory::Mobile | UsageCategory::Cafe | UsageCategory::Home => {
            RelativeScoreWeights::default()
        }
        UsageCategory::Unrecognized => RelativeScoreWeights::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spec(cpu: f64, ram: f64, rom: f64, battery: f64, screen: f64, weight: f64) -> HardwareSpec {
        HardwareSpec {
            cpu_benchmark_score: cpu,
            ram_gb: ram,
            storage_gb: rom,
            battery_life_hours: Some(battery),
            screen_size_inches: screen,
            weight_grams: weight,
        }
    }

    fn three_laptops() -> Vec<HardwareSpec> {
        vec![
            spec(3000.0, 8.0, 256.0, 3.0, 13.0, 1200.0),
            spec(6000.0, 16.0, 512.0, 5.0, 15.0, 1800.0),
            spec(9000.0, 32.0, 1024.0, 8.0, 17.0, 2500.0),
        ]
    }

    fn breakdown_for(result: &RelativeScoreResult, dimension: Dimension) -> ScoreBreakdown {
        *result
            .breakdown
            .iter()
            .find(|b| b.dimension == dimension)
            .unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5.0, 0.0, 10.0, false), 5.0);
        assert_eq!(normalize(10.0, 0.0, 10.0, false), 10.0);
        assert_eq!(normalize(2.0, 0.0, 10.0, true), 8.0);
        assert_eq!(normalize(7.0, 7.0, 7.0, false), 5.0);
        assert_eq!(normalize(7.0, 7.0, 7.0, true), 5.0);
    }

    #[test]
    fn test_normalize_mid_optimal() {
        assert_eq!(normalize_mid_optimal(15.0, 13.0, 17.0), 10.0);
        assert_eq!(normalize_mid_optimal(13.0, 13.0, 17.0), 0.0);
        assert_eq!(normalize_mid_optimal(17.0, 13.0, 17.0), 0.0);
        assert_eq!(normalize_mid_optimal(14.0, 13.0, 17.0), 5.0);
        assert_eq!(normalize_mid_optimal(14.0, 14.0, 14.0), 5.0);
    }

    #[test]
    fn test_range_ignores_non_positive_values() {
        let range = DimensionRange::from_values([0.0, -4.0, 8.0, 2.0, f64::NAN]);
        assert_eq!(range, DimensionRange::Span { min: 2.0, max: 8.0 });

        assert_eq!(
            DimensionRange::from_values([0.0, -1.0]),
            DimensionRange::Empty
        );
    }

    #[test]
    fn test_cafe_scenario() {
        let population = three_laptops();
        let stats = PopulationStats::from_specs(&population);
        let weights = RelativeScoreWeights::default();

        let best =
            RelativeScoreCalculator::calculate(&stats, &population[2], UsageCategory::Cafe, &weights);
        // Wins cpu/ram/rom/battery but has the largest screen and is the heaviest
        assert_eq!(best.total, 67);
        assert_eq!(breakdown_for(&best, Dimension::Screen).points, 0.0);
        assert_eq!(breakdown_for(&best, Dimension::Weight).points, 0.0);

        let middle =
            RelativeScoreCalculator::calculate(&stats, &population[1], UsageCategory::Cafe, &weights);
        assert_eq!(middle.total, 49);
        assert_eq!(breakdown_for(&middle, Dimension::Screen).points, 10.0);

        let smallest =
            RelativeScoreCalculator::calculate(&stats, &population[0], UsageCategory::Cafe, &weights);
        // Only the lightest-weight points survive, scaled by 0.7
        assert_eq!(breakdown_for(&smallest, Dimension::Weight).points, 7.0);
        assert_eq!(smallest.total, 12);
    }

    #[test]
    fn test_screen_direction_by_category() {
        let population = three_laptops();
        let small = &population[0];

        assert_eq!(compute_relative_score(&population, small, UsageCategory::Mobile, None), 33);
        assert_eq!(compute_relative_score(&population, small, UsageCategory::Home, None), 8);
        assert_eq!(
            compute_relative_score(&population, small, UsageCategory::Unrecognized, None),
            17
        );
    }

    #[test]
    fn test_home_weight_dimension_is_fixed() {
        let population = three_laptops();
        let stats = PopulationStats::from_specs(&population);
        let weights = RelativeScoreWeights {
            weight: 3.0,
            ..Default::default()
        };

        for target in &population {
            let result =
                RelativeScoreCalculator::calculate(&stats, target, UsageCategory::Home, &weights);
            assert_eq!(breakdown_for(&result, Dimension::Weight).score, 5.0 * weights.weight);
        }
    }

    #[test]
    fn test_identical_dimension_scores_midpoint() {
        let population = vec![
            spec(3000.0, 16.0, 256.0, 3.0, 14.0, 1200.0),
            spec(9000.0, 16.0, 1024.0, 8.0, 14.0, 2500.0),
        ];
        let stats = PopulationStats::from_specs(&population);

        for target in &population {
            let result = RelativeScoreCalculator::calculate(
                &stats,
                target,
                UsageCategory::Mobile,
                &RelativeScoreWeights::default(),
            );
            assert_eq!(breakdown_for(&result, Dimension::Ram).points, 5.0);
            assert_eq!(breakdown_for(&result, Dimension::Screen).points, 5.0);
        }
    }

    #[test]
    fn test_single_device_population() {
        let device = spec(6000.0, 16.0, 512.0, 5.0, 15.0, 1800.0);

        // Every dimension neutral
        assert_eq!(
            compute_relative_score(&[device], &device, UsageCategory::Mobile, None),
            50
        );
        let cafe = RelativeScoreCalculator::calculate(
            &PopulationStats::from_specs([&device]),
            &device,
            UsageCategory::Cafe,
            &RelativeScoreWeights::default(),
        );
        // Neutral weight points still get the cafe factor
        assert!((breakdown_for(&cafe, Dimension::Weight).points - 3.5).abs() < 1e-9);
        assert_eq!(breakdown_for(&cafe, Dimension::Screen).points, 5.0);
    }

    #[test]
    fn test_empty_dimension_scores_midpoint() {
        // Nobody has a battery estimate
        let population = vec![
            HardwareSpec {
                battery_life_hours: None,
                ..spec(3000.0, 8.0, 256.0, 0.0, 13.0, 1200.0)
            },
            HardwareSpec {
                battery_life_hours: None,
                ..spec(9000.0, 32.0, 1024.0, 0.0, 17.0, 2500.0)
            },
        ];
        let stats = PopulationStats::from_specs(&population);
        assert_eq!(stats.battery, DimensionRange::Empty);

        let result = RelativeScoreCalculator::calculate(
            &stats,
            &population[1],
            UsageCategory::Home,
            &RelativeScoreWeights::default(),
        );
        let battery = breakdown_for(&result, Dimension::Battery);
        assert_eq!(battery.points, 5.0);
        assert!(result.raw_total.is_finite());
        // cpu, ram, rom, screen 10 each, battery and weight 5
        assert_eq!(result.total, 83);
    }

    #[test]
    fn test_unknown_target_value_clamps_to_zero() {
        let mut population = three_laptops();
        let unknown = HardwareSpec {
            battery_life_hours: None,
            cpu_benchmark_score: 0.0,
            ..population[1]
        };
        population.push(unknown);
        let stats = PopulationStats::from_specs(&population);

        let result = RelativeScoreCalculator::calculate(
            &stats,
            &population[3],
            UsageCategory::Mobile,
            &RelativeScoreWeights::default(),
        );
        assert_eq!(breakdown_for(&result, Dimension::Cpu).points, 0.0);
        assert_eq!(breakdown_for(&result, Dimension::Battery).points, 0.0);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let population = three_laptops();
        let weights = RelativeScoreWeights::uniform(0.0);

        assert_eq!(
            compute_relative_score(&population, &population[2], UsageCategory::Home, Some(&weights)),
            0
        );
    }

    #[test]
    fn test_custom_weights_rescale() {
        let population = three_laptops();
        let cpu_only = RelativeScoreWeights {
            cpu: 1.0,
            ..RelativeScoreWeights::uniform(0.0)
        };

        assert_eq!(
            compute_relative_score(&population, &population[1], UsageCategory::Cafe, Some(&cpu_only)),
            50
        );
    }

    #[test]
    fn test_relative_weights_ignore_category() {
        for category in UsageCategory::ALL {
            assert_eq!(
                get_relative_usage_score_weights(category),
                RelativeScoreWeights::uniform(1.0)
            );
        }
        assert_eq!(
            get_relative_usage_score_weights(UsageCategory::Unrecognized),
            RelativeScoreWeights::uniform(1.0)
        );
    }

    fn spec_strategy() -> impl Strategy<Value = HardwareSpec> {
        (
            -100.0..20_000.0f64,
            -1.0..64.0f64,
            -1.0..4096.0f64,
            proptest::option::of(-1.0..20.0f64),
            -1.0..18.0f64,
            -1.0..4000.0f64,
        )
            .prop_map(|(cpu, ram, rom, battery, screen, weight)| HardwareSpec {
                cpu_benchmark_score: cpu,
                ram_gb: ram,
                storage_gb: rom,
                battery_life_hours: battery,
                screen_size_inches: screen,
                weight_grams: weight,
            })
    }

    fn category_strategy() -> impl Strategy<Value = UsageCategory> {
        prop_oneof![
            Just(UsageCategory::Mobile),
            Just(UsageCategory::Cafe),
            Just(UsageCategory::Home),
            Just(UsageCategory::Unrecognized),
        ]
    }

    proptest! {
        #[test]
        fn score_is_bounded(
            population in proptest::collection::vec(spec_strategy(), 1..12),
            index in any::<prop::sample::Index>(),
            category in category_strategy(),
        ) {
            let target = population[index.index(population.len())];
            let score = compute_relative_score(&population, &target, category, None);
            prop_assert!((0..=100).contains(&score));
        }

        #[test]
        fn precomputed_stats_match_direct_call(
            population in proptest::collection::vec(spec_strategy(), 1..12),
            index in any::<prop::sample::Index>(),
            category in category_strategy(),
        ) {
            let target = population[index.index(population.len())];
            let stats = PopulationStats::from_specs(&population);
            let via_stats = RelativeScoreCalculator::calculate(
                &stats,
                &target,
                category,
                &get_relative_usage_score_weights(category),
            );
            prop_assert_eq!(
                via_stats.total,
                compute_relative_score(&population, &target, category, None)
            );
        }
    }
}
