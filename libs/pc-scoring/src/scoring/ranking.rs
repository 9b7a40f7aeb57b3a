use serde::Serialize;

use crate::entity::{HardwareSpec, RelativeScoreWeights, UsageCategory};

use super::relative::{get_relative_usage_score_weights, PopulationStats, RelativeScoreCalculator};

/// One device of a ranked population
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSpec<K> {
    /// Caller's identifier, carried through untouched
    pub id: K,
    /// 1-based position after sorting
    pub rank: usize,
    /// Relative score (0-100)
    pub score: i64,
    pub spec: HardwareSpec,
}

/// Rank every member of `population` by relative score, best first.
///
/// Population ranges are computed once and shared by every member.
/// Equal scores keep their input order.
pub fn rank_population<K: Clone>(
    population: &[(K, HardwareSpec)],
    category: UsageCategory,
) -> Vec<RankedSpec<K>> {
    rank_population_with_weights(
        population,
        category,
        &get_relative_usage_score_weights(category),
    )
}

/// [`rank_population`] with caller-supplied relative weights
pub fn rank_population_with_weights<K: Clone>(
    population: &[(K, HardwareSpec)],
    category: UsageCategory,
    weights: &RelativeScoreWeights,
) -> Vec<RankedSpec<K>> {
    let stats = PopulationStats::from_specs(population.iter().map(|(_, spec)| spec));

    let mut ranked: Vec<RankedSpec<K>> = population
        .iter()
        .map(|(id, spec)| RankedSpec {
            id: id.clone(),
            rank: 0,
            score: RelativeScoreCalculator::calculate(&stats, spec, category, weights).total,
            spec: *spec,
        })
        .collect();

    // Stable: ties stay in input order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.rank = position + 1;
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_relative_score;

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

    fn population() -> Vec<(&'static str, HardwareSpec)> {
        vec![
            ("budget", spec(3000.0, 8.0, 256.0, 3.0, 13.0, 1200.0)),
            ("midrange", spec(6000.0, 16.0, 512.0, 5.0, 15.0, 1800.0)),
            ("flagship", spec(9000.0, 32.0, 1024.0, 8.0, 17.0, 2500.0)),
        ]
    }

    #[test]
    fn test_cafe_ranking() {
        let ranked = rank_population(&population(), UsageCategory::Cafe);

        let order: Vec<_> = ranked.iter().map(|r| (r.id, r.rank, r.score)).collect();
        assert_eq!(
            order,
            vec![("flagship", 1, 67), ("midrange", 2, 49), ("budget", 3, 12)]
        );
    }

    #[test]
    fn test_scores_match_single_device_scoring() {
        let population = population();
        let specs: Vec<HardwareSpec> = population.iter().map(|(_, s)| *s).collect();

        for category in UsageCategory::ALL {
            for ranked in rank_population(&population, category) {
                assert_eq!(
                    ranked.score,
                    compute_relative_score(&specs, &ranked.spec, category, None)
                );
            }
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let device = spec(6000.0, 16.0, 512.0, 5.0, 15.0, 1800.0);
        let population = vec![(3, device), (1, device), (2, device)];

        let ranked = rank_population(&population, UsageCategory::Home);
        let ids: Vec<i32> = ranked.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
        assert!(ranked.iter().all(|r| r.score == 50));
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let population = population();

        let first = rank_population(&population, UsageCategory::Mobile);
        let second = rank_population(&population, UsageCategory::Mobile);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_population() {
        let ranked = rank_population::<String>(&[], UsageCategory::Home);
        assert!(ranked.is_empty());
    }
}
