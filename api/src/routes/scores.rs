//! Scoring routes for caller-supplied specs

use axum::{extract::Query, Json};
use chrono::Utc;
use pc_scoring::{
    get_relative_usage_score_weights, rank_population_with_weights, resolve_usage_weights,
    scoring::{
        AbsoluteScoreCalculator, PopulationStats, RelativeScoreCalculator, ScoreBreakdown,
    },
    HardwareSpec, RankedSpec, RelativeScoreWeights, ScoreWeights, UsageCategory,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, routes::CategoryParams};

/// Body of POST /api/scores/absolute
#[derive(Debug, Deserialize)]
pub struct AbsoluteScoreRequest {
    pub spec: HardwareSpec,
    /// Overrides the category's weight profile
    pub weights: Option<ScoreWeights>,
}

/// Body of POST /api/scores/relative
#[derive(Debug, Deserialize)]
pub struct RelativeScoreRequest {
    pub population: Vec<HardwareSpec>,
    pub target: HardwareSpec,
    pub weights: Option<RelativeScoreWeights>,
}

/// A device to rank in POST /api/rankings
#[derive(Debug, Deserialize)]
pub struct RankingDevice {
    pub id: String,
    pub spec: HardwareSpec,
}

/// Body of POST /api/rankings
#[derive(Debug, Deserialize)]
pub struct RankingRequest {
    pub devices: Vec<RankingDevice>,
    pub weights: Option<RelativeScoreWeights>,
}

/// Score response for a single device
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse<W> {
    pub category: UsageCategory,
    pub weights: W,
    pub score: i64,
    pub breakdown: Vec<ScoreBreakdown>,
    pub generated_at: String,
}

/// Ranking response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub category: UsageCategory,
    pub rankings: Vec<RankedSpec<String>>,
    pub generated_at: String,
}

/// POST /api/scores/absolute
/// Scores one device against the fixed baselines
pub async fn score_absolute(
    Query(params): Query<CategoryParams>,
    Json(request): Json<AbsoluteScoreRequest>,
) -> Result<Json<ScoreResponse<ScoreWeights>>, ApiError> {
    let weights = request
        .weights
        .unwrap_or_else(|| resolve_usage_weights(params.category));
    validate_weights(&[
        ("cpu", weights.cpu),
        ("ram", weights.ram),
        ("rom", weights.rom),
        ("battery", weights.battery),
    ])?;

    let result = AbsoluteScoreCalculator::calculate(&request.spec, &weights);
    tracing::debug!(
        "Absolute score {} for category {}",
        result.total,
        params.category
    );

    Ok(Json(ScoreResponse {
        category: params.category,
        weights,
        score: result.total,
        breakdown: result.breakdown,
        generated_at: Utc::now().to_rfc3339(),
    }))
}

/// POST /api/scores/relative
/// Scores a target device against a supplied population
pub async fn score_relative(
    Query(params): Query<CategoryParams>,
    Json(request): Json<RelativeScoreRequest>,
) -> Result<Json<ScoreResponse<RelativeScoreWeights>>, ApiError> {
    let weights = relative_weights(request.weights, params.category)?;

    let stats = PopulationStats::from_specs(&request.population);
    let result =
        RelativeScoreCalculator::calculate(&stats, &request.target, params.category, &weights);
    tracing::debug!(
        "Relative score {} against {} devices for category {}",
        result.total,
        request.population.len(),
        params.category
    );

    Ok(Json(ScoreResponse {
        category: params.category,
        weights,
        score: result.total,
        breakdown: result.breakdown,
        generated_at: Utc::now().to_rfc3339(),
    }))
}

/// POST /api/rankings
/// Ranks the supplied devices by relative score, best first
pub async fn rank_devices(
    Query(params): Query<CategoryParams>,
    Json(request): Json<RankingRequest>,
) -> Result<Json<RankingResponse>, ApiError> {
    let weights = relative_weights(request.weights, params.category)?;

    let population: Vec<(String, HardwareSpec)> = request
        .devices
        .into_iter()
        .map(|d| (d.id, d.spec))
        .collect();

    let rankings = rank_population_with_weights(&population, params.category, &weights);
    tracing::debug!(
        "Ranked {} devices for category {}",
        rankings.len(),
        params.category
    );

    Ok(Json(RankingResponse {
        category: params.category,
        rankings,
        generated_at: Utc::now().to_rfc3339(),
    }))
}

fn relative_weights(
    requested: Option<RelativeScoreWeights>,
    category: UsageCategory,
) -> Result<RelativeScoreWeights, ApiError> {
    let weights = requested.unwrap_or_else(|| get_relative_usage_score_weights(category));
    validate_weights(&[
        ("cpu", weights.cpu),
        ("ram", weights.ram),
        ("rom", weights.rom),
        ("battery", weights.battery),
        ("screen", weights.screen),
        ("weight", weights.weight),
    ])?;

    Ok(weights)
}

/// Weights must be finite and non-negative
fn validate_weights(weights: &[(&str, f64)]) -> Result<(), ApiError> {
    match weights
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        Some((name, value)) => Err(ApiError::InvalidWeights(format!(
            "`{}` must be a non-negative number, got {}",
            name, value
        ))),
        None => Ok(()),
    }
}
