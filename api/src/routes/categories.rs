//! Category profile routes

use axum::{response::IntoResponse, Json};
use pc_scoring::{
    get_relative_usage_score_weights, resolve_usage_weights, RelativeScoreWeights, ScoreWeights,
    UsageCategory,
};
use serde::Serialize;

/// Weight profiles applied for one usage category
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProfile {
    pub category: UsageCategory,
    pub absolute_weights: ScoreWeights,
    pub relative_weights: RelativeScoreWeights,
}

impl From<UsageCategory> for CategoryProfile {
    fn from(category: UsageCategory) -> Self {
        Self {
            category,
            absolute_weights: resolve_usage_weights(category),
            relative_weights: get_relative_usage_score_weights(category),
        }
    }
}

/// GET /api/categories
/// Returns the selectable categories and their weight profiles
pub async fn get_categories() -> impl IntoResponse {
    let profiles: Vec<CategoryProfile> = UsageCategory::ALL.into_iter().map(Into::into).collect();
    Json(profiles)
}
