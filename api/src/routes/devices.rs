//! Device catalog routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pc_scoring::{
    catalog::CatalogEntry,
    get_relative_usage_score_weights, resolve_usage_weights,
    scoring::{
        AbsoluteScoreCalculator, AbsoluteScoreResult, RelativeScoreCalculator, RelativeScoreResult,
    },
    HardwareSpec, UsageCategory,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, routes::CategoryParams, AppState};

/// Device list response item
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceListItem {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price: Option<f64>,
    pub rank: usize,
    /// Relative score against the whole catalog (0-100)
    pub score: i64,
    pub absolute_score: i64,
    pub spec: HardwareSpec,
}

/// Device detail response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price: Option<f64>,
    pub cpu_model: String,
    pub battery_wh: Option<f64>,
    pub category: UsageCategory,
    pub rank: usize,
    pub catalog_size: usize,
    pub spec: HardwareSpec,
    pub relative: RelativeScoreResult,
    pub absolute: AbsoluteScoreResult,
}

/// Query params for the list endpoint
#[derive(Debug, Deserialize)]
pub struct DeviceListParams {
    #[serde(default)]
    pub category: UsageCategory,
    pub limit: Option<usize>,
}

/// GET /api/devices
/// Returns the catalog ranked for a usage category
pub async fn get_devices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeviceListParams>,
) -> Json<Vec<DeviceListItem>> {
    let limit = params.limit.unwrap_or(50).min(500);
    let weights = resolve_usage_weights(params.category);

    let items: Vec<DeviceListItem> = state
        .catalog
        .rank_entries(params.category)
        .into_iter()
        .take(limit)
        .map(|(ranked, entry)| DeviceListItem {
            id: entry.record.id.clone(),
            brand: entry.record.brand.clone(),
            model: entry.record.model.clone(),
            price: entry.record.price,
            rank: ranked.rank,
            score: ranked.score,
            absolute_score: AbsoluteScoreCalculator::calculate(&entry.spec, &weights).total,
            spec: ranked.spec,
        })
        .collect();

    tracing::debug!(
        "Listed {} devices for category {}",
        items.len(),
        params.category
    );
    Json(items)
}

/// GET /api/devices/:id
/// Returns one device with both scores and their breakdowns
pub async fn get_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<DeviceDetail>, ApiError> {
    let category = params.category;
    let entry = state
        .catalog
        .get(&id)
        .ok_or_else(|| ApiError::DeviceNotFound(id.clone()))?;

    let rank = state
        .catalog
        .rank(category)
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.rank)
        .unwrap_or_default();

    Ok(Json(detail(&state, entry, category, rank)))
}

fn detail(
    state: &AppState,
    entry: &CatalogEntry,
    category: UsageCategory,
    rank: usize,
) -> DeviceDetail {
    let relative = RelativeScoreCalculator::calculate(
        state.catalog.stats(),
        &entry.spec,
        category,
        &get_relative_usage_score_weights(category),
    );
    let absolute =
        AbsoluteScoreCalculator::calculate(&entry.spec, &resolve_usage_weights(category));

    DeviceDetail {
        id: entry.record.id.clone(),
        brand: entry.record.brand.clone(),
        model: entry.record.model.clone(),
        price: entry.record.price,
        cpu_model: entry.record.cpu_model.clone(),
        battery_wh: entry.record.battery_wh,
        category,
        rank,
        catalog_size: state.catalog.len(),
        spec: entry.spec,
        relative,
        absolute,
    }
}
