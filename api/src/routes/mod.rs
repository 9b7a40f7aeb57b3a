//! API route definitions

pub mod categories;
pub mod devices;
pub mod scores;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use pc_scoring::UsageCategory;
use serde::Deserialize;

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Category profiles
        .route("/categories", get(categories::get_categories))
        // Scoring caller-supplied specs
        .route("/scores/absolute", post(scores::score_absolute))
        .route("/scores/relative", post(scores::score_relative))
        .route("/rankings", post(scores::rank_devices))
        // Catalog routes
        .route("/devices", get(devices::get_devices))
        .route("/devices/:id", get(devices::get_device))
}

/// `?category=` query parameter; absent or unknown values select the defaults
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    #[serde(default)]
    pub category: UsageCategory,
}
