//! PC Scoring API Server
//!
//! REST endpoints exposing the scoring engine and the device catalog.

use std::{env, net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use pc_scoring::DeviceCatalog;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;

/// Application state shared across handlers
pub struct AppState {
    /// Loaded once at startup, read-only afterwards
    pub catalog: DeviceCatalog,
}

mod defaults {
    pub const API_PORT: &str = "8080";
    pub const API_HOST: &str = "0.0.0.0";
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,pc_scoring=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PC Scoring API Server...");

    // Load CPU table and device catalog
    let catalog = pc_scoring::initialize_catalog()?;
    tracing::info!("Catalog ready with {} devices", catalog.len());

    let state = Arc::new(AppState { catalog });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Root endpoint with API info
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", routes::api_routes())
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    // Get port from environment
    let port = env::var("API_PORT")
        .unwrap_or_else(|_| defaults::API_PORT.to_string())
        .parse::<u16>()?;

    let host = env::var("API_HOST").unwrap_or_else(|_| defaults::API_HOST.to_string());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Root endpoint - API information
async fn root() -> axum::response::Html<&'static str> {
    axum::response::Html(r#"
<!DOCTYPE html>
<html>
<head>
    <title>PC Scoring API</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; }
        code { background: #eee; padding: 2px 6px; border-radius: 4px; }
        .endpoint { margin: 10px 0; }
        .method { color: #2e7d32; font-weight: bold; }
    </style>
</head>
<body>
    <h1>PC Scoring API</h1>
    <p>Every endpoint takes an optional <code>?category=mobile|cafe|home</code>.</p>

    <div class="endpoint"><span class="method">GET</span> <a href="/health">/health</a> - Health check</div>
    <div class="endpoint"><span class="method">GET</span> <a href="/api/categories">/api/categories</a> - Weight profiles</div>
    <div class="endpoint"><span class="method">GET</span> <a href="/api/devices">/api/devices</a> - Catalog ranking</div>
    <div class="endpoint"><span class="method">GET</span> <code>/api/devices/:id</code> - Device scores and breakdowns</div>
    <div class="endpoint"><span class="method">POST</span> <code>/api/scores/absolute</code> - Score one spec against baselines</div>
    <div class="endpoint"><span class="method">POST</span> <code>/api/scores/relative</code> - Score a spec against a population</div>
    <div class="endpoint"><span class="method">POST</span> <code>/api/rankings</code> - Rank a population</div>
</body>
</html>
    "#)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
