//! # crowdpulse-server
//!
//! REST API server for the crowdpulse-ts analytics core. Handlers are
//! request-scoped and stateless: deserialize, run the pure core,
//! serialize.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::env;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - runs a canary computation through the core.
async fn readiness() -> Json<serde_json::Value> {
    let healthy = canary_check();
    Json(serde_json::json!({
        "status": if healthy { "ready" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "checks": [{ "name": "alignment-core", "healthy": healthy }]
    }))
}

/// Resample a tiny fixed series and verify the invariants hold.
fn canary_check() -> bool {
    use chrono::{Duration, TimeZone, Utc};
    use series::{resample, Observation, TimeWindow};

    let Some(start) = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single() else {
        return false;
    };
    let Ok(window) = TimeWindow::new(start, start + Duration::minutes(10), Duration::minutes(5))
    else {
        return false;
    };
    let buckets = resample(&[Observation::new(start, 0.5)], &window);
    buckets.len() == 2 && buckets[0].is_some() && buckets[1].is_none()
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crowdpulse_server=info,tower_http=info".into()),
        )
        .init();

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        // API endpoints
        .route("/api/v1/series/resample", post(routes::resample_series))
        .route("/api/v1/series/overlay", post(routes::overlay_series))
        .route("/api/v1/series/gaps", post(routes::gaps_series))
        .route("/api/v1/anomaly/assess", post(routes::assess))
        .route("/api/v1/insight/heatmap", post(routes::heatmap))
        .route("/api/v1/insight/comparison", post(routes::comparison))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "crowdpulse-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
