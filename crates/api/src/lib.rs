//! Growth Platform API Server
//!
//! REST surface for the Webkit24 marketing site:
//! - Lead capture from the contact form
//! - The deterministic blueprint wizard
//! - AI growth-plan and idea-lab proxies behind the model gateway
//! - Health endpoint with component status and storage metrics
//!
//! Rate limits are tiered per route group; the AI routes get the strictest
//! quota since every admitted request spends upstream model tokens.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod error;
pub mod rate_limit;

mod prompts;
mod routes;

pub use crate::config::{RateLimits, Settings};
pub use crate::error::ApiError;
pub use crate::rate_limit::{create_governor_config, RateLimitConfig};

use llm_gateway::LlmGateway;
use storage::Repository;

/// Application state shared across handlers
pub struct AppState {
    /// SQLite-backed lead and plan storage
    pub repository: Repository,
    /// Fallback-chain model gateway
    pub gateway: LlmGateway,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(repository: Repository, gateway: LlmGateway) -> Self {
        Self {
            repository,
            gateway,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
    pub metrics: StorageMetrics,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub database: ComponentHealth,
    pub llm_gateway: ComponentHealth,
}

/// Individual component health
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Row counts from storage
#[derive(Debug, Serialize)]
pub struct StorageMetrics {
    pub lead_count: i64,
    pub plan_count: i64,
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let database = match state.repository.ping().await {
        Ok(()) => ComponentHealth {
            status: "ok".to_string(),
            detail: None,
        },
        Err(e) => ComponentHealth {
            status: "error".to_string(),
            detail: Some(e.to_string()),
        },
    };

    let status = if database.status == "ok" {
        "healthy"
    } else {
        "degraded"
    };

    let response = HealthResponse {
        status: status.to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            database,
            llm_gateway: ComponentHealth {
                status: "ok".to_string(),
                detail: Some(format!("{} models in chain", state.gateway.models().len())),
            },
        },
        metrics: StorageMetrics {
            lead_count: state.repository.lead_count().await.unwrap_or(0),
            plan_count: state.repository.plan_count().await.unwrap_or(0),
        },
    };

    Json(response)
}

/// Create the application router with tiered rate limits.
pub fn create_router(state: Arc<AppState>, limits: &RateLimits) -> Router {
    let ai_routes = Router::new()
        .route("/api/ai/growth-plan", post(routes::growth_plan::generate_plan))
        .route("/api/ai/idea-generator", post(routes::ideas::generate_ideas))
        .layer(GovernorLayer {
            config: create_governor_config(&limits.ai),
        });

    let core_routes = Router::new()
        .route("/api/leads", post(routes::leads::create_lead))
        .route("/api/blueprint", post(routes::blueprint::generate))
        .layer(GovernorLayer {
            config: create_governor_config(&limits.general),
        });

    let health_route = Router::new()
        .route("/api/health", get(health_handler))
        .layer(GovernorLayer {
            config: create_governor_config(&RateLimitConfig::lenient()),
        });

    Router::new()
        .merge(ai_routes)
        .merge(core_routes)
        .merge(health_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until the listener fails or the process is killed.
pub async fn run_server(
    addr: &str,
    state: Arc<AppState>,
    limits: &RateLimits,
) -> anyhow::Result<()> {
    let app = create_router(state, limits);

    info!("Starting API server on {}", addr);

    // connect_info feeds the peer-IP rate limit keys.
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
