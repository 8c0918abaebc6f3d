//! Web server exposing plan generation.
//!
//! Provides `POST /generate_plan` for plan generation and `GET /health`
//! as a liveness probe.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::domain::{ClientProfile, PlanResponse};
use crate::error::PlanError;
use crate::plan::PlanGenerator;

/// Shared application state. Read-only after startup.
pub struct AppState {
    pub generator: PlanGenerator,
}

// === Error Response ===

/// Error returned to clients as `{"detail": "..."}`.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        log::error!("Plan generation failed: {}", err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        log::warn!("Rejected request body: {}", rejection.body_text());
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

// === JSON Response Types ===

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate_plan", post(generate_plan))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until Ctrl-C or SIGTERM.
pub async fn run_server(state: Arc<AppState>, host: IpAddr, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);
    let addr = SocketAddr::new(host, port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Server running at http://{}", listener.local_addr()?);
    log::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    log::info!("Shutdown signal received");
}

// === API Handlers ===

/// POST /generate_plan - Compute a plan for a client profile.
async fn generate_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClientProfile>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(profile) = payload?;
    let plan = state.generator.generate(&profile)?;
    Ok(Json(plan))
}

/// GET /health - Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
