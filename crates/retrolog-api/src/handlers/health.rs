//! Health check handler.

use axum::Json;
use axum::extract::State;

use retrolog_database::connection::ping;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let db_ok = match ping(&state.db_pool).await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if db_ok { "connected" } else { "unavailable" }.to_string(),
    }))
}
