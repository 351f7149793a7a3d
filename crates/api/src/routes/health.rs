//! Liveness and schema revision, mounted at the root outside `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Latest applied migration, `None` if it could not be read.
    pub schema_version: Option<i64>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = projtrack_db::health_check(&state.pool).await.is_ok();
    let schema_version = if db_healthy {
        projtrack_db::schema::current_version(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Could not read schema version");
                None
            })
    } else {
        None
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
