//! Handlers shared by every lookup set (`/team-members`, `/sales-reps`).
//!
//! The set is bound when the route is mounted, see [`crate::routes::lookup`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use projtrack_core::lookup::LookupSet;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// Body of a lookup insert.
#[derive(Debug, Deserialize)]
pub struct AddLookupName {
    #[serde(default)]
    pub name: String,
}

/// GET /api/{set}
pub async fn list(State(state): State<AppState>, set: LookupSet) -> AppResult<Json<Vec<String>>> {
    let names = state.lookup(set).list().await?;
    Ok(Json(names))
}

/// POST /api/{set}
pub async fn add(
    State(state): State<AppState>,
    set: LookupSet,
    Json(input): Json<AddLookupName>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.lookup(set).add(&input.name).await?;
    tracing::info!(table = set.table(), id, "Lookup name added");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: format!("{} added", set.label()),
        }),
    ))
}
