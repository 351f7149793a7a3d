//! Route definitions for a lookup set.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use projtrack_core::lookup::LookupSet;

use crate::handlers::lookup::{self, AddLookupName};
use crate::state::AppState;

/// Routes mounted at the set's path, with `set` bound into each handler.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> add
/// ```
pub fn router(set: LookupSet) -> Router<AppState> {
    Router::new().route(
        "/",
        get(move |state: State<AppState>| lookup::list(state, set)).post(
            move |state: State<AppState>, body: Json<AddLookupName>| lookup::add(state, set, body),
        ),
    )
}
