pub mod health;
pub mod lookup;
pub mod project;

use axum::Router;
use projtrack_core::lookup::LookupSet;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list, create
/// /projects/{id}            update (full overwrite), delete
///
/// /team-members             list, add
/// /sales-reps               list, add (only when sales reps are enabled)
/// ```
pub fn api_routes(enable_sales_reps: bool) -> Router<AppState> {
    let router = Router::new()
        .nest("/projects", project::router())
        .nest("/team-members", lookup::router(LookupSet::TeamMembers));

    if enable_sales_reps {
        router.nest("/sales-reps", lookup::router(LookupSet::SalesReps))
    } else {
        router
    }
}
