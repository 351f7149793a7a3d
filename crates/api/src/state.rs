use std::sync::Arc;

use projtrack_core::lookup::LookupSet;
use projtrack_db::repositories::{LookupRepo, ProjectRepo};
use projtrack_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and every repository
/// holds a clone of it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub projects: ProjectRepo,
    pub team_members: LookupRepo,
    pub sales_reps: LookupRepo,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            projects: ProjectRepo::new(pool.clone()),
            team_members: LookupRepo::new(pool.clone(), LookupSet::TeamMembers),
            sales_reps: LookupRepo::new(pool.clone(), LookupSet::SalesReps),
            config: Arc::new(config),
            pool,
        }
    }

    /// Repository for the given lookup set.
    pub fn lookup(&self, set: LookupSet) -> &LookupRepo {
        match set {
            LookupSet::TeamMembers => &self.team_members,
            LookupSet::SalesReps => &self.sales_reps,
        }
    }
}
