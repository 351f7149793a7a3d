use std::path::PathBuf;
use std::str::FromStr;

use projtrack_core::lookup::{LookupSet, DEFAULT_TEAM_MEMBERS};
use projtrack_db::LookupSeed;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://projects.db`).
    pub database_url: String,
    /// Upper bound on pooled connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`; `*` allows any.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for every path outside `/api` and `/health`.
    pub static_dir: PathBuf,
    /// Names seeded into the team-member set at startup.
    pub team_member_defaults: Vec<String>,
    /// Names seeded into the sales-rep set at startup.
    pub sales_rep_defaults: Vec<String>,
    /// Mount the sales-rep lookup routes and seed their defaults.
    pub enable_sales_reps: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                               |
    /// | `PORT`                 | `3000`                                  |
    /// | `DATABASE_URL`         | `sqlite://projects.db`                  |
    /// | `DB_MAX_CONNECTIONS`   | `5`                                     |
    /// | `CORS_ORIGINS`         | `*`                                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    /// | `STATIC_DIR`           | `public`                                |
    /// | `TEAM_MEMBER_DEFAULTS` | `Austin Chai,Keming Zhu,Sophia Wu,...`  |
    /// | `SALES_REP_DEFAULTS`   | (none)                                  |
    /// | `ENABLE_SALES_REPS`    | `true`                                  |
    ///
    /// Panics on values that do not parse; misconfiguration should stop the
    /// process before it binds.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 3000);
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://projects.db".into());
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5);
        let cors_origins = list_var("CORS_ORIGINS").unwrap_or_else(|| vec!["*".to_string()]);
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30);
        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        let team_member_defaults = list_var("TEAM_MEMBER_DEFAULTS").unwrap_or_else(|| {
            DEFAULT_TEAM_MEMBERS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        let sales_rep_defaults = list_var("SALES_REP_DEFAULTS").unwrap_or_default();
        let enable_sales_reps = parse_var("ENABLE_SALES_REPS", true);

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            static_dir,
            team_member_defaults,
            sales_rep_defaults,
            enable_sales_reps,
        }
    }

    /// Lookup defaults to hand to the schema manager.
    pub fn lookup_seeds(&self) -> Vec<LookupSeed> {
        let mut seeds = vec![LookupSeed::new(
            LookupSet::TeamMembers,
            self.team_member_defaults.iter().cloned(),
        )];
        if self.enable_sales_reps {
            seeds.push(LookupSeed::new(
                LookupSet::SalesReps,
                self.sales_rep_defaults.iter().cloned(),
            ));
        }
        seeds
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} is invalid ({raw:?}): {e}")),
        Err(_) => default,
    }
}

/// Comma-separated list; `None` when the variable is unset, so an explicitly
/// empty value can switch defaults off.
fn list_var(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|raw| split_list(&raw))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
