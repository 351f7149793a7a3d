//! Schema manager.
//!
//! Brings the database to the current schema through the versioned
//! migrations in `db/migrations`, then seeds every configured lookup set.
//! Both steps are idempotent and run once at startup, before the HTTP
//! listener is bound.
//!
//! A database written before migrations existed has a camelCase `projects`
//! table (`startDate`, `createdAt`, ...). It is parked under
//! [`LEGACY_PROJECTS`] before the migrations run and its rows are copied
//! into the current table afterwards.

use projtrack_core::lookup::{self, LookupSet};
use sqlx::migrate::{MigrateError, Migrator};

use crate::DbPool;

/// Embedded migrations, one file per schema revision.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Name a pre-migration `projects` table is parked under while the current
/// schema is built.
pub const LEGACY_PROJECTS: &str = "projects_legacy";

/// Schema initialisation failures. All of them are fatal to startup.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Migration failed: {0}")]
    Migrate(#[from] MigrateError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Default names for one lookup set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSeed {
    pub set: LookupSet,
    pub names: Vec<String>,
}

impl LookupSeed {
    pub fn new<I, S>(set: LookupSet, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            set,
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of the seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Names written by this pass.
    pub inserted: u64,
    /// Names that were already present.
    pub existing: u64,
    /// Names that could not be written. Logged, never fatal.
    pub failed: u64,
}

/// Apply pending migrations and seed lookup defaults.
///
/// A migration failure aborts; a failure seeding one name is logged and the
/// remaining names are still attempted.
pub async fn ensure_schema(pool: &DbPool, seeds: &[LookupSeed]) -> Result<SeedReport, SchemaError> {
    park_legacy_projects(pool).await?;
    run_migrations(pool).await?;
    import_legacy_projects(pool).await?;

    let mut report = SeedReport::default();
    for seed in seeds {
        seed_lookup(pool, seed, &mut report).await?;
    }

    tracing::info!(
        inserted = report.inserted,
        existing = report.existing,
        failed = report.failed,
        "Lookup defaults seeded"
    );
    Ok(report)
}

/// Apply any migrations not yet recorded in `_sqlx_migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!(revisions = MIGRATOR.iter().count(), "Schema is current");
    Ok(())
}

/// Rename a pre-migration `projects` table out of the way. A fresh database,
/// or one already managed by migrations, is left alone.
async fn park_legacy_projects(pool: &DbPool) -> Result<(), sqlx::Error> {
    let legacy: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM pragma_table_info('projects') WHERE name = 'createdAt')",
    )
    .fetch_one(pool)
    .await?;
    if !legacy {
        return Ok(());
    }

    sqlx::query(&format!("ALTER TABLE projects RENAME TO {LEGACY_PROJECTS}"))
        .execute(pool)
        .await?;
    tracing::info!(table = LEGACY_PROJECTS, "Parked pre-migration projects table");
    Ok(())
}

/// Copy parked legacy rows into the current `projects` table and drop the
/// parked table, in one transaction.
///
/// Ids are kept. `createdAt` was written as `CURRENT_TIMESTAMP`
/// (`YYYY-MM-DD HH:MM:SS`, UTC) and is rewritten as RFC 3339; values SQLite
/// cannot read as a time fall back to the import time.
async fn import_legacy_projects(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let parked: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
    )
    .bind(LEGACY_PROJECTS)
    .fetch_one(pool)
    .await?;
    if !parked {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let moved = sqlx::query(&format!(
        "INSERT INTO projects
             (id, name, client, status, start_date, end_date, leader, participants, notes, created_at)
         SELECT id, name, client, status, startDate, endDate, leader,
                COALESCE(participants, '[]'),
                COALESCE(notes, ''),
                COALESCE(
                    strftime('%Y-%m-%dT%H:%M:%fZ', createdAt),
                    strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                )
         FROM {LEGACY_PROJECTS}
         ORDER BY id"
    ))
    .execute(&mut *tx)
    .await?
    .rows_affected();

    sqlx::query("UPDATE projects SET updated_at = created_at WHERE updated_at IS NULL")
        .execute(&mut *tx)
        .await?;
    sqlx::query(&format!("DROP TABLE {LEGACY_PROJECTS}"))
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(rows = moved, "Imported pre-migration projects");
    Ok(moved)
}

/// Highest successfully applied migration version, `None` on an empty
/// database.
pub async fn current_version(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1")
        .fetch_one(pool)
        .await
}

/// Insert each default name unless it is already present.
///
/// Holds one pooled connection for the whole set; only failing to acquire
/// it is surfaced.
async fn seed_lookup(
    pool: &DbPool,
    seed: &LookupSeed,
    report: &mut SeedReport,
) -> Result<(), sqlx::Error> {
    let query = format!(
        "INSERT OR IGNORE INTO {} ({}) VALUES (?)",
        seed.set.table(),
        seed.set.unique_column()
    );

    let mut conn = pool.acquire().await?;
    for name in &seed.names {
        if let Err(err) = lookup::validate_name(seed.set, name) {
            tracing::warn!(table = seed.set.table(), error = %err, "Skipping invalid default");
            report.failed += 1;
            continue;
        }

        match sqlx::query(&query).bind(name).execute(&mut *conn).await {
            Ok(result) if result.rows_affected() > 0 => report.inserted += 1,
            Ok(_) => report.existing += 1,
            Err(err) => {
                tracing::warn!(table = seed.set.table(), %name, error = %err, "Failed to seed default");
                report.failed += 1;
            }
        }
    }
    Ok(())
}
