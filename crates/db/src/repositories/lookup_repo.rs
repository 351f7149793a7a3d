//! Repository for lookup-set tables (`team_members`, `sales_reps`).

use projtrack_core::error::CoreError;
use projtrack_core::lookup::{self, LookupSet};
use projtrack_core::types::DbId;

use crate::error::RepoResult;
use crate::DbPool;

/// Append-only access to one lookup set: names are never updated or deleted.
#[derive(Debug, Clone)]
pub struct LookupRepo {
    pool: DbPool,
    set: LookupSet,
}

impl LookupRepo {
    pub fn new(pool: DbPool, set: LookupSet) -> Self {
        Self { pool, set }
    }

    /// All names in creation order.
    pub async fn list(&self) -> RepoResult<Vec<String>> {
        let query = format!(
            "SELECT {column} FROM {table} ORDER BY id",
            column = self.set.unique_column(),
            table = self.set.table(),
        );
        let names = sqlx::query_scalar::<_, String>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    /// Add a name and return its id.
    ///
    /// The unique constraint is the source of truth: a violation comes back
    /// as [`CoreError::DuplicateName`] and leaves the table untouched.
    pub async fn add(&self, name: &str) -> RepoResult<DbId> {
        lookup::validate_name(self.set, name)?;

        let query = format!(
            "INSERT INTO {table} ({column}) VALUES (?) RETURNING id",
            column = self.set.unique_column(),
            table = self.set.table(),
        );
        match sqlx::query_scalar::<_, DbId>(&query)
            .bind(name)
            .fetch_one(&self.pool)
            .await
        {
            Ok(id) => {
                tracing::debug!(table = self.set.table(), id, "Lookup name added");
                Ok(id)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(CoreError::DuplicateName {
                    set: self.set.table(),
                    name: name.to_string(),
                }
                .into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
