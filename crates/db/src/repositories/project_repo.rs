//! Repository for the `projects` table.

use projtrack_core::error::CoreError;
use projtrack_core::participants;
use projtrack_core::types::DbId;
use validator::Validate;

use crate::error::RepoResult;
use crate::models::project::{Project, ProjectInput, ProjectRow};
use crate::repositories::NOW;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_number, client, status, start_date, end_date, \
                       leader, sales_rep, participants, notes, created_at, updated_at";

/// Provides CRUD operations for projects.
#[derive(Debug, Clone)]
pub struct ProjectRepo {
    pool: DbPool,
}

impl ProjectRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List all projects, most recently created first.
    ///
    /// Rows created in the same millisecond come back in whatever order
    /// SQLite yields them.
    pub async fn list(&self) -> RepoResult<Vec<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Insert a new project and return its id.
    ///
    /// `created_at` comes from the column default; `updated_at` is stamped in
    /// the same statement so both carry the same instant.
    pub async fn create(&self, input: &ProjectInput) -> RepoResult<DbId> {
        input.validate().map_err(CoreError::from)?;

        let query = format!(
            "INSERT INTO projects
                (name, project_number, client, status, start_date, end_date,
                 leader, sales_rep, participants, notes, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, {NOW})
             RETURNING id"
        );
        let id = sqlx::query_scalar::<_, DbId>(&query)
            .bind(&input.name)
            .bind(&input.project_number)
            .bind(&input.client)
            .bind(&input.status)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.leader)
            .bind(&input.sales_rep)
            .bind(participants::encode(&input.participants))
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(project_id = id, "Project created");
        Ok(id)
    }

    /// Overwrite every writable field of a project and refresh `updated_at`.
    ///
    /// Returns `false` when no row has the given id; that is not an error.
    pub async fn update(&self, id: DbId, input: &ProjectInput) -> RepoResult<bool> {
        input.validate().map_err(CoreError::from)?;

        let query = format!(
            "UPDATE projects SET
                name = ?,
                project_number = ?,
                client = ?,
                status = ?,
                start_date = ?,
                end_date = ?,
                leader = ?,
                sales_rep = ?,
                participants = ?,
                notes = ?,
                updated_at = {NOW}
             WHERE id = ?"
        );
        let result = sqlx::query(&query)
            .bind(&input.name)
            .bind(&input.project_number)
            .bind(&input.client)
            .bind(&input.status)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.leader)
            .bind(&input.sales_rep)
            .bind(participants::encode(&input.participants))
            .bind(&input.notes)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let updated = result.rows_affected() > 0;
        tracing::debug!(project_id = id, updated, "Project update applied");
        Ok(updated)
    }

    /// Delete a project by id. Returns `true` if a row was removed.
    pub async fn delete(&self, id: DbId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
