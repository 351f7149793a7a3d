//! Project entity model and input DTO.

use projtrack_core::participants;
use projtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A row from the `projects` table, participants still encoded.
///
/// Text columns that older revisions left nullable are read as `Option`.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub project_number: String,
    pub client: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub leader: String,
    pub sales_rep: String,
    pub participants: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// A tracked project as handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub project_number: String,
    pub client: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub leader: String,
    pub sales_rep: String,
    pub participants: Vec<String>,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            participants: participants::decode(row.participants.as_deref()),
            notes: row.notes.unwrap_or_default(),
            id: row.id,
            name: row.name,
            project_number: row.project_number,
            client: row.client,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
            leader: row.leader,
            sales_rep: row.sales_rep,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Every writable field of a project.
///
/// Used for both create and update; an update overwrites every field, so
/// there is no patch variant. Missing or `null` strings become `""` and are
/// then caught by validation if the field is required, as are values that
/// are only whitespace.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "not_blank", message = "client is required"))]
    pub client: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "not_blank", message = "status is required"))]
    pub status: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "not_blank", message = "startDate is required"))]
    pub start_date: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "not_blank", message = "endDate is required"))]
    pub end_date: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "not_blank", message = "leader is required"))]
    pub leader: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub project_number: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub sales_rep: String,

    #[serde(default, deserialize_with = "participants::deserialize_lenient")]
    pub participants: Vec<String>,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub notes: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
