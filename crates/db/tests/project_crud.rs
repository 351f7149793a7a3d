//! Integration tests for the project repository.
//!
//! Exercises create/list/update/delete against a real SQLite database with
//! the workspace migrations applied.

use assert_matches::assert_matches;
use projtrack_core::error::CoreError;
use projtrack_db::error::RepoError;
use projtrack_db::models::project::ProjectInput;
use projtrack_db::repositories::ProjectRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn site_survey() -> ProjectInput {
    ProjectInput {
        name: "Site Survey".to_string(),
        client: "Acme".to_string(),
        status: "active".to_string(),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-06-01".to_string(),
        leader: "Austin Chai".to_string(),
        participants: vec!["Austin Chai".to_string(), "Xi Liu".to_string()],
        ..Default::default()
    }
}

fn named(name: &str) -> ProjectInput {
    ProjectInput {
        name: name.to_string(),
        participants: Vec::new(),
        ..site_survey()
    }
}

async fn set_created_at(pool: &SqlitePool, id: i64, created_at: &str) {
    sqlx::query("UPDATE projects SET created_at = ? WHERE id = ?")
        .bind(created_at)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_list_site_survey(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);

    let id = repo.create(&site_survey()).await.unwrap();
    assert!(id > 0);

    let projects = repo.list().await.unwrap();
    let first = &projects[0];
    assert_eq!(first.id, id);
    assert_eq!(first.name, "Site Survey");
    assert_eq!(first.participants, vec!["Austin Chai", "Xi Liu"]);
    assert_eq!(first.project_number, "");
    assert_eq!(first.notes, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_optional_fields_take_defaults(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    repo.create(&named("Defaults")).await.unwrap();

    let project = repo.list().await.unwrap().remove(0);
    assert_eq!(project.project_number, "");
    assert_eq!(project.sales_rep, "");
    assert_eq!(project.notes, "");
    assert!(project.participants.is_empty());
    assert_eq!(project.updated_at, Some(project.created_at));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_participants_stored_as_empty_array(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool.clone());
    let id = repo.create(&named("Nobody")).await.unwrap();

    let raw: (String,) = sqlx::query_as("SELECT participants FROM projects WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(raw.0, "[]");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_by_created_at_desc(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool.clone());
    let oldest = repo.create(&named("Oldest")).await.unwrap();
    let newest = repo.create(&named("Newest")).await.unwrap();
    let middle = repo.create(&named("Middle")).await.unwrap();

    set_created_at(&pool, oldest, "2024-01-01T00:00:00.000Z").await;
    set_created_at(&pool, middle, "2024-02-01T00:00:00.000Z").await;
    set_created_at(&pool, newest, "2024-03-01T00:00:00.000Z").await;

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newest, middle, oldest]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_participants_are_kept(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let input = ProjectInput {
        participants: vec!["Xi Liu".into(), "Tao Shi".into(), "Xi Liu".into()],
        ..named("Dupes")
    };
    repo.create(&input).await.unwrap();

    let project = repo.list().await.unwrap().remove(0);
    assert_eq!(project.participants, vec!["Xi Liu", "Tao Shi", "Xi Liu"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_legacy_participants_list_as_empty(pool: SqlitePool) {
    sqlx::query(
        "INSERT INTO projects (name, client, status, start_date, end_date, leader, participants)
         VALUES ('Legacy', 'Acme', 'done', '2020-01-01', '2020-02-01', 'Tao Shi', 'Tao Shi;Xi Liu')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let projects = ProjectRepo::new(pool).list().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Legacy");
    assert!(projects[0].participants.is_empty());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_required_fields_is_rejected(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let input = ProjectInput {
        leader: String::new(),
        ..site_survey()
    };

    let result = repo.create(&input).await;
    assert_matches!(
        result,
        Err(RepoError::Core(CoreError::Validation(msg))) if msg.contains("leader")
    );
    assert!(repo.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_blank_required_fields_is_rejected(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let input = ProjectInput {
        name: "   ".to_string(),
        client: " ".to_string(),
        status: " ".to_string(),
        start_date: " ".to_string(),
        end_date: " ".to_string(),
        leader: " ".to_string(),
        ..site_survey()
    };

    let result = repo.create(&input).await;
    assert_matches!(
        result,
        Err(RepoError::Core(CoreError::Validation(msg))) if msg.contains("name is required")
    );
    assert!(repo.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_required_fields_is_rejected(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let id = repo.create(&site_survey()).await.unwrap();

    let result = repo.update(id, &ProjectInput::default()).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::Validation(_))));

    let project = repo.list().await.unwrap().remove(0);
    assert_eq!(project.name, "Site Survey");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_every_field(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let id = repo
        .create(&ProjectInput {
            participants: vec!["A".into(), "B".into()],
            notes: "first draft".into(),
            ..site_survey()
        })
        .await
        .unwrap();

    let replacement = ProjectInput {
        name: "Site Survey II".into(),
        project_number: "P-042".into(),
        client: "Globex".into(),
        status: "closed".into(),
        start_date: "2024-02-01".into(),
        end_date: "2024-07-01".into(),
        leader: "Xi Liu".into(),
        sales_rep: "Dana".into(),
        participants: vec!["C".into()],
        notes: String::new(),
    };
    assert!(repo.update(id, &replacement).await.unwrap());

    let project = repo.list().await.unwrap().remove(0);
    assert_eq!(project.id, id);
    assert_eq!(project.name, "Site Survey II");
    assert_eq!(project.project_number, "P-042");
    assert_eq!(project.client, "Globex");
    assert_eq!(project.status, "closed");
    assert_eq!(project.start_date, "2024-02-01");
    assert_eq!(project.end_date, "2024-07-01");
    assert_eq!(project.leader, "Xi Liu");
    assert_eq!(project.sales_rep, "Dana");
    assert_eq!(project.participants, vec!["C"]);
    assert_eq!(project.notes, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_refreshes_updated_at_only(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool.clone());
    let id = repo.create(&site_survey()).await.unwrap();
    sqlx::query(
        "UPDATE projects SET created_at = '2024-01-01T00:00:00.000Z',
                             updated_at = '2024-01-01T00:00:00.000Z' WHERE id = ?",
    )
    .bind(id)
    .execute(&pool)
    .await
    .unwrap();

    repo.update(id, &site_survey()).await.unwrap();

    let project = repo.list().await.unwrap().remove(0);
    assert_eq!(project.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert!(project.updated_at.unwrap() > project.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_id_is_silent_noop(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let updated = repo.update(999_999, &site_survey()).await.unwrap();
    assert!(!updated);
    assert!(repo.list().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_idempotent(pool: SqlitePool) {
    let repo = ProjectRepo::new(pool);
    let keep = repo.create(&named("Keep")).await.unwrap();
    let gone = repo.create(&named("Drop")).await.unwrap();

    assert!(repo.delete(gone).await.unwrap());
    assert!(!repo.delete(gone).await.unwrap());

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![keep]);
}
