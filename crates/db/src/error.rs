use projtrack_core::error::CoreError;

/// Failure of a repository call.
///
/// Domain conditions (validation, duplicate lookup names) stay in
/// [`CoreError`] so callers can tell them apart from storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything the database reported. The original error is kept for
    /// diagnostics.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
