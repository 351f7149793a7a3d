//! Repository layer.
//!
//! Each repository owns a clone of the pool it was built with; every call
//! checks a connection out for the duration of one statement.

pub mod lookup_repo;
pub mod project_repo;

pub use lookup_repo::LookupRepo;
pub use project_repo::ProjectRepo;

/// SQLite expression for "now" as RFC 3339 with milliseconds, matching the
/// `created_at` column default.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
