//! Catalogue of lookup sets.
//!
//! A lookup set is an append-only vocabulary of unique names (team members,
//! sales reps) offered as choices on a project. Every set has the same
//! shape, so the storage layer is parameterised by [`LookupSet`] instead of
//! having one repository per table.

use crate::error::CoreError;

/// Names seeded into the team-member set on first start.
pub const DEFAULT_TEAM_MEMBERS: &[&str] =
    &["Austin Chai", "Keming Zhu", "Sophia Wu", "Tao Shi", "Xi Liu"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSet {
    TeamMembers,
    SalesReps,
}

impl LookupSet {
    pub const ALL: [LookupSet; 2] = [LookupSet::TeamMembers, LookupSet::SalesReps];

    /// Backing table. Only ever interpolated from this closed set.
    pub const fn table(self) -> &'static str {
        match self {
            LookupSet::TeamMembers => "team_members",
            LookupSet::SalesReps => "sales_reps",
        }
    }

    /// Column carrying the unique constraint.
    pub const fn unique_column(self) -> &'static str {
        "name"
    }

    /// Human-readable singular, used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            LookupSet::TeamMembers => "team member",
            LookupSet::SalesReps => "sales rep",
        }
    }
}

/// A lookup name must not be empty. Case and inner whitespace are kept as-is.
pub fn validate_name(set: LookupSet, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{} name is required",
            set.label()
        )));
    }
    Ok(())
}
