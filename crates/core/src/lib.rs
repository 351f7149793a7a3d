//! Domain building blocks shared by the storage and HTTP layers.
//!
//! Nothing in this crate knows about SQL or HTTP: it holds the error
//! taxonomy, the primitive id/timestamp types, the participant codec and
//! the catalogue of lookup sets.

pub mod error;
pub mod lookup;
pub mod participants;
pub mod types;
