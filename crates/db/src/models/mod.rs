//! Row structs and input DTOs.
//!
//! - A `FromRow` row struct mirroring the table
//! - A `Serialize` entity handed to callers
//! - A `Deserialize` + `Validate` input for writes

pub mod project;
