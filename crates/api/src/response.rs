//! Response bodies for mutating endpoints.
//!
//! Reads return the resource itself (a project array, a name array);
//! writes return a short acknowledgement.

use projtrack_core::types::DbId;
use serde::Serialize;

/// Acknowledgement for a create: the new id plus a message.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: String,
}

/// Acknowledgement for an update or delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
