//! User records as served by the user service

use crate::errors::ValidationError;
use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A user snapshot
///
/// Timestamps are microseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
}

impl NewUser {
    /// Validate a raw name. Surrounding whitespace is trimmed and the
    /// remainder must be non-empty.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
