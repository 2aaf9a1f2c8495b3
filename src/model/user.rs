//! User model.
//!
//! Users are owned by the surrounding application; the moderation core
//! only reads the two capability flags (`is_admin`, `is_blocked`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered forum user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Whether the user holds site-wide admin authority.
    pub is_admin: bool,
    /// Whether the user is blocked site-wide.
    pub is_blocked: bool,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with neither admin nor blocked flags set.
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            is_admin: false,
            is_blocked: false,
            created_at: Utc::now(),
        }
    }

    /// Set the admin flag.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Set the blocked flag.
    pub fn with_blocked(mut self, is_blocked: bool) -> Self {
        self.is_blocked = is_blocked;
        self
    }
}
