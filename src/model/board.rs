//! Board model.
//!
//! A board is the unit of moderation authority: it carries the moderator
//! list and the per-board block list the policy engine consults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discussion board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Board name (unique).
    pub name: String,
    /// Board description.
    pub description: Option<String>,
    /// Users holding moderator authority over this board.
    pub moderator_ids: Vec<i64>,
    /// Users this board is blocking.
    pub blocked_user_ids: Vec<i64>,
    /// Whether the board is active.
    pub is_active: bool,
    /// Board creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Build a board from creation data with an assigned ID.
    pub fn from_new(id: i64, new: &NewBoard) -> Self {
        Self {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            moderator_ids: new.moderator_ids.clone(),
            blocked_user_ids: Vec::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Check if the user is a moderator of this board.
    pub fn has_moderator(&self, user_id: i64) -> bool {
        self.moderator_ids.contains(&user_id)
    }

    /// Check if this board is blocking the user.
    pub fn is_blocking(&self, user_id: i64) -> bool {
        self.blocked_user_ids.contains(&user_id)
    }
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Board name.
    pub name: String,
    /// Board description.
    pub description: Option<String>,
    /// Initial moderators.
    pub moderator_ids: Vec<i64>,
}

impl NewBoard {
    /// Create a new board with minimal required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            moderator_ids: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an initial moderator.
    pub fn with_moderator(mut self, user_id: i64) -> Self {
        self.moderator_ids.push(user_id);
        self
    }
}
