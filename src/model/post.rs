//! Post model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::moderation::{Moderatable, SoftDelete};

/// A post on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Board this post belongs to.
    pub board_id: i64,
    /// User who created the post (immutable).
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Post body/content.
    pub body: String,
    /// Post creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Soft-delete ledger entry.
    #[serde(default)]
    pub deletion: SoftDelete,
}

impl Post {
    /// Build an active post from creation data with an assigned ID.
    pub fn from_new(id: i64, new: &NewPost) -> Self {
        Self {
            id,
            board_id: new.board_id,
            author_id: new.author_id,
            title: new.title.clone(),
            body: new.body.clone(),
            created_at: Utc::now(),
            deletion: SoftDelete::new(),
        }
    }
}

impl Moderatable for Post {
    fn author_id(&self) -> i64 {
        self.author_id
    }

    fn moderated_board_id(&self) -> Option<i64> {
        Some(self.board_id)
    }

    fn deletion(&self) -> &SoftDelete {
        &self.deletion
    }

    fn deletion_mut(&mut self) -> &mut SoftDelete {
        &mut self.deletion
    }
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Board to post in.
    pub board_id: i64,
    /// User creating the post.
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Post body/content.
    pub body: String,
}

impl NewPost {
    /// Create a new post with required fields.
    pub fn new(
        board_id: i64,
        author_id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            board_id,
            author_id,
            title: title.into(),
            body: body.into(),
        }
    }
}
