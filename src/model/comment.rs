//! Comment model and commentable references.
//!
//! Comments attach to a parent commentable. Only some commentable kinds
//! live under a board; the kind declares that capability explicitly, and
//! a comment derives its moderating board from the parent reference.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::moderation::{Moderatable, SoftDelete};

/// Kind of entity a comment can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentableKind {
    /// A board post; moderated by the board's moderators.
    Post,
    /// A standalone page; carries comments but no board moderation.
    Page,
}

impl CommentableKind {
    /// Whether entities of this kind are subject to board moderation.
    pub fn has_board_moderation(&self) -> bool {
        matches!(self, CommentableKind::Post)
    }

    /// Convert to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentableKind::Post => "post",
            CommentableKind::Page => "page",
        }
    }
}

impl fmt::Display for CommentableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommentableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" => Ok(CommentableKind::Post),
            "page" => Ok(CommentableKind::Page),
            _ => Err(format!("unknown commentable kind: {s}")),
        }
    }
}

/// Reference from a comment to its parent commentable.
///
/// The parent's board is denormalized here at creation time so that
/// policy checks need no extra fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentableRef {
    /// Kind of the parent entity.
    pub kind: CommentableKind,
    /// ID of the parent entity.
    pub id: i64,
    /// Board of the parent entity, for kinds under board moderation.
    pub board_id: Option<i64>,
}

impl CommentableRef {
    /// Reference to a post and its board.
    pub fn post(id: i64, board_id: i64) -> Self {
        Self {
            kind: CommentableKind::Post,
            id,
            board_id: Some(board_id),
        }
    }

    /// Reference to a page (no board moderation).
    pub fn page(id: i64) -> Self {
        Self {
            kind: CommentableKind::Page,
            id,
            board_id: None,
        }
    }

    /// Board moderating the parent, if its kind supports moderation.
    pub fn moderated_board_id(&self) -> Option<i64> {
        if self.kind.has_board_moderation() {
            self.board_id
        } else {
            None
        }
    }
}

/// A comment on a commentable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// Parent commentable.
    pub parent: CommentableRef,
    /// User who created the comment (immutable).
    pub author_id: i64,
    /// Comment body/content.
    pub body: String,
    /// Comment creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Soft-delete ledger entry.
    #[serde(default)]
    pub deletion: SoftDelete,
}

impl Comment {
    /// Build an active comment from creation data with an assigned ID.
    pub fn from_new(id: i64, new: &NewComment) -> Self {
        Self {
            id,
            parent: new.parent,
            author_id: new.author_id,
            body: new.body.clone(),
            created_at: Utc::now(),
            deletion: SoftDelete::new(),
        }
    }
}

impl Moderatable for Comment {
    fn author_id(&self) -> i64 {
        self.author_id
    }

    fn moderated_board_id(&self) -> Option<i64> {
        self.parent.moderated_board_id()
    }

    fn deletion(&self) -> &SoftDelete {
        &self.deletion
    }

    fn deletion_mut(&mut self) -> &mut SoftDelete {
        &mut self.deletion
    }
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Parent commentable.
    pub parent: CommentableRef,
    /// User creating the comment.
    pub author_id: i64,
    /// Comment body/content.
    pub body: String,
}

impl NewComment {
    /// Create a new comment with required fields.
    pub fn new(parent: CommentableRef, author_id: i64, body: impl Into<String>) -> Self {
        Self {
            parent,
            author_id,
            body: body.into(),
        }
    }
}
