//! Soft-delete ledger for moderatable content.
//!
//! Tracks whether an entity is visible, who deleted it and in what role,
//! and enforces the valid transitions between those states. The ledger
//! does not decide permissions; see [`policy`](crate::moderation::policy)
//! for that.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deletion state of a post or comment.
///
/// Stored as the integer codes 0/1/2 in the document store. Exactly one
/// state holds at any time; deletion is a flag, never physical removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DeletionState {
    /// Visible content.
    #[default]
    Active = 0,
    /// Hidden by its own author.
    DeletedByAuthor = 1,
    /// Hidden by a board moderator or an administrator.
    DeletedByModerator = 2,
}

impl DeletionState {
    /// Integer code used by the document store.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Convert to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionState::Active => "active",
            DeletionState::DeletedByAuthor => "deleted_by_author",
            DeletionState::DeletedByModerator => "deleted_by_moderator",
        }
    }

    /// Check whether this state is one of the deleted states.
    pub fn is_deleted(&self) -> bool {
        *self != DeletionState::Active
    }
}

impl fmt::Display for DeletionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<DeletionState> for u8 {
    fn from(state: DeletionState) -> u8 {
        state.code()
    }
}

impl TryFrom<u8> for DeletionState {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DeletionState::Active),
            1 => Ok(DeletionState::DeletedByAuthor),
            2 => Ok(DeletionState::DeletedByModerator),
            _ => Err(format!("unknown deletion state code: {code}")),
        }
    }
}

impl FromStr for DeletionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(DeletionState::Active),
            "deleted_by_author" => Ok(DeletionState::DeletedByAuthor),
            "deleted_by_moderator" => Ok(DeletionState::DeletedByModerator),
            _ => Err(format!("unknown deletion state: {s}")),
        }
    }
}

/// Role in which a deletion was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleterRole {
    /// The entity's own author retracted it.
    Author,
    /// A board moderator or administrator removed it.
    Moderator,
}

impl DeleterRole {
    /// Convert to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleterRole::Author => "author",
            DeleterRole::Moderator => "moderator",
        }
    }

    /// The deletion state this role's delete transitions to.
    pub fn target_state(&self) -> DeletionState {
        match self {
            DeleterRole::Author => DeletionState::DeletedByAuthor,
            DeleterRole::Moderator => DeletionState::DeletedByModerator,
        }
    }
}

impl fmt::Display for DeleterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit record for the current deletion: who removed the entity, in what
/// role, when, and for what stated reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionRecord {
    /// ID of the user who performed the deletion.
    pub deleted_by: i64,
    /// Role the deleter acted in.
    pub role: DeleterRole,
    /// Optional stated reason (typically for moderator deletions).
    pub reason: Option<String>,
    /// When the deletion happened.
    pub deleted_at: DateTime<Utc>,
}

/// Transition attempted from a state that does not permit it.
///
/// Surfaces check/apply desynchronization bugs; callers are expected to
/// consult the policy engine first, so hitting this is an internal error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {action} from state {from}")]
pub struct InvalidTransition {
    /// State the ledger was in when the transition was attempted.
    pub from: DeletionState,
    /// The attempted action ("delete" or "resume").
    pub action: &'static str,
}

/// Soft-delete ledger entry carried by every moderatable entity.
///
/// Invariant: `record` is `Some` exactly when the state is a deleted one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftDelete {
    state: DeletionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    record: Option<DeletionRecord>,
}

impl SoftDelete {
    /// Create a ledger entry in the `Active` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current deletion state.
    pub fn state(&self) -> DeletionState {
        self.state
    }

    /// Audit record of the current deletion, if the entity is deleted.
    pub fn record(&self) -> Option<&DeletionRecord> {
        self.record.as_ref()
    }

    /// Check whether the entity is currently deleted.
    pub fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }

    /// Transition from `Active` to the deleted state matching `role`.
    ///
    /// Records who deleted the entity and why. Fails with
    /// [`InvalidTransition`] if the entity is already deleted.
    pub fn mark_deleted(
        &mut self,
        deleted_by: i64,
        role: DeleterRole,
        reason: Option<String>,
    ) -> Result<(), InvalidTransition> {
        if self.state != DeletionState::Active {
            return Err(InvalidTransition {
                from: self.state,
                action: "delete",
            });
        }

        self.state = role.target_state();
        self.record = Some(DeletionRecord {
            deleted_by,
            role,
            reason,
            deleted_at: Utc::now(),
        });
        Ok(())
    }

    /// Transition from a deleted state back to `Active`.
    ///
    /// Clears the deletion record, leaving the ledger indistinguishable
    /// from one that was never deleted. Fails with [`InvalidTransition`]
    /// when called on an active entity.
    pub fn mark_resumed(&mut self) -> Result<(), InvalidTransition> {
        if self.state == DeletionState::Active {
            return Err(InvalidTransition {
                from: self.state,
                action: "resume",
            });
        }

        self.state = DeletionState::Active;
        self.record = None;
        Ok(())
    }
}
