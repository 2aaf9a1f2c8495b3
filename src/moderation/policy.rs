//! Moderation policy engine.
//!
//! Pure decision functions answering "may this actor perform this action
//! on this entity?". Every check takes the actor explicitly (no ambient
//! current-user state), consults the membership oracle fresh (moderator
//! lists change between requests), and returns a [`Decision`] rather than
//! an error, so callers can surface the denial reason to the user.
//!
//! Denials carry no side effects; the soft-delete ledger is only touched
//! by the apply path in [`service`](crate::moderation::service).

use thiserror::Error;

use crate::model::User;

use super::ledger::DeletionState;
use super::oracle::MembershipOracle;
use super::Moderatable;

/// Reason a moderation action was denied.
///
/// The Display strings are the English fallback; `message_key` points at
/// the localized catalog entry for the same reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Actor is not authenticated.
    #[error("you must be signed in to perform this action")]
    NotSignedIn,

    /// Actor is neither the author, a board moderator, nor an admin.
    #[error("you do not have permission to delete this comment")]
    DeleteNotPermitted,

    /// No resume rule grants this actor a restore right for the entity's
    /// current deletion state.
    #[error("you do not have permission to perform this action")]
    ResumeNotPermitted,

    /// Actor may not access the board's moderation queue.
    #[error("you do not have permission to access the moderation queue")]
    ReviewNotPermitted,
}

impl DenialReason {
    /// Catalog key for the localized message.
    pub fn message_key(&self) -> &'static str {
        match self {
            DenialReason::NotSignedIn => "moderation.not_signed_in",
            DenialReason::DeleteNotPermitted => "moderation.delete_denied",
            DenialReason::ResumeNotPermitted => "moderation.resume_denied",
            DenialReason::ReviewNotPermitted => "moderation.review_denied",
        }
    }
}

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Action is allowed.
    Allow,
    /// Action is denied for the given reason.
    Deny(DenialReason),
}

impl Decision {
    /// Check if the action is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// The denial reason, if the action was denied.
    pub fn reason(&self) -> Option<DenialReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(*reason),
        }
    }
}

/// Check if the actor holds moderation authority over the entity.
///
/// True only when the entity's kind supports board moderation and the
/// oracle confirms the actor moderates the owning board. Recomputed on
/// every call; moderator lists are never cached here.
pub fn is_supervisor<O, T>(oracle: &O, actor: &User, target: &T) -> bool
where
    O: MembershipOracle + ?Sized,
    T: Moderatable + ?Sized,
{
    match target.moderated_board_id() {
        Some(board_id) => oracle.has_moderator(board_id, actor.id),
        None => false,
    }
}

/// Check if the owning board (if any) is blocking the actor.
fn board_is_blocking<O, T>(oracle: &O, actor: &User, target: &T) -> bool
where
    O: MembershipOracle + ?Sized,
    T: Moderatable + ?Sized,
{
    match target.moderated_board_id() {
        Some(board_id) => oracle.is_blocking(board_id, actor.id),
        None => false,
    }
}

/// Decide whether the actor may delete the entity.
///
/// Self-authorship, moderation authority over the owning board, and admin
/// authority are the only three grounds. The entity's current deletion
/// state is not consulted; the ledger rejects a delete of an already
/// deleted entity at apply time.
pub fn can_delete<O, T>(oracle: &O, actor: Option<&User>, target: &T) -> Decision
where
    O: MembershipOracle + ?Sized,
    T: Moderatable + ?Sized,
{
    let Some(actor) = actor else {
        return Decision::Deny(DenialReason::NotSignedIn);
    };

    if is_supervisor(oracle, actor, target) || target.author_id() == actor.id || actor.is_admin {
        Decision::Allow
    } else {
        Decision::Deny(DenialReason::DeleteNotPermitted)
    }
}

/// Decide whether the actor may resume (restore) the entity.
///
/// Restore rights depend on who deleted the entity:
/// - a board moderator may resume moderator deletions only;
/// - the author may resume their own self-deletion, unless blocked
///   globally or by the owning board;
/// - an admin mirrors the moderator path, not the author path.
///
/// In particular an admin may NOT resume an author's self-deletion; the
/// asymmetry is contractual.
pub fn can_resume<O, T>(oracle: &O, actor: Option<&User>, target: &T) -> Decision
where
    O: MembershipOracle + ?Sized,
    T: Moderatable + ?Sized,
{
    let Some(actor) = actor else {
        return Decision::Deny(DenialReason::NotSignedIn);
    };

    let state = target.deletion().state();

    let as_moderator =
        is_supervisor(oracle, actor, target) && state == DeletionState::DeletedByModerator;
    let as_author = actor.id == target.author_id()
        && state == DeletionState::DeletedByAuthor
        && !actor.is_blocked
        && !board_is_blocking(oracle, actor, target);
    let as_admin = actor.is_admin && state == DeletionState::DeletedByModerator;

    if as_moderator || as_author || as_admin {
        Decision::Allow
    } else {
        Decision::Deny(DenialReason::ResumeNotPermitted)
    }
}

/// Decide whether the actor may view a board's moderation queue.
///
/// Admins and moderators of the board are admitted; everyone else is
/// denied.
pub fn can_review<O>(oracle: &O, actor: Option<&User>, board_id: i64) -> Decision
where
    O: MembershipOracle + ?Sized,
{
    let Some(actor) = actor else {
        return Decision::Deny(DenialReason::NotSignedIn);
    };

    if actor.is_admin || oracle.has_moderator(board_id, actor.id) {
        Decision::Allow
    } else {
        Decision::Deny(DenialReason::ReviewNotPermitted)
    }
}
