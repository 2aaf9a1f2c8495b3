//! Moderation core: soft-delete ledger, policy engine, and service.

mod ledger;
mod locks;
mod oracle;
pub mod policy;
mod service;

pub use ledger::{
    DeleterRole, DeletionRecord, DeletionState, InvalidTransition, SoftDelete,
};
pub use locks::{ContentKind, EntityLocks};
pub use oracle::{BoardDirectory, MembershipOracle};
pub use policy::{can_delete, can_resume, can_review, is_supervisor, Decision, DenialReason};
pub use service::ModerationService;

/// Capability interface for content the policy engine can act on.
///
/// Implemented by posts and comments. An entity whose kind does not
/// support board moderation (e.g. a comment on a page) returns `None`
/// from [`moderated_board_id`](Moderatable::moderated_board_id), which
/// removes moderator authority over it.
pub trait Moderatable {
    /// ID of the user who created the entity.
    fn author_id(&self) -> i64;

    /// Board holding moderation authority over the entity, if any.
    fn moderated_board_id(&self) -> Option<i64>;

    /// The entity's soft-delete ledger.
    fn deletion(&self) -> &SoftDelete;

    /// Mutable access to the entity's soft-delete ledger.
    fn deletion_mut(&mut self) -> &mut SoftDelete;
}
