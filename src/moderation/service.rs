//! Moderation service.
//!
//! The surface the dispatching layer talks to: policy checks with
//! localized denial messages, ledger transitions with role inference, and
//! guarded delete/resume sequences that stay serializable per entity.

use tracing::{debug, info};

use crate::error::{GavelError, Result};
use crate::i18n::I18n;
use crate::model::{Comment, Post, User};
use crate::store::ContentStore;

use super::ledger::DeleterRole;
use super::locks::{ContentKind, EntityLocks};
use super::oracle::MembershipOracle;
use super::policy::{self, Decision, DenialReason};
use super::Moderatable;

/// High-level moderation operations over a membership oracle.
///
/// Policy checks (`can_*`) are pure and side-effect free; `apply_*`
/// transition the ledger of an already-fetched entity; the guarded
/// `delete_*`/`resume_*` operations run the whole fetch → check → apply →
/// write sequence under the entity's lock so concurrent requests for the
/// same entity cannot interleave between check and write.
pub struct ModerationService<O: MembershipOracle> {
    oracle: O,
    messages: I18n,
    locks: EntityLocks,
}

impl<O: MembershipOracle> ModerationService<O> {
    /// Create a service with an empty message catalog.
    ///
    /// Denial messages fall back to their English text; use
    /// [`with_messages`](Self::with_messages) for localized output.
    pub fn new(oracle: O) -> Self {
        Self::with_messages(oracle, I18n::empty(crate::i18n::DEFAULT_LOCALE))
    }

    /// Create a service with a loaded message catalog.
    pub fn with_messages(oracle: O, messages: I18n) -> Self {
        Self {
            oracle,
            messages,
            locks: EntityLocks::new(),
        }
    }

    /// The membership oracle this service consults.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Decide whether the actor may delete the entity.
    pub fn can_delete<T>(&self, actor: Option<&User>, target: &T) -> Decision
    where
        T: Moderatable + ?Sized,
    {
        policy::can_delete(&self.oracle, actor, target)
    }

    /// Decide whether the actor may resume the entity.
    pub fn can_resume<T>(&self, actor: Option<&User>, target: &T) -> Decision
    where
        T: Moderatable + ?Sized,
    {
        policy::can_resume(&self.oracle, actor, target)
    }

    /// Decide whether the actor may view a board's moderation queue.
    pub fn can_review(&self, actor: Option<&User>, board_id: i64) -> Decision {
        policy::can_review(&self.oracle, actor, board_id)
    }

    /// Localized text for a denial reason.
    ///
    /// Falls back to the reason's English description when the catalog has
    /// no entry for it.
    pub fn deny_message(&self, reason: DenialReason) -> String {
        let key = reason.message_key();
        let message = self.messages.t(key);
        if message == key {
            reason.to_string()
        } else {
            message
        }
    }

    /// Transition the entity's ledger to deleted on the actor's behalf.
    ///
    /// The deleting role is inferred: the entity's author deletes as
    /// `Author`, anyone else as `Moderator`. Callers must have consulted
    /// [`can_delete`](Self::can_delete) first; a state mismatch surfaces
    /// as [`GavelError::Transition`].
    pub fn apply_delete<T>(
        &self,
        target: &mut T,
        actor: &User,
        reason: Option<String>,
    ) -> Result<()>
    where
        T: Moderatable + ?Sized,
    {
        let role = if actor.id == target.author_id() {
            DeleterRole::Author
        } else {
            DeleterRole::Moderator
        };
        target.deletion_mut().mark_deleted(actor.id, role, reason)?;
        info!(actor_id = actor.id, role = %role, "content deleted");
        Ok(())
    }

    /// Transition the entity's ledger back to active.
    ///
    /// Callers must have consulted [`can_resume`](Self::can_resume) first.
    pub fn apply_resume<T>(&self, target: &mut T) -> Result<()>
    where
        T: Moderatable + ?Sized,
    {
        target.deletion_mut().mark_resumed()?;
        info!("content resumed");
        Ok(())
    }

    /// Delete a post through the store, serialized per entity.
    pub fn delete_post<S>(
        &self,
        store: &S,
        post_id: i64,
        actor: Option<&User>,
        reason: Option<String>,
    ) -> Result<Post>
    where
        S: ContentStore + ?Sized,
    {
        let lock = self.locks.acquire(ContentKind::Post, post_id);
        let _guard = lock.lock().unwrap();

        let mut post = store
            .get_post(post_id)?
            .ok_or_else(|| GavelError::NotFound("post".to_string()))?;
        let actor = self.authorize(self.can_delete(actor, &post), actor, "delete", post_id)?;

        self.apply_delete(&mut post, actor, reason)?;
        store.put_post(&post)?;
        Ok(post)
    }

    /// Resume a post through the store, serialized per entity.
    pub fn resume_post<S>(&self, store: &S, post_id: i64, actor: Option<&User>) -> Result<Post>
    where
        S: ContentStore + ?Sized,
    {
        let lock = self.locks.acquire(ContentKind::Post, post_id);
        let _guard = lock.lock().unwrap();

        let mut post = store
            .get_post(post_id)?
            .ok_or_else(|| GavelError::NotFound("post".to_string()))?;
        self.authorize(self.can_resume(actor, &post), actor, "resume", post_id)?;

        self.apply_resume(&mut post)?;
        store.put_post(&post)?;
        Ok(post)
    }

    /// Delete a comment through the store, serialized per entity.
    pub fn delete_comment<S>(
        &self,
        store: &S,
        comment_id: i64,
        actor: Option<&User>,
        reason: Option<String>,
    ) -> Result<Comment>
    where
        S: ContentStore + ?Sized,
    {
        let lock = self.locks.acquire(ContentKind::Comment, comment_id);
        let _guard = lock.lock().unwrap();

        let mut comment = store
            .get_comment(comment_id)?
            .ok_or_else(|| GavelError::NotFound("comment".to_string()))?;
        let actor = self.authorize(
            self.can_delete(actor, &comment),
            actor,
            "delete",
            comment_id,
        )?;

        self.apply_delete(&mut comment, actor, reason)?;
        store.put_comment(&comment)?;
        Ok(comment)
    }

    /// Resume a comment through the store, serialized per entity.
    pub fn resume_comment<S>(
        &self,
        store: &S,
        comment_id: i64,
        actor: Option<&User>,
    ) -> Result<Comment>
    where
        S: ContentStore + ?Sized,
    {
        let lock = self.locks.acquire(ContentKind::Comment, comment_id);
        let _guard = lock.lock().unwrap();

        let mut comment = store
            .get_comment(comment_id)?
            .ok_or_else(|| GavelError::NotFound("comment".to_string()))?;
        self.authorize(
            self.can_resume(actor, &comment),
            actor,
            "resume",
            comment_id,
        )?;

        self.apply_resume(&mut comment)?;
        store.put_comment(&comment)?;
        Ok(comment)
    }

    /// Turn a denial into a `Permission` error; pass the actor through on
    /// allow.
    fn authorize<'a>(
        &self,
        decision: Decision,
        actor: Option<&'a User>,
        action: &'static str,
        entity_id: i64,
    ) -> Result<&'a User> {
        if let Some(reason) = decision.reason() {
            debug!(entity_id, action, %reason, "moderation denied");
            return Err(GavelError::Permission(self.deny_message(reason)));
        }
        // The policy only allows authenticated actors.
        actor.ok_or_else(|| GavelError::Permission(self.deny_message(DenialReason::NotSignedIn)))
    }
}
