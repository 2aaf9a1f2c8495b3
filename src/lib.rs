//! gavel - moderation core for discussion-forum backends.
//!
//! Soft-delete lifecycle for posts and comments, plus the authorization
//! policy deciding who may delete, resume, or review them. Persistence
//! and board membership are consumed through trait seams; the surrounding
//! application owns routing, rendering, and sessions.

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod moderation;
pub mod store;

pub use config::{Config, LocaleConfig, LoggingConfig};
pub use error::{GavelError, Result};
pub use i18n::I18n;
pub use model::{
    Board, Comment, CommentableKind, CommentableRef, NewBoard, NewComment, NewPost, Post, User,
};
pub use moderation::{
    can_delete, can_resume, can_review, is_supervisor, BoardDirectory, ContentKind, Decision,
    DeleterRole, DeletionRecord, DeletionState, DenialReason, EntityLocks, InvalidTransition,
    MembershipOracle, Moderatable, ModerationService, SoftDelete,
};
pub use store::{ContentStore, MemoryStore};
