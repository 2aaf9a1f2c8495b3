//! Content-store trait seam.
//!
//! The moderation core never talks to a database directly; the embedding
//! application implements [`ContentStore`] over its real backend. The
//! traits are synchronous: each call runs within one request's handling,
//! and the backend is expected to provide read-after-write consistency on
//! a single node.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{Comment, Post};

/// Storage operations for moderatable content.
pub trait ContentStore {
    /// Get a post by ID.
    fn get_post(&self, id: i64) -> Result<Option<Post>>;

    /// Write a post back, replacing the stored version.
    fn put_post(&self, post: &Post) -> Result<()>;

    /// Get a comment by ID.
    fn get_comment(&self, id: i64) -> Result<Option<Comment>>;

    /// Write a comment back, replacing the stored version.
    fn put_comment(&self, comment: &Comment) -> Result<()>;
}
