//! In-memory document store.
//!
//! Entities are kept as JSON documents, the same shape a document
//! database would hold, so the serde mapping (including the integer
//! deletion codes) is exercised on every read and write. Reads observe
//! prior writes immediately.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{GavelError, Result};
use crate::model::{Comment, NewComment, NewPost, Post};

use super::ContentStore;

/// In-memory [`ContentStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<HashMap<i64, Value>>,
    comments: RwLock<HashMap<i64, Value>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            comments: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Allocate the next entity ID.
    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Create a post from creation data, assigning an ID.
    pub fn insert_post(&self, new: &NewPost) -> Result<Post> {
        let post = Post::from_new(self.allocate_id(), new);
        self.put_post(&post)?;
        Ok(post)
    }

    /// Create a comment from creation data, assigning an ID.
    pub fn insert_comment(&self, new: &NewComment) -> Result<Comment> {
        let comment = Comment::from_new(self.allocate_id(), new);
        self.put_comment(&comment)?;
        Ok(comment)
    }

    /// Number of stored posts.
    pub fn post_count(&self) -> usize {
        self.posts.read().unwrap().len()
    }

    /// Number of stored comments.
    pub fn comment_count(&self) -> usize {
        self.comments.read().unwrap().len()
    }
}

fn to_document<T: serde::Serialize>(entity: &T) -> Result<Value> {
    serde_json::to_value(entity).map_err(|e| GavelError::Storage(e.to_string()))
}

fn from_document<T: serde::de::DeserializeOwned>(doc: &Value) -> Result<T> {
    serde_json::from_value(doc.clone()).map_err(|e| GavelError::Storage(e.to_string()))
}

impl ContentStore for MemoryStore {
    fn get_post(&self, id: i64) -> Result<Option<Post>> {
        let posts = self.posts.read().unwrap();
        posts.get(&id).map(|doc| from_document(doc)).transpose()
    }

    fn put_post(&self, post: &Post) -> Result<()> {
        let doc = to_document(post)?;
        let mut posts = self.posts.write().unwrap();
        posts.insert(post.id, doc);
        Ok(())
    }

    fn get_comment(&self, id: i64) -> Result<Option<Comment>> {
        let comments = self.comments.read().unwrap();
        comments.get(&id).map(|doc| from_document(doc)).transpose()
    }

    fn put_comment(&self, comment: &Comment) -> Result<()> {
        let doc = to_document(comment)?;
        let mut comments = self.comments.write().unwrap();
        comments.insert(comment.id, doc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommentableRef;
    use crate::moderation::{DeleterRole, DeletionState};

    #[test]
    fn test_insert_post_assigns_ids() {
        let store = MemoryStore::new();
        let a = store.insert_post(&NewPost::new(1, 2, "A", "body")).unwrap();
        let b = store.insert_post(&NewPost::new(1, 2, "B", "body")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.post_count(), 2);
    }

    #[test]
    fn test_read_after_write() {
        let store = MemoryStore::new();
        let mut post = store
            .insert_post(&NewPost::new(1, 2, "Title", "body"))
            .unwrap();

        post.deletion
            .mark_deleted(2, DeleterRole::Author, None)
            .unwrap();
        store.put_post(&post).unwrap();

        let read = store.get_post(post.id).unwrap().unwrap();
        assert_eq!(read.deletion.state(), DeletionState::DeletedByAuthor);
        assert_eq!(read, post);
    }

    #[test]
    fn test_get_missing_post() {
        let store = MemoryStore::new();
        assert!(store.get_post(404).unwrap().is_none());
    }

    #[test]
    fn test_comment_round_trip() {
        let store = MemoryStore::new();
        let comment = store
            .insert_comment(&NewComment::new(CommentableRef::post(1, 2), 3, "hello"))
            .unwrap();

        let read = store.get_comment(comment.id).unwrap().unwrap();
        assert_eq!(read, comment);
    }

    #[test]
    fn test_documents_store_deletion_state_as_integer() {
        let store = MemoryStore::new();
        let mut post = store
            .insert_post(&NewPost::new(1, 2, "Title", "body"))
            .unwrap();
        post.deletion
            .mark_deleted(9, DeleterRole::Moderator, Some("spam".to_string()))
            .unwrap();
        store.put_post(&post).unwrap();

        let docs = store.posts.read().unwrap();
        let doc = docs.get(&post.id).unwrap();
        assert_eq!(doc["deletion"]["state"], 2);
        assert_eq!(doc["deletion"]["record"]["role"], "moderator");
    }

    #[test]
    fn test_posts_and_comments_are_separate_collections() {
        let store = MemoryStore::new();
        let post = store
            .insert_post(&NewPost::new(1, 2, "Title", "body"))
            .unwrap();

        assert!(store.get_comment(post.id).unwrap().is_none());
    }
}
