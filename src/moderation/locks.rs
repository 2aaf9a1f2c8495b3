//! Per-entity locks for check-then-apply sequences.
//!
//! A policy check and the ledger transition it authorizes must not
//! interleave with another request touching the same entity (e.g. an
//! author resume racing a moderator delete). The registry hands out one
//! mutex per entity; no cross-entity ordering exists, so holding a single
//! lock can never deadlock against another entity's sequence.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

/// Kind of content an entity ID refers to.
///
/// Posts and comments have independent ID spaces, so the lock key needs
/// the kind alongside the ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// A board post.
    Post,
    /// A comment on a commentable.
    Comment,
}

impl ContentKind {
    /// Convert to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Comment => "comment",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry of per-entity mutexes.
#[derive(Debug, Default)]
pub struct EntityLocks {
    locks: RwLock<HashMap<(ContentKind, i64), Arc<Mutex<()>>>>,
}

impl EntityLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the mutex for an entity, creating it on first use.
    ///
    /// Lock the returned mutex for the whole check-then-apply sequence:
    ///
    /// ```
    /// use gavel::moderation::{ContentKind, EntityLocks};
    ///
    /// let locks = EntityLocks::new();
    /// let lock = locks.acquire(ContentKind::Post, 1);
    /// let _guard = lock.lock().unwrap();
    /// // fetch, check, apply, write
    /// ```
    pub fn acquire(&self, kind: ContentKind, id: i64) -> Arc<Mutex<()>> {
        {
            let locks = self.locks.read().unwrap();
            if let Some(lock) = locks.get(&(kind, id)) {
                return Arc::clone(lock);
            }
        }

        let mut locks = self.locks.write().unwrap();
        Arc::clone(locks.entry((kind, id)).or_default())
    }

    /// Drop lock entries nobody is currently holding.
    ///
    /// Call periodically to free memory in long-running processes.
    pub fn cleanup(&self) {
        let mut locks = self.locks.write().unwrap();
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    /// Number of registered entity locks.
    pub fn len(&self) -> usize {
        let locks = self.locks.read().unwrap();
        locks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
