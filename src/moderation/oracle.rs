//! Board-membership oracle.
//!
//! The policy engine never stores moderator lists or blocking relations
//! itself; it asks an oracle on every check so membership changes between
//! requests are always observed. The trait is the seam the embedding
//! application implements over its real membership data; [`BoardDirectory`]
//! is an in-memory implementation for tests and self-contained setups.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::Board;

/// Answers board-membership questions for the policy engine.
///
/// Implementations must answer from current data; results are not cached
/// by the caller. Unknown boards answer `false` to both questions.
pub trait MembershipOracle {
    /// Check if the user is a moderator of the board.
    fn has_moderator(&self, board_id: i64, user_id: i64) -> bool;

    /// Check if the board is blocking the user.
    fn is_blocking(&self, board_id: i64, user_id: i64) -> bool;
}

/// In-memory board registry implementing [`MembershipOracle`].
#[derive(Debug, Default)]
pub struct BoardDirectory {
    boards: RwLock<HashMap<i64, Board>>,
}

impl BoardDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a board.
    pub fn insert(&self, board: Board) {
        let mut boards = self.boards.write().unwrap();
        boards.insert(board.id, board);
    }

    /// Get a copy of a board by ID.
    pub fn get(&self, board_id: i64) -> Option<Board> {
        let boards = self.boards.read().unwrap();
        boards.get(&board_id).cloned()
    }

    /// Remove a board by ID.
    pub fn remove(&self, board_id: i64) -> Option<Board> {
        let mut boards = self.boards.write().unwrap();
        boards.remove(&board_id)
    }

    /// Number of registered boards.
    pub fn len(&self) -> usize {
        let boards = self.boards.read().unwrap();
        boards.len()
    }

    /// Check if the directory has no boards.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grant a user moderator authority over a board.
    ///
    /// Returns `false` if the board is unknown.
    pub fn add_moderator(&self, board_id: i64, user_id: i64) -> bool {
        let mut boards = self.boards.write().unwrap();
        match boards.get_mut(&board_id) {
            Some(board) => {
                if !board.moderator_ids.contains(&user_id) {
                    board.moderator_ids.push(user_id);
                }
                true
            }
            None => false,
        }
    }

    /// Add a user to a board's block list.
    ///
    /// Returns `false` if the board is unknown.
    pub fn block_user(&self, board_id: i64, user_id: i64) -> bool {
        let mut boards = self.boards.write().unwrap();
        match boards.get_mut(&board_id) {
            Some(board) => {
                if !board.blocked_user_ids.contains(&user_id) {
                    board.blocked_user_ids.push(user_id);
                }
                true
            }
            None => false,
        }
    }
}

impl MembershipOracle for BoardDirectory {
    fn has_moderator(&self, board_id: i64, user_id: i64) -> bool {
        let boards = self.boards.read().unwrap();
        boards
            .get(&board_id)
            .is_some_and(|b| b.has_moderator(user_id))
    }

    fn is_blocking(&self, board_id: i64, user_id: i64) -> bool {
        let boards = self.boards.read().unwrap();
        boards
            .get(&board_id)
            .is_some_and(|b| b.is_blocking(user_id))
    }
}
