//! Test helpers for moderation integration tests.
//!
//! Provides the standard cast (author, moderator, admin, bystander), a
//! board moderated by the moderator, and a service + store pair.

use gavel::{Board, BoardDirectory, I18n, MemoryStore, ModerationService, NewBoard, User};

/// Board owning the test content.
pub const BOARD_ID: i64 = 1;
/// User who writes the test content.
pub const AUTHOR_ID: i64 = 10;
/// Moderator of the test board.
pub const MODERATOR_ID: i64 = 20;
/// Site-wide administrator.
pub const ADMIN_ID: i64 = 30;
/// Ordinary user unrelated to the content.
pub const BYSTANDER_ID: i64 = 40;

pub fn author() -> User {
    User::new(AUTHOR_ID, "author")
}

pub fn moderator() -> User {
    User::new(MODERATOR_ID, "moderator")
}

pub fn admin() -> User {
    User::new(ADMIN_ID, "admin").with_admin(true)
}

pub fn bystander() -> User {
    User::new(BYSTANDER_ID, "bystander")
}

/// Directory holding the test board with its moderator appointed.
pub fn directory() -> BoardDirectory {
    let dir = BoardDirectory::new();
    dir.insert(Board::from_new(
        BOARD_ID,
        &NewBoard::new("general").with_moderator(MODERATOR_ID),
    ));
    dir
}

/// Service (English fallback messages) and empty store.
pub fn setup() -> (ModerationService<BoardDirectory>, MemoryStore) {
    (ModerationService::new(directory()), MemoryStore::new())
}

/// Service using the shipped Chinese catalog.
pub fn setup_zh() -> (ModerationService<BoardDirectory>, MemoryStore) {
    let locales_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/locales");
    let messages = I18n::load("zh", locales_dir).expect("shipped zh catalog");
    (
        ModerationService::with_messages(directory(), messages),
        MemoryStore::new(),
    )
}
