//! End-to-end moderation scenarios.
//!
//! Each test drives the full guarded sequence (fetch, policy check,
//! ledger transition, write-back) through the service and the store,
//! covering every role against both deletion states.

mod common;

use common::*;

use gavel::{
    CommentableRef, ContentStore, DeletionState, GavelError, NewComment, NewPost, SoftDelete,
};

fn new_post() -> NewPost {
    NewPost::new(BOARD_ID, AUTHOR_ID, "A post", "post body")
}

fn new_comment() -> NewComment {
    NewComment::new(CommentableRef::post(100, BOARD_ID), AUTHOR_ID, "a comment")
}

// Deleting

#[test]
fn author_delete_marks_post_deleted_by_author() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    let deleted = service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    assert_eq!(deleted.deletion.state(), DeletionState::DeletedByAuthor);
    let record = deleted.deletion.record().unwrap();
    assert_eq!(record.deleted_by, AUTHOR_ID);

    // The write is visible on the next read.
    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::DeletedByAuthor);
}

#[test]
fn moderator_delete_marks_post_deleted_by_moderator() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    let deleted = service
        .delete_post(
            &store,
            post.id,
            Some(&moderator()),
            Some("off topic".to_string()),
        )
        .unwrap();

    assert_eq!(deleted.deletion.state(), DeletionState::DeletedByModerator);
    let record = deleted.deletion.record().unwrap();
    assert_eq!(record.deleted_by, MODERATOR_ID);
    assert_eq!(record.reason.as_deref(), Some("off topic"));
}

#[test]
fn admin_delete_marks_post_deleted_by_moderator() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    let deleted = service
        .delete_post(&store, post.id, Some(&admin()), None)
        .unwrap();

    assert_eq!(deleted.deletion.state(), DeletionState::DeletedByModerator);
}

#[test]
fn bystander_delete_is_denied() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    let err = service
        .delete_post(&store, post.id, Some(&bystander()), None)
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));

    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::Active);
}

#[test]
fn unauthenticated_delete_is_denied() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    let err = service.delete_post(&store, post.id, None, None).unwrap_err();
    match err {
        GavelError::Permission(msg) => {
            assert_eq!(msg, "you must be signed in to perform this action")
        }
        other => panic!("expected Permission, got {other:?}"),
    }
}

#[test]
fn double_delete_is_an_invalid_transition() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();
    let err = service
        .delete_post(&store, post.id, Some(&moderator()), None)
        .unwrap_err();

    // Not a permission message: the state precondition failed.
    assert!(matches!(err, GavelError::Transition(_)));
    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::DeletedByAuthor);
}

// Resuming an author-deleted post

#[test]
fn moderator_cannot_resume_author_deleted_post() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();
    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    let err = service
        .resume_post(&store, post.id, Some(&moderator()))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));

    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::DeletedByAuthor);
}

#[test]
fn admin_cannot_resume_author_deleted_post() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();
    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    let err = service
        .resume_post(&store, post.id, Some(&admin()))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));

    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::DeletedByAuthor);
}

#[test]
fn author_can_resume_own_deleted_post() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();
    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    let resumed = service
        .resume_post(&store, post.id, Some(&author()))
        .unwrap();
    assert_eq!(resumed.deletion.state(), DeletionState::Active);
}

#[test]
fn bystander_cannot_resume_author_deleted_post() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();
    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    let err = service
        .resume_post(&store, post.id, Some(&bystander()))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));
}

#[test]
fn blocked_author_cannot_resume_own_deletion() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();
    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    let blocked = author().with_blocked(true);
    let err = service
        .resume_post(&store, post.id, Some(&blocked))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));

    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::DeletedByAuthor);
}

#[test]
fn board_blocked_author_cannot_resume_own_deletion() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();
    service
        .delete_post(&store, post.id, Some(&author()), None)
        .unwrap();

    service.oracle().block_user(BOARD_ID, AUTHOR_ID);

    let err = service
        .resume_post(&store, post.id, Some(&author()))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));
}

// Resuming a moderator-deleted comment

#[test]
fn author_cannot_resume_moderator_deleted_comment() {
    let (service, store) = setup();
    let comment = store.insert_comment(&new_comment()).unwrap();
    service
        .delete_comment(&store, comment.id, Some(&moderator()), None)
        .unwrap();

    let err = service
        .resume_comment(&store, comment.id, Some(&author()))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));

    let read = store.get_comment(comment.id).unwrap().unwrap();
    assert_eq!(read.deletion.state(), DeletionState::DeletedByModerator);
}

#[test]
fn moderator_can_resume_own_deletion() {
    let (service, store) = setup();
    let comment = store.insert_comment(&new_comment()).unwrap();
    service
        .delete_comment(&store, comment.id, Some(&moderator()), None)
        .unwrap();

    let resumed = service
        .resume_comment(&store, comment.id, Some(&moderator()))
        .unwrap();
    assert_eq!(resumed.deletion.state(), DeletionState::Active);
}

#[test]
fn admin_can_resume_moderator_deleted_comment() {
    let (service, store) = setup();
    let comment = store.insert_comment(&new_comment()).unwrap();
    service
        .delete_comment(&store, comment.id, Some(&moderator()), None)
        .unwrap();

    let resumed = service
        .resume_comment(&store, comment.id, Some(&admin()))
        .unwrap();
    assert_eq!(resumed.deletion.state(), DeletionState::Active);
}

// Round trip

#[test]
fn delete_then_resume_restores_a_never_deleted_ledger() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    service
        .delete_post(&store, post.id, Some(&moderator()), Some("spam".to_string()))
        .unwrap();
    service
        .resume_post(&store, post.id, Some(&moderator()))
        .unwrap();

    let read = store.get_post(post.id).unwrap().unwrap();
    assert_eq!(read.deletion, SoftDelete::new());
    assert_eq!(read.body, post.body);
}

#[test]
fn resume_of_active_post_is_denied_not_a_transition_error() {
    let (service, store) = setup();
    let post = store.insert_post(&new_post()).unwrap();

    let err = service
        .resume_post(&store, post.id, Some(&author()))
        .unwrap_err();
    assert!(matches!(err, GavelError::Permission(_)));
}

// Localization

#[test]
fn zh_catalog_supplies_the_contract_strings() {
    let (service, store) = setup_zh();
    let comment = store.insert_comment(&new_comment()).unwrap();

    let err = service
        .delete_comment(&store, comment.id, Some(&bystander()), None)
        .unwrap_err();
    match err {
        GavelError::Permission(msg) => assert_eq!(msg, "您没有权限删除该评论"),
        other => panic!("expected Permission, got {other:?}"),
    }

    service
        .delete_comment(&store, comment.id, Some(&moderator()), None)
        .unwrap();
    let err = service
        .resume_comment(&store, comment.id, Some(&author()))
        .unwrap_err();
    match err {
        GavelError::Permission(msg) => assert_eq!(msg, "您没有权限进行此操作"),
        other => panic!("expected Permission, got {other:?}"),
    }
}

// Review queue

#[test]
fn review_queue_admits_admin_and_moderator_only() {
    let (service, _) = setup();

    assert!(service.can_review(Some(&admin()), BOARD_ID).is_allowed());
    assert!(service
        .can_review(Some(&moderator()), BOARD_ID)
        .is_allowed());
    assert!(!service
        .can_review(Some(&bystander()), BOARD_ID)
        .is_allowed());
    assert!(!service.can_review(None, BOARD_ID).is_allowed());
}
