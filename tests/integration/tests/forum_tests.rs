//! Forum end-to-end tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test forum_tests

use forum_core::value_objects::{DiscussionId, ReplyId, ThreadId};
use forum_service::dto::{UpdateReplyRequest, UpdateThreadRequest, VoteRequest};
use integration_tests::{check_test_env, SeededForum, TestForum};

// ============================================================================
// Projection Tests
// ============================================================================

#[tokio::test]
async fn test_group_listing_carries_reply_counts() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();
    let forum = &env.forum;

    let thread = forum
        .create_thread(seeded.thread_request(seeded.student, "Borrow checker"))
        .await
        .unwrap();
    forum
        .create_reply(seeded.reply_request(seeded.instructor, thread, "Read the error"))
        .await
        .unwrap();

    let groups = forum.list_discussion_groups().await.unwrap();
    let group = groups.iter().find(|g| g.id == seeded.group).unwrap();
    assert_eq!(group.discussions.len(), 1);

    let threads = group.discussions[0].threads.as_ref().unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].id, thread);
    assert_eq!(threads[0].reply_count, 1);

    // Listing entries carry no topic or author
    let json = serde_json::to_value(&threads[0]).unwrap();
    assert!(json.get("topic").is_none());
    assert!(json.get("user").is_none());

    env.cleanup(&seeded).await.unwrap();
}

#[tokio::test]
async fn test_get_discussion_attaches_group() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();

    let view = env.forum.get_discussion(seeded.discussion).await.unwrap().unwrap();
    assert_eq!(view.discussion_group_id, seeded.group);
    assert!(view.threads.is_none());
    let group = view.discussion_group.unwrap();
    assert_eq!(group.id, seeded.group);
    assert!(group.photo_url.starts_with("https://img.example.com/"));

    let missing = env.forum.get_discussion(DiscussionId::new(i32::MAX)).await.unwrap();
    assert!(missing.is_none());

    env.cleanup(&seeded).await.unwrap();
}

#[tokio::test]
async fn test_instructor_flag_per_view() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();
    let forum = &env.forum;

    let by_flagged = forum
        .create_thread(seeded.thread_request(seeded.flagged, "Flagged author"))
        .await
        .unwrap();
    let by_instructor = forum
        .create_thread(seeded.thread_request(seeded.instructor, "Instructor author"))
        .await
        .unwrap();
    forum
        .create_reply(seeded.reply_request(seeded.flagged, by_flagged, "flag only"))
        .await
        .unwrap();
    forum
        .create_reply(seeded.reply_request(seeded.instructor, by_flagged, "record only"))
        .await
        .unwrap();

    // Thread view: stored flag
    let threads = forum.list_threads_by_discussion(seeded.discussion).await.unwrap();
    let flagged_view = threads.iter().find(|t| t.id == by_flagged).unwrap();
    let instructor_view = threads.iter().find(|t| t.id == by_instructor).unwrap();
    assert!(flagged_view.user.is_instructor);
    assert!(!instructor_view.user.is_instructor);

    // Reply view: instructor record
    let replies = forum.list_replies_by_thread(by_flagged).await.unwrap();
    assert_eq!(replies.len(), 2);
    assert!(!replies[0].user.is_instructor);
    assert!(replies[1].user.is_instructor);
    assert!(replies.iter().all(|r| r.topic == "Flagged author"));

    env.cleanup(&seeded).await.unwrap();
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_thread_create_update_roundtrip() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();
    let forum = &env.forum;

    let id = forum
        .create_thread(seeded.thread_request(seeded.student, "Lifetimes"))
        .await
        .unwrap();

    let created = forum.get_thread(id).await.unwrap().unwrap();
    assert_eq!(created.topic, "Lifetimes");
    assert_eq!(created.detail, "Lifetimes (detail)");
    assert_eq!(created.reply_count, 0);
    assert_eq!(created.upvote, 0);

    forum
        .update_thread(
            id,
            UpdateThreadRequest {
                topic: "Lifetimes, again".to_string(),
                detail: "Still confused".to_string(),
            },
        )
        .await
        .unwrap();

    let updated = forum.get_thread(id).await.unwrap().unwrap();
    assert_eq!(updated.topic, "Lifetimes, again");
    assert_eq!(updated.inserted_at, created.inserted_at);
    assert_eq!(updated.user, created.user);

    let err = forum
        .update_thread(
            ThreadId::new(i32::MAX),
            UpdateThreadRequest {
                topic: "nope".to_string(),
                detail: "nope".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    env.cleanup(&seeded).await.unwrap();
}

#[tokio::test]
async fn test_dangling_references_are_rejected() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();
    let forum = &env.forum;

    let mut request = seeded.thread_request(seeded.student, "Nowhere");
    request.discussion_id = DiscussionId::new(i32::MAX);
    let err = forum.create_thread(request).await.unwrap_err();
    assert_eq!(err.error_code(), "CONSTRAINT_VIOLATION");

    let err = forum
        .create_reply(seeded.reply_request(seeded.student, ThreadId::new(i32::MAX), "lost"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);

    env.cleanup(&seeded).await.unwrap();
}

#[tokio::test]
async fn test_reply_lifecycle() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();
    let forum = &env.forum;

    let thread = forum
        .create_thread(seeded.thread_request(seeded.student, "Closures"))
        .await
        .unwrap();
    let keep = forum
        .create_reply(seeded.reply_request(seeded.instructor, thread, "Fn, FnMut, FnOnce"))
        .await
        .unwrap();
    let remove = forum
        .create_reply(seeded.reply_request(seeded.student, thread, "thanks"))
        .await
        .unwrap();

    forum
        .update_reply(keep, UpdateReplyRequest { detail: "Start with FnOnce".to_string() })
        .await
        .unwrap();

    let before = forum.get_thread(thread).await.unwrap().unwrap().reply_count;
    forum.delete_reply(remove).await.unwrap();
    let after = forum.get_thread(thread).await.unwrap().unwrap().reply_count;
    assert_eq!(before - after, 1);

    let replies = forum.list_replies_by_thread(thread).await.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id, keep);
    assert_eq!(replies[0].detail, "Start with FnOnce");
    assert_eq!(i64::try_from(replies.len()).unwrap(), after);

    assert!(forum.delete_reply(remove).await.unwrap_err().is_not_found());
    assert!(forum
        .update_reply(ReplyId::new(i32::MAX), UpdateReplyRequest { detail: "x".to_string() })
        .await
        .unwrap_err()
        .is_not_found());

    env.cleanup(&seeded).await.unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_votes() {
    if !check_test_env() {
        return;
    }

    let env = TestForum::start().await.expect("Failed to connect");
    let seeded = SeededForum::seed(&env.pool).await.unwrap();
    let forum = &env.forum;

    let thread = forum
        .create_thread(seeded.thread_request(seeded.student, "Votes"))
        .await
        .unwrap();
    let reply = forum
        .create_reply(seeded.reply_request(seeded.student, thread, "hello"))
        .await
        .unwrap();

    assert_eq!(forum.vote_reply(reply, VoteRequest::up()).await.unwrap().upvote, 1);
    assert_eq!(forum.vote_reply(reply, VoteRequest::up()).await.unwrap().upvote, 2);
    assert_eq!(forum.vote_reply(reply, VoteRequest { delta: 5 }).await.unwrap().upvote, 2);

    assert_eq!(forum.vote_thread(thread, VoteRequest::down()).await.unwrap().upvote, -1);
    assert_eq!(forum.vote_thread(thread, VoteRequest::up()).await.unwrap().upvote, 0);

    // Saturated counters are left untouched
    sqlx::query("UPDATE threads SET upvote = $2 WHERE id = $1")
        .bind(thread.into_inner())
        .bind(i32::MAX)
        .execute(&env.pool)
        .await
        .unwrap();
    assert_eq!(forum.vote_thread(thread, VoteRequest::up()).await.unwrap().upvote, i32::MAX);
    assert_eq!(forum.get_thread(thread).await.unwrap().unwrap().upvote, i32::MAX);

    let replies = forum.list_replies_by_thread(thread).await.unwrap();
    assert_eq!(replies[0].upvote, 2);

    assert!(forum
        .vote_thread(ThreadId::new(i32::MAX), VoteRequest::up())
        .await
        .unwrap_err()
        .is_not_found());

    env.cleanup(&seeded).await.unwrap();
}
