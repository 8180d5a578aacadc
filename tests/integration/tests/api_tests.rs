//! API Integration Tests
//!
//! Each test spawns the HTTP server over the in-memory store and drives it
//! with bearer tokens signed by the test secret.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    admin, assert_json, assert_status, fixtures::*, member, TestServer, NOTIFY_WAIT,
};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(&[]).await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start(&[]).await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    server.store.set_unhealthy(true);
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["checks"]["database"], "unhealthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let server = TestServer::start(&[]).await.expect("Failed to start server");
    let response = server.get("/api/v1/posts").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let server = TestServer::start(&[]).await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/posts", "not-a-token")
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_unknown_member_cannot_post() {
    let server = TestServer::start(&[]).await.expect("Failed to start server");
    let token = server.token_for(Uuid::new_v4());
    let response = server
        .post_auth("/api/v1/posts", &token, &CreatePostBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_list_and_get_post() {
    let alice = member("Alice");
    let bob = member("Bob");
    let server = TestServer::start(&[&alice, &bob])
        .await
        .expect("Failed to start server");
    let token = server.token_for(alice.id);

    let request = CreatePostBody::unique();
    let response = server
        .post_auth("/api/v1/posts", &token, &request)
        .await
        .unwrap();
    let created: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.title, request.title);
    assert_eq!(created.author.id, alice.id);
    assert_eq!(created.author.name, "Alice");
    assert_eq!(created.reactions.likes, 0);

    let response = server.get_auth("/api/v1/posts", &token).await.unwrap();
    let page: Page<PostBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert!(!page.pagination.has_more);

    let bob_token = server.token_for(bob.id);
    let response = server
        .get_auth(&format!("/api/v1/posts/{}", created.id), &bob_token)
        .await
        .unwrap();
    let fetched: PostBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.content, request.content);
}

#[tokio::test]
async fn test_list_posts_pagination() {
    let alice = member("Alice");
    let server = TestServer::start(&[&alice])
        .await
        .expect("Failed to start server");
    let token = server.token_for(alice.id);

    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/posts", &token, &CreatePostBody::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = server
        .get_auth("/api/v1/posts?limit=2", &token)
        .await
        .unwrap();
    let page: Page<PostBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert!(page.pagination.has_more);
    assert_eq!(page.pagination.limit, 2);

    let before = page.pagination.before.expect("cursor for next page");
    let response = server
        .client
        .get(format!("{}/api/v1/posts", server.base_url()))
        .query(&[("limit", "2"), ("before", before.as_str())])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let next: Page<PostBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(next.data.len(), 1);
    assert!(!next.pagination.has_more);

    let response = server
        .get_auth("/api/v1/posts?before=yesterday", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_post() {
    let alice = member("Alice");
    let server = TestServer::start(&[&alice])
        .await
        .expect("Failed to start server");
    let token = server.token_for(alice.id);

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", Uuid::new_v4()), &token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_POST");

    let response = server
        .get_auth("/api/v1/posts/not-a-uuid", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_edit_post() {
    let alice = member("Alice");
    let bob = member("Bob");
    let server = TestServer::start(&[&alice, &bob])
        .await
        .expect("Failed to start server");
    let alice_token = server.token_for(alice.id);
    let bob_token = server.token_for(bob.id);

    let response = server
        .post_auth("/api/v1/posts", &alice_token, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/posts/{}", post.id);

    let response = server
        .patch_auth(&path, &bob_token, &json!({ "title": "Mine now" }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_AUTHOR");

    let response = server
        .patch_auth(&path, &alice_token, &json!({ "content": "   " }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "EMPTY_CONTENT");

    let response = server
        .patch_auth(&path, &alice_token, &json!({ "title": "Revised agenda" }))
        .await
        .unwrap();
    let updated: PostBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.is_edited);
    assert_eq!(updated.title, "Revised agenda");
    assert_eq!(updated.content, post.content);
}

#[tokio::test]
async fn test_delete_post_by_admin() {
    let alice = member("Alice");
    let bob = member("Bob");
    let chair = admin("Chair");
    let server = TestServer::start(&[&alice, &bob, &chair])
        .await
        .expect("Failed to start server");
    let alice_token = server.token_for(alice.id);

    let response = server
        .post_auth("/api/v1/posts", &alice_token, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/posts/{}", post.id);

    let response = server
        .delete_auth(&path, &server.token_for(bob.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&path, &server.token_for(chair.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &alice_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_threads() {
    let alice = member("Alice");
    let bob = member("Bob");
    let server = TestServer::start(&[&alice, &bob])
        .await
        .expect("Failed to start server");
    let alice_token = server.token_for(alice.id);
    let bob_token = server.token_for(bob.id);

    let response = server
        .post_auth("/api/v1/posts", &alice_token, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let comments_path = format!("/api/v1/posts/{}/comments", post.id);

    let response = server
        .post_auth(&comments_path, &bob_token, &CreateCommentBody::top_level("First!"))
        .await
        .unwrap();
    let top: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(top.parent_id.is_none());
    assert_eq!(top.post_id, post.id);

    let response = server
        .post_auth(
            &comments_path,
            &alice_token,
            &CreateCommentBody::reply("Thanks", top.id),
        )
        .await
        .unwrap();
    let reply: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id, Some(top.id));

    let response = server.get_auth(&comments_path, &bob_token).await.unwrap();
    let threads: Vec<ThreadBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].parent.id, top.id);
    assert_eq!(threads[0].parent.author.name, "Bob");
    assert_eq!(threads[0].replies.len(), 1);
    assert_eq!(threads[0].replies[0].id, reply.id);

    let response = server
        .post_auth(&comments_path, &bob_token, &CreateCommentBody::top_level(" \n "))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reply_to_comment_on_other_post() {
    let alice = member("Alice");
    let server = TestServer::start(&[&alice])
        .await
        .expect("Failed to start server");
    let token = server.token_for(alice.id);

    let mut posts = Vec::new();
    for _ in 0..2 {
        let response = server
            .post_auth("/api/v1/posts", &token, &CreatePostBody::unique())
            .await
            .unwrap();
        let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        posts.push(post);
    }

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", posts[0].id),
            &token,
            &CreateCommentBody::top_level("On the first post"),
        )
        .await
        .unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", posts[1].id),
            &token,
            &CreateCommentBody::reply("Wrong thread", comment.id),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(error.error.code, "PARENT_NOT_IN_POST");
}

#[tokio::test]
async fn test_edit_and_delete_comment() {
    let alice = member("Alice");
    let bob = member("Bob");
    let server = TestServer::start(&[&alice, &bob])
        .await
        .expect("Failed to start server");
    let alice_token = server.token_for(alice.id);
    let bob_token = server.token_for(bob.id);

    let response = server
        .post_auth("/api/v1/posts", &alice_token, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &bob_token,
            &CreateCommentBody::top_level("Typo hre"),
        )
        .await
        .unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/posts/{}/comments/{}", post.id, comment.id);

    let response = server
        .patch_auth(&path, &alice_token, &json!({ "content": "Not yours" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&path, &bob_token, &json!({ "content": "Typo here" }))
        .await
        .unwrap();
    let edited: CommentBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(edited.is_edited);
    assert_eq!(edited.content, "Typo here");

    let response = server.delete_auth(&path, &bob_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert!(server.store.stored_comment(comment.id).await.is_none());
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_post_reaction_toggle() {
    let alice = member("Alice");
    let bob = member("Bob");
    let server = TestServer::start(&[&alice, &bob])
        .await
        .expect("Failed to start server");
    let bob_token = server.token_for(bob.id);

    let response = server
        .post_auth(
            "/api/v1/posts",
            &server.token_for(alice.id),
            &CreatePostBody::unique(),
        )
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/posts/{}/reactions", post.id);

    let response = server
        .post_auth(&path, &bob_token, &ReactionBody::like())
        .await
        .unwrap();
    let liked: ReactionsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((liked.likes, liked.dislikes), (1, 0));
    assert_eq!(liked.me.as_deref(), Some("up"));
    assert_eq!(liked.liked_by, vec!["Bob".to_string()]);

    let response = server
        .post_auth(&path, &bob_token, &ReactionBody::dislike())
        .await
        .unwrap();
    let switched: ReactionsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((switched.likes, switched.dislikes), (0, 1));
    assert_eq!(switched.me.as_deref(), Some("down"));
    assert_eq!(switched.disliked_by, vec!["Bob".to_string()]);

    let response = server
        .post_auth(&path, &bob_token, &ReactionBody::dislike())
        .await
        .unwrap();
    let cleared: ReactionsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((cleared.likes, cleared.dislikes), (0, 0));
    assert!(cleared.me.is_none());
}

#[tokio::test]
async fn test_comment_reaction_write_failure() {
    let alice = member("Alice");
    let bob = member("Bob");
    let server = TestServer::start(&[&alice, &bob])
        .await
        .expect("Failed to start server");
    let alice_token = server.token_for(alice.id);

    let response = server
        .post_auth("/api/v1/posts", &alice_token, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &alice_token,
            &CreateCommentBody::top_level("Vote here"),
        )
        .await
        .unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!(
        "/api/v1/posts/{}/comments/{}/reactions",
        post.id, comment.id
    );

    server.store.fail_reaction_writes(true);
    let response = server
        .post_auth(&path, &server.token_for(bob.id), &ReactionBody::like())
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    let stored = server.store.stored_comment(comment.id).await.unwrap();
    assert!(stored.reactions.is_empty());

    server.store.fail_reaction_writes(false);
    let response = server
        .post_auth(&path, &server.token_for(bob.id), &ReactionBody::like())
        .await
        .unwrap();
    let summary: ReactionsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.likes, 1);
}

#[tokio::test]
async fn test_reaction_body_is_required() {
    let alice = member("Alice");
    let server = TestServer::start(&[&alice])
        .await
        .expect("Failed to start server");
    let token = server.token_for(alice.id);

    let response = server
        .post_auth("/api/v1/posts", &token, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/reactions", post.id),
            &token,
            &json!({ "is_like": "yes" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_notifications_list_and_mark_read() {
    let alice = member("Alice");
    let bob = member("Bob");
    let carol = member("Carol");
    let server = TestServer::start(&[&alice, &bob, &carol])
        .await
        .expect("Failed to start server");
    let bob_token = server.token_for(bob.id);

    let response = server
        .post_auth(
            "/api/v1/posts",
            &server.token_for(alice.id),
            &CreatePostBody::unique(),
        )
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let delivered = server.store.wait_for_notifications(2, NOTIFY_WAIT).await;
    assert_eq!(delivered.len(), 2);
    assert!(delivered.iter().all(|n| n.recipient_id != alice.id));

    let response = server
        .get_auth("/api/v1/notifications", &bob_token)
        .await
        .unwrap();
    let page: Page<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    let notification = &page.data[0];
    assert_eq!(notification.kind, "new_post");
    assert_eq!(notification.actor_id, alice.id);
    assert_eq!(notification.post_id, Some(post.id));
    assert!(notification.message.starts_with("Alice posted"));
    assert!(!notification.is_read);

    let read_path = format!("/api/v1/notifications/{}/read", notification.id);
    let response = server
        .post_empty_auth(&read_path, &server.token_for(carol.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.post_empty_auth(&read_path, &bob_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &bob_token)
        .await
        .unwrap();
    let page: Page<NotificationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data[0].is_read);
}
