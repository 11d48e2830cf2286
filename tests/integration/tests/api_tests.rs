//! API integration tests
//!
//! Each test spawns its own in-process server with a fresh in-memory
//! store; there is nothing external to set up.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.role, "employee");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    let server = TestServer::start().await.unwrap();
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.unwrap();
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.email, register.email);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.unwrap();
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                email: register.email.clone(),
                password: "WrongPass123!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user() {
    let server = TestServer::start().await.unwrap();
    let register = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.department, "Engineering");
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/auth/me", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let server = TestServer::start().await.unwrap();
    let register = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshRequest {
                refresh_token: auth.refresh_token.clone(),
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());

    // The old refresh token is dead after rotation
    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let server = TestServer::start().await.unwrap();
    let register = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty("/api/v1/auth/logout", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Shoutouts
// ============================================================================

async fn register(server: &TestServer, request: &RegisterRequest) -> AuthResponse {
    let response = server.post("/api/v1/auth/register", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_create_and_list_shoutout() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;
    let recipient = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::to_users("Great job on the launch!", vec![recipient.user.id.clone()]),
        )
        .await
        .unwrap();
    let created: ShoutoutResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.sender.id, sender.user.id);
    assert_eq!(created.recipients.len(), 1);
    assert_eq!(created.recipients[0].id, recipient.user.id);
    assert!(!created.flagged);

    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].message, "Great job on the launch!");
}

#[tokio::test]
async fn test_create_shoutout_blank_message() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;

    // Whitespace passes the length check but trims to empty
    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::broadcast("   "),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn test_shoutouts_require_auth() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/shoutouts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_reaction_toggle_involution() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::broadcast("React to me"),
        )
        .await
        .unwrap();
    let created: ShoutoutResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/shoutouts/{}/reactions/like/@me", created.id);

    // First toggle: on
    let response = server.put_auth(&path, &sender.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed[0].reactions.like, 1);
    assert_eq!(feed[0].viewer_reactions, vec!["like"]);

    // Second toggle: back off
    let response = server.put_auth(&path, &sender.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed[0].reactions.like, 0);
    assert!(feed[0].viewer_reactions.is_empty());
}

#[tokio::test]
async fn test_reaction_unknown_kind_and_shoutout() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::broadcast("React to me"),
        )
        .await
        .unwrap();
    let created: ShoutoutResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/shoutouts/{}/reactions/wave/@me", created.id);
    let response = server.put_auth(&path, &sender.access_token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth("/api/v1/shoutouts/999999/reactions/like/@me", &sender.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comments() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;
    let commenter = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::broadcast("Comment on me"),
        )
        .await
        .unwrap();
    let created: ShoutoutResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/shoutouts/{}/comments", created.id);

    let response = server
        .post_auth(
            &path,
            &commenter.access_token,
            &CreateCommentRequest {
                text: "Fantastic work!".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.author.id, commenter.user.id);
    assert_eq!(comment.text, "Fantastic work!");

    // Whitespace-only text is rejected and nothing is appended
    let response = server
        .post_auth(
            &path,
            &commenter.access_token,
            &CreateCommentRequest {
                text: "   ".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed[0].comments.len(), 1);
}

#[tokio::test]
async fn test_delete_shoutout() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::broadcast("Delete me"),
        )
        .await
        .unwrap();
    let created: ShoutoutResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/shoutouts/{}", created.id);
    let response = server.delete_auth(&path, &sender.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone from the feed and from the analytics
    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.is_empty());

    let response = server
        .get_auth("/api/v1/leaderboard", &sender.access_token)
        .await
        .unwrap();
    let board: Vec<LeaderboardEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(board.is_empty());

    // Deleting again is a 404
    let response = server.delete_auth(&path, &sender.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_flag_is_idempotent() {
    let server = TestServer::start().await.unwrap();
    let sender = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth(
            "/api/v1/shoutouts",
            &sender.access_token,
            &CreateShoutoutRequest::broadcast("Flag me"),
        )
        .await
        .unwrap();
    let created: ShoutoutResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/shoutouts/{}/flag", created.id);

    for _ in 0..2 {
        let response = server.post_auth_empty(&path, &sender.access_token).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .get_auth("/api/v1/shoutouts", &sender.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed[0].flagged);
}

// ============================================================================
// Filters & analytics
// ============================================================================

#[tokio::test]
async fn test_feed_filters() {
    let server = TestServer::start().await.unwrap();
    let engineer = register(&server, &RegisterRequest::with_department("Engineering")).await;
    let marketer = register(&server, &RegisterRequest::with_department("Marketing")).await;

    server
        .post_auth(
            "/api/v1/shoutouts",
            &engineer.access_token,
            &CreateShoutoutRequest::broadcast("Shipped the release"),
        )
        .await
        .unwrap();
    server
        .post_auth(
            "/api/v1/shoutouts",
            &marketer.access_token,
            &CreateShoutoutRequest::broadcast("Campaign went live"),
        )
        .await
        .unwrap();

    // Department filter matches the sender
    let response = server
        .get_auth("/api/v1/shoutouts?department=Marketing", &engineer.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].message, "Campaign went live");

    // Search is case-folded over the message
    let response = server
        .get_auth("/api/v1/shoutouts?search=SHIPPED", &engineer.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].message, "Shipped the release");

    // "all" passes everything
    let response = server
        .get_auth("/api/v1/shoutouts?department=all", &engineer.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 2);
}

#[tokio::test]
async fn test_leaderboard_scenario() {
    let server = TestServer::start().await.unwrap();
    let a = register(&server, &RegisterRequest::with_department("Eng")).await;
    let b = register(&server, &RegisterRequest::with_department("HR")).await;

    server
        .post_auth(
            "/api/v1/shoutouts",
            &a.access_token,
            &CreateShoutoutRequest::to_users("Great job", vec![b.user.id.clone()]),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/leaderboard", &a.access_token)
        .await
        .unwrap();
    let board: Vec<LeaderboardEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].user_id, a.user.id);
    assert_eq!(board[0].points, 5);
    assert_eq!(board[1].user_id, b.user.id);
    assert_eq!(board[1].points, 2);
}

#[tokio::test]
async fn test_department_histogram() {
    let server = TestServer::start().await.unwrap();
    let engineer = register(&server, &RegisterRequest::with_department("Engineering")).await;

    for message in ["one", "two"] {
        server
            .post_auth(
                "/api/v1/shoutouts",
                &engineer.access_token,
                &CreateShoutoutRequest::broadcast(message),
            )
            .await
            .unwrap();
    }

    let response = server
        .get_auth("/api/v1/analytics/departments", &engineer.access_token)
        .await
        .unwrap();
    let histogram: Vec<DepartmentCountResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(histogram.len(), 1);
    assert_eq!(histogram[0].department, "Engineering");
    assert_eq!(histogram[0].count, 2);
}

#[tokio::test]
async fn test_directory_endpoints() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server, &RegisterRequest::with_department("Sales")).await;

    let response = server.get_auth("/api/v1/users", &user.access_token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, user.user.id);

    let response = server
        .get_auth("/api/v1/departments", &user.access_token)
        .await
        .unwrap();
    let departments: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(departments, vec!["Sales"]);
}

// ============================================================================
// Demo seeding
// ============================================================================

#[tokio::test]
async fn test_seeded_server_has_demo_feed() {
    let server = TestServer::start_seeded().await.unwrap();
    let viewer = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .get_auth("/api/v1/shoutouts", &viewer.access_token)
        .await
        .unwrap();
    let feed: Vec<ShoutoutResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 2);
    // Newest first: the six-hour-old demo shoutout leads
    assert_eq!(feed[0].sender.name, "Priya Mehta");
    assert_eq!(feed[1].comments.len(), 1);

    let response = server.get_auth("/api/v1/users", &viewer.access_token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    // Five demo users plus the registered viewer
    assert_eq!(users.len(), 6);
}
