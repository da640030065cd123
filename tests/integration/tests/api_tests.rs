//! API integration tests
//!
//! Every test starts its own server over an in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use jobs_core::JobCategory;
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_uses_email_as_username() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["user"]["username"], request.email.as_str());
    assert_eq!(
        body["message"],
        "User Created Successfully. Now perform Login to get your token"
    );
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/register", &request).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_rejects_numeric_password() {
    let server = TestServer::start().await.unwrap();
    let mut request = RegisterRequest::unique();
    request.password = "1234567890".to_string();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_returns_token_pair() {
    let server = TestServer::start().await.unwrap();
    let (request, login) = register_and_login(&server).await.unwrap();

    assert!(!login.access.is_empty());
    assert!(!login.refresh.is_empty());
    assert_eq!(login.user.email, request.email);
    assert_eq!(login.user.username, request.email);
    assert_eq!(login.user.first_name, "Ravi");
    assert_eq!(login.user.last_name, request.last_name);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.unwrap();
    let (request, _) = register_and_login(&server).await.unwrap();

    let response = server
        .post("/api/login", &LoginRequest::new(&request.email, "not-my-password"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_login_requires_staff() {
    let server = TestServer::start().await.unwrap();
    let (request, _) = register_and_login(&server).await.unwrap();

    let response = server
        .post("/api/login", &LoginRequest::admin(&request.email, &request.password))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.message, "You're Not an Admin");

    assert!(staff_login(&server).await.is_ok());
}

#[tokio::test]
async fn test_refresh_then_logout() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();

    let response = server
        .post("/api/token/refresh", &json!({ "refresh": login.refresh }))
        .await
        .unwrap();
    let refreshed: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let access = refreshed["access"].as_str().unwrap().to_string();

    let response = server.get_auth("/api/profile", &access).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/logout", &login.access, &json!({ "refresh": login.refresh }))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Logout successful");

    // Both access tokens belonged to the revoked session.
    for token in [&login.access, &access] {
        let response = server.get_auth("/api/profile", token).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    let response = server
        .post("/api/token/refresh", &json!({ "refresh": login.refresh }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_with_garbage_refresh_token() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();

    let response = server
        .post_auth("/api/logout", &login.access, &json!({ "refresh": "garbage" }))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.error.message.contains("Invalid or expired token"));
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_and_account_deletion() {
    let server = TestServer::start().await.unwrap();
    let (request, login) = register_and_login(&server).await.unwrap();

    let response = server.get_auth("/api/profile", &login.access).await.unwrap();
    let profile: ItemEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.status, "success");
    assert_eq!(profile.data["email"], request.email.as_str());
    assert_eq!(profile.data["is_staff"], false);

    let response = server.delete_auth("/api/profile", &login.access).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post("/api/login", &LoginRequest::new(&request.email, &request.password))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_profile_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/profile").await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.error.code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// Job listing
// ============================================================================

#[tokio::test]
async fn test_job_list_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/jobs").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_category_filter() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();

    server.seed_job("Group D", JobCategory::Railway).await.unwrap();
    let po = server.seed_job("Probationary Officer", JobCategory::Banking).await.unwrap();
    server.seed_job("CGL", JobCategory::Ssc).await.unwrap();
    let clerk = server.seed_job("Clerk", JobCategory::Banking).await.unwrap();
    server.seed_job("Forest Guard", JobCategory::Other).await.unwrap();

    let response = server
        .get_auth("/api/jobs?category=BANKING", &login.access)
        .await
        .unwrap();
    let list: ListEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.status, "success");
    assert_eq!(list.count, 2);
    let ids: Vec<i64> = list.data.iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![clerk.into_inner(), po.into_inner()]);
    assert!(list.data.iter().all(|job| job.category == "BANKING"));

    let response = server.get_auth("/api/jobs", &login.access).await.unwrap();
    let all: ListEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.count, 5);
    assert_eq!(all.data[0].title, "Forest Guard");
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();

    let response = server
        .get_auth("/api/jobs?category=PILOT", &login.access)
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.error.details.unwrap().get("category").is_some());
}

#[tokio::test]
async fn test_lowercase_category_is_rejected() {
    let server = TestServer::start().await.unwrap();
    server.seed_job("Clerk", JobCategory::Banking).await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();

    let response = server
        .get_auth("/api/jobs?category=banking", &login.access)
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_FIELD");
}

#[tokio::test]
async fn test_anonymous_viewer_flags_are_false() {
    let server = TestServer::start().await.unwrap();
    let job = server.seed_job("Loco Pilot", JobCategory::Railway).await.unwrap();

    let response = server.post_empty(&format!("/api/jobs/{job}/like"), None).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/api/jobs/{job}")).await.unwrap();
    let body: ItemEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.likes_count, 1);
    assert!(!body.data.user_has_liked);
    assert!(!body.data.is_bookmarked);
    assert_eq!(body.data.location, "All India");
}

#[tokio::test]
async fn test_missing_job_is_404() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/jobs/9999").await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_JOB");
}

// ============================================================================
// Likes
// ============================================================================

#[tokio::test]
async fn test_three_likes_then_one_unlike() {
    let server = TestServer::start().await.unwrap();
    let job = server.seed_job("Station Master", JobCategory::Railway).await.unwrap();
    let path = format!("/api/jobs/{job}/like");

    let mut tokens = Vec::new();
    for _ in 0..3 {
        let (_, login) = register_and_login(&server).await.unwrap();
        let response = server.post_empty(&path, Some(&login.access)).await.unwrap();
        let like: LikeBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert!(like.liked);
        tokens.push(login.access);
    }

    let response = server.post_empty(&path, Some(&tokens[0])).await.unwrap();
    let unlike: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unlike.liked);
    assert_eq!(unlike.message, "Like removed");
    assert_eq!(unlike.likes_count, 2);

    let response = server.get_auth(&format!("/api/jobs/{job}"), &tokens[0]).await.unwrap();
    let seen: ItemEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.data.likes_count, 2);
    assert!(!seen.data.user_has_liked);

    let response = server.get_auth(&format!("/api/jobs/{job}"), &tokens[1]).await.unwrap();
    let seen: ItemEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(seen.data.user_has_liked);
}

#[tokio::test]
async fn test_anonymous_likes_accumulate() {
    let server = TestServer::start().await.unwrap();
    let job = server.seed_job("Havaldar", JobCategory::Ssc).await.unwrap();
    let path = format!("/api/jobs/{job}/like");

    for expected in 1..=3 {
        let response = server.post_empty(&path, None).await.unwrap();
        let like: LikeBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(like.likes_count, expected);
    }
}

#[tokio::test]
async fn test_bad_token_on_optional_route_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let job = server.seed_job("Havaldar", JobCategory::Ssc).await.unwrap();

    let response = server
        .post_empty(&format!("/api/jobs/{job}/like"), Some("not-a-jwt"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Trending
// ============================================================================

#[tokio::test]
async fn test_trending_top_ten() {
    let server = TestServer::start().await.unwrap();

    // job n receives n likes
    for n in 0..12 {
        let job = server
            .seed_job(&format!("Posting {n}"), JobCategory::Upsc)
            .await
            .unwrap();
        for _ in 0..n {
            let response = server
                .post_empty(&format!("/api/jobs/{job}/like"), None)
                .await
                .unwrap();
            assert_status(response, StatusCode::CREATED).await.unwrap();
        }
    }

    let response = server.get("/api/trending").await.unwrap();
    let trending: TrendingEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(trending.message, "Trending jobs fetched successfully");
    assert_eq!(trending.count, 10);

    let counts: Vec<i64> = trending.data.iter().map(|entry| entry.likes_count).collect();
    assert_eq!(counts, vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    assert_eq!(trending.data[0].title, "Posting 11");
    assert!(trending.data.iter().all(|entry| entry.posted_at.len() == 10));
    assert!(trending.data.iter().all(|entry| entry.id > 0));
}

// ============================================================================
// Bookmarks
// ============================================================================

#[tokio::test]
async fn test_bookmark_toggle() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();
    let job = server.seed_job("Junior Engineer", JobCategory::Ssc).await.unwrap();
    let path = format!("/api/jobs/{job}/bookmark");

    let response = server.post_empty(&path, Some(&login.access)).await.unwrap();
    let created: BookmarkBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, "success");
    assert_eq!(created.message, "Job bookmarked");
    assert!(created.bookmarked);

    let response = server.post_empty(&path, Some(&login.access)).await.unwrap();
    let removed: BookmarkBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(removed.message, "Bookmark removed");
    assert!(!removed.bookmarked);

    let response = server.get_auth(&format!("/api/jobs/{job}"), &login.access).await.unwrap();
    let seen: ItemEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!seen.data.is_bookmarked);
}

#[tokio::test]
async fn test_bookmark_missing_job() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();

    let response = server
        .post_empty("/api/jobs/777/bookmark", Some(&login.access))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_bookmark_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let job = server.seed_job("Junior Engineer", JobCategory::Ssc).await.unwrap();

    let response = server
        .post_empty(&format!("/api/jobs/{job}/bookmark"), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let (_, author) = register_and_login(&server).await.unwrap();
    let (_, stranger) = register_and_login(&server).await.unwrap();
    let job = server.seed_job("Stenographer", JobCategory::Ssc).await.unwrap();
    let path = format!("/api/jobs/{job}/comments");

    let response = server
        .post_auth(&path, &author.access, &json!({ "content": "Form filled today" }))
        .await
        .unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.content, "Form filled today");
    assert_eq!(comment.job_id, job.into_inner());

    let response = server.get(&path).await.unwrap();
    let list: ListEnvelope<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.data[0].user_id, comment.user_id);

    let response = server.get_auth(&format!("/api/jobs/{job}"), &author.access).await.unwrap();
    let seen: ItemEnvelope<JobBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.data.comments_count, 1);

    let comment_path = format!("{path}/{}", comment.id);
    let response = server.delete_auth(&comment_path, &stranger.access).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&comment_path, &author.access).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&comment_path, &author.access).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_empty_comment_has_field_details() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();
    let job = server.seed_job("Stenographer", JobCategory::Ssc).await.unwrap();

    let response = server
        .post_auth(&format!("/api/jobs/{job}/comments"), &login.access, &json!({ "content": "" }))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
    assert!(err.error.details.unwrap().get("content").is_some());
}

// ============================================================================
// Shares
// ============================================================================

#[tokio::test]
async fn test_share_counts() {
    let server = TestServer::start().await.unwrap();
    let (_, login) = register_and_login(&server).await.unwrap();
    let job = server.seed_job("Constable", JobCategory::Other).await.unwrap();
    let path = format!("/api/jobs/{job}/share");

    let response = server
        .post_auth(&path, &login.access, &json!({ "platform": "WhatsApp" }))
        .await
        .unwrap();
    let first: ShareBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.platform, "WhatsApp");
    assert!(first.user_id.is_some());
    assert_eq!(first.shares_count, 1);

    let response = server.post_empty(&path, None).await.unwrap();
    let second: ShareBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second.platform, "");
    assert_eq!(second.user_id, None);
    assert_eq!(second.shares_count, 2);
}

// ============================================================================
// Staff job management
// ============================================================================

#[tokio::test]
async fn test_staff_create_and_delete_job() {
    let server = TestServer::start().await.unwrap();
    let staff = staff_login(&server).await.unwrap();
    let (_, reader) = register_and_login(&server).await.unwrap();

    let posting = json!({
        "category": "TEACHING",
        "title": "Primary Teacher",
        "organization": "Kendriya Vidyalaya Sangathan",
        "vacancies": 120,
        "last_date": "2026-11-30",
        "description": "PRT recruitment drive",
    });

    let response = server.post_auth("/api/jobs", &reader.access, &posting).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post_auth("/api/jobs", &staff.access, &posting).await.unwrap();
    let created: ItemEnvelope<JobBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.data.category, "TEACHING");
    assert_eq!(created.data.likes_count, 0);

    let job_path = format!("/api/jobs/{}", created.data.id);
    let response = server.delete_auth(&job_path, &reader.access).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&job_path, &staff.access).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&job_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_job_rejects_negative_vacancies() {
    let server = TestServer::start().await.unwrap();
    let staff = staff_login(&server).await.unwrap();

    let posting = json!({
        "title": "Lineman",
        "organization": "State Electricity Board",
        "vacancies": -4,
        "last_date": "2026-11-30",
        "description": "Field staff",
    });

    let response = server.post_auth("/api/jobs", &staff.access, &posting).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.error.details.unwrap().get("vacancies").is_some());
}
