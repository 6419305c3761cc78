//! API Integration Tests
//!
//! Servers start against an unreachable database, so appeals land in the
//! local store under a temporary directory. Tests that need PostgreSQL
//! read DATABASE_URL and skip when it is unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_database_url, MockWebhook,
    TestServer, TEST_ADMIN_TOKEN,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_degraded_without_database() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"], "unhealthy");
    assert_eq!(body["checks"]["fallback"], "healthy");
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_appeal_falls_back_to_local_store() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SubmitAppeal::steve();

    let response = server.post("/api/appeals", &request).await.unwrap();
    let appeal: AppealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!appeal.id.is_empty());
    assert_eq!(appeal.username, "Steve_01");
    assert_eq!(appeal.discord_id, "steve#0001");
    assert_eq!(appeal.email, "steve@example.com");
    assert_eq!(appeal.ban_reason, "hacking");
    assert_eq!(appeal.ban_reason_label, "Hacking / Cheating");
    assert_eq!(appeal.appeal_reason, request.appeal_reason);
    assert_eq!(appeal.additional_info, None);
    assert_eq!(appeal.status, "pending");

    let stored = std::fs::read_to_string(server.data_dir().join("zcraft_appeals.json")).unwrap();
    let stored: Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored[0]["id"], appeal.id.as_str());
    assert_eq!(stored[0]["discordId"], "steve#0001");
}

#[tokio::test]
async fn test_submit_trims_and_keeps_additional_info() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SubmitAppeal::unique().with_additional_info("  Played here since 2019.  ");
    request.email = "  steve@example.com ".to_string();

    let response = server.post("/api/appeals", &request).await.unwrap();
    let appeal: AppealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(appeal.email, "steve@example.com");
    assert_eq!(appeal.additional_info.as_deref(), Some("Played here since 2019."));
}

#[tokio::test]
async fn test_submit_invalid_appeal_lists_field_errors() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SubmitAppeal::steve();
    request.username = "st".to_string();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/appeals", &request).await.unwrap();
    let body = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    let details = &body["error"]["details"];
    assert!(details.get("username").is_some());
    assert!(details.get("email").is_some());
}

#[tokio::test]
async fn test_submit_unknown_ban_reason_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SubmitAppeal::steve();
    request.ban_reason = "griefing".to_string();

    let response = server.post("/api/appeals", &request).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_submit_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .post(format!("{}/api/appeals", server.base_url()))
        .header("Content-Type", "application/json")
        .body("{\"username\": ")
        .send()
        .await
        .unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_BODY")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_submit_notifies_webhook() {
    let webhook = MockWebhook::accepting().await.unwrap();
    let server = TestServer::builder()
        .with_webhook(webhook.url())
        .start()
        .await
        .expect("Failed to start server");

    let response = server.post("/api/appeals", &SubmitAppeal::steve()).await.unwrap();
    let appeal: AppealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let received = webhook.received().await;
    assert_eq!(received.len(), 1);
    let content = received[0]["content"].as_str().unwrap();
    assert!(content.contains("Steve_01"));
    assert!(content.contains("Hacking / Cheating"));
    assert!(content.contains(&appeal.id));
}

#[tokio::test]
async fn test_submit_succeeds_when_webhook_fails() {
    let webhook = MockWebhook::start(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    let server = TestServer::builder()
        .with_webhook(webhook.url())
        .start()
        .await
        .expect("Failed to start server");

    let response = server.post("/api/appeals", &SubmitAppeal::steve()).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(webhook.received().await.len(), 1);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_list_appeals_most_recent_first() {
    let server = TestServer::builder()
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    let first = SubmitAppeal::unique();
    let second = SubmitAppeal::steve();
    server.post("/api/appeals", &first).await.unwrap();
    server.post("/api/appeals", &second).await.unwrap();

    let response = server.get_auth("/api/appeals", TEST_ADMIN_TOKEN).await.unwrap();
    let appeals: Vec<AppealResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(appeals.len(), 2);
    assert_eq!(appeals[0].username, "Steve_01");
    assert_eq!(appeals[1].username, first.username);
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let server = TestServer::builder()
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    let missing = server.get("/api/appeals").await.unwrap();
    assert_error(missing, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();

    let wrong = server.get_auth("/api/appeals", "not-the-token").await.unwrap();
    assert_status(wrong, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_routes_disabled_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_auth("/api/appeals", "anything").await.unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "ADMIN_DISABLED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_and_decide_appeal() {
    let server = TestServer::builder()
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    let response = server.post("/api/appeals", &SubmitAppeal::unique()).await.unwrap();
    let created: AppealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/appeals/{}", created.id);

    let response = server.get_auth(&path, TEST_ADMIN_TOKEN).await.unwrap();
    let fetched: AppealResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);

    let status_path = format!("{path}/status");
    let response = server
        .patch_auth(&status_path, TEST_ADMIN_TOKEN, &UpdateStatus::approved())
        .await
        .unwrap();
    let decided: AppealResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(decided.status, "approved");

    let response = server
        .patch_auth(&status_path, TEST_ADMIN_TOKEN, &UpdateStatus::denied())
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_status_cannot_return_to_pending() {
    let server = TestServer::builder()
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    let response = server.post("/api/appeals", &SubmitAppeal::unique()).await.unwrap();
    let created: AppealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/appeals/{}/status", created.id),
            TEST_ADMIN_TOKEN,
            &json!({ "status": "pending" }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_unknown_appeal() {
    let server = TestServer::builder()
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    let response = server
        .get_auth("/api/appeals/no-such-appeal", TEST_ADMIN_TOKEN)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Webhook Relay Tests
// ============================================================================

#[tokio::test]
async fn test_relay_not_configured() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/webhook/appeal", &SubmitAppeal::steve())
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "WEBHOOK_NOT_CONFIGURED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_relay_delivers_message() {
    let webhook = MockWebhook::accepting().await.unwrap();
    let server = TestServer::builder()
        .with_webhook(webhook.url())
        .start()
        .await
        .expect("Failed to start server");

    let response = server
        .post("/api/webhook/appeal", &SubmitAppeal::steve())
        .await
        .unwrap();
    let relay: RelayResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(relay.success);
    assert_eq!(relay.message, "Appeal sent to Discord");

    let received = webhook.received().await;
    assert_eq!(received.len(), 1);
    assert!(received[0]["content"].as_str().unwrap().contains("steve#0001"));
}

#[tokio::test]
async fn test_relay_echoes_rejection_status() {
    let webhook = MockWebhook::start(axum::http::StatusCode::NOT_FOUND)
        .await
        .unwrap();
    let server = TestServer::builder()
        .with_webhook(webhook.url())
        .start()
        .await
        .expect("Failed to start server");

    let response = server
        .post("/api/webhook/appeal", &SubmitAppeal::steve())
        .await
        .unwrap();
    let body = assert_error(response, StatusCode::NOT_FOUND, "WEBHOOK_REJECTED")
        .await
        .unwrap();
    assert_eq!(body["error"]["message"], "Failed to send webhook");
}

#[tokio::test]
async fn test_relay_does_not_store_appeal() {
    let webhook = MockWebhook::accepting().await.unwrap();
    let server = TestServer::builder()
        .with_webhook(webhook.url())
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    server
        .post("/api/webhook/appeal", &SubmitAppeal::steve())
        .await
        .unwrap();

    let response = server.get_auth("/api/appeals", TEST_ADMIN_TOKEN).await.unwrap();
    let appeals: Vec<AppealResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(appeals.is_empty());
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_submit_with_database() {
    let Some(url) = test_database_url() else {
        return;
    };

    let server = TestServer::builder()
        .with_database(url)
        .with_admin()
        .start()
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    let ready: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ready["checks"]["database"], "healthy");

    let request = SubmitAppeal::unique();
    let response = server.post("/api/appeals", &request).await.unwrap();
    let created: AppealResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/appeals/{}", created.id), TEST_ADMIN_TOKEN)
        .await
        .unwrap();
    let fetched: AppealResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.username, request.username);

    // The primary took the write, so nothing reached the local store
    assert!(!server.data_dir().join("zcraft_appeals.json").exists());
}
