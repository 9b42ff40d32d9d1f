//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, API_PORT, ASSET_GATEWAY_URL,
//!   ASSET_GATEWAY_API_KEY
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::{multipart, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Identity Tests
// ============================================================================

#[tokio::test]
async fn test_signup_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/signup", &request).await.unwrap();
    let body: SignupResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.username, request.username);
    assert!(!body.id.is_empty());
    assert_eq!(body.message, "User created successfully");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    server.post("/signup", &request).await.unwrap();

    // The legacy contract reports the conflict as 400, not 409
    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_signup_invalid_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    let signup_response = server.post("/signup", &signup_req).await.unwrap();
    let created: SignupResponse = assert_json(signup_response, StatusCode::OK).await.unwrap();

    let login_req = LoginRequest::from_signup(&signup_req);
    let response = server.post("/login", &login_req).await.unwrap();
    let body: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.username, signup_req.username);
    assert_eq!(body.id, created.id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let signup_req = SignupRequest::unique();
    server.post("/signup", &signup_req).await.unwrap();

    let response = server
        .post(
            "/login",
            &LoginRequest {
                email: signup_req.email.clone(),
                password: "wrong-password".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/login",
            &LoginRequest {
                email: "nonexistent@example.com".to_string(),
                password: "whatever".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Event Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_create_event_without_image_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let form = multipart::Form::new()
        .text("eventName", "Hack Night")
        .text("description", "An evening of hacking")
        .text("date", "2025-06-01")
        .text("id", "creator-9");

    let response = server.post_multipart("/createevent", form).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_events() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/sendevents").await.unwrap();
    let _events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_event_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/events",
            &GetEventRequest {
                event_id: "not-a-uuid".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_event_unknown_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/events",
            &GetEventRequest {
                event_id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_add_attendee_unknown_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/addattendee",
            &AddAttendeeRequest {
                event_id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_string(),
                id: "u1".to_string(),
                username: "Ann".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_add_attendee_malformed_event_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/addattendee",
            &AddAttendeeRequest {
                event_id: "garbage".to_string(),
                id: "u1".to_string(),
                username: "Ann".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Activity Tests
// ============================================================================

#[tokio::test]
async fn test_events_by_unknown_user_is_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let suffix = unique_suffix();
    let response = server
        .post(
            "/eventsbyuser",
            &EventsByUserRequest {
                id: format!("no-such-user-{suffix}"),
            },
        )
        .await
        .unwrap();
    let body: EventsByUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.created.is_empty());
    assert!(body.attended.is_empty());
}
