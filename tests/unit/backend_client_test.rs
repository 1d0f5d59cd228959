//! Integration tests for the backend REST client, run against a local
//! mock server.
//!
//! The mocks assert the request side of the contract (paths, headers,
//! bodies, expected status codes) and feed back canned responses to
//! exercise decoding and error extraction.

use passify::services::backend_client::BackendClient;
use passify::types::auth::{ResetPasswordPayload, SignInPayload, SignUpPayload, TokenPair};
use passify::types::entry::EntryPayload;
use passify::types::errors::ApiError;
use passify::types::profile::DeleteAccountPayload;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn expected_user_agent() -> String {
    format!("Passify Desktop/1.0 ({})", std::env::consts::OS)
}

fn sign_in_payload() -> SignInPayload {
    SignInPayload {
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
    }
}

fn entry_payload() -> EntryPayload {
    EntryPayload {
        title: "GitHub".to_string(),
        username: "ada".to_string(),
        password: "s3cret!Pass".to_string(),
        url: "https://github.com".to_string(),
        notes: String::new(),
    }
}

/// Client with an installed session, for the authenticated endpoints.
fn signed_in_client(server: &MockServer) -> BackendClient {
    let mut client = BackendClient::new(&server.uri(), "Passify");
    client.set_session(TokenPair {
        access: "test-access".to_string(),
        refresh: "test-refresh".to_string(),
    });
    client
}

// === Sign-in ===

#[tokio::test]
async fn test_sign_in_stores_token_pair() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/jwt/create/"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "acc-1",
            "refresh": "ref-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = BackendClient::new(&server.uri(), "Passify");
    assert!(!client.is_authenticated());

    client.sign_in(&sign_in_payload()).await.unwrap();
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_sign_in_sends_custom_user_agent() {
    let server = MockServer::start().await;
    let ua = expected_user_agent();
    Mock::given(method("POST"))
        .and(path("/auth/jwt/create/"))
        .and(header("User-Agent", ua.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "acc-1",
            "refresh": "ref-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = BackendClient::new(&server.uri(), "Passify");
    client.sign_in(&sign_in_payload()).await.unwrap();
}

#[tokio::test]
async fn test_sign_in_rejection_carries_extracted_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/jwt/create/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let mut client = BackendClient::new(&server.uri(), "Passify");
    let err = client.sign_in(&sign_in_payload()).await.unwrap_err();
    match err {
        ApiError::Status { code, message } => {
            assert_eq!(code, 401);
            assert_eq!(message, "No active account found with the given credentials");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_sign_in_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/jwt/create/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "old-style" })))
        .mount(&server)
        .await;

    let mut client = BackendClient::new(&server.uri(), "Passify");
    let err = client.sign_in(&sign_in_payload()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_trailing_slash_in_domain_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/jwt/create/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "acc-1",
            "refresh": "ref-1"
        })))
        .mount(&server)
        .await;

    let mut client = BackendClient::new(&format!("{}/", server.uri()), "Passify");
    client.sign_in(&sign_in_payload()).await.unwrap();
}

// === Refresh ===

#[tokio::test]
async fn test_refresh_replaces_access_token_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/jwt/refresh/"))
        .and(body_json(json!({ "refresh": "test-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "acc-2" })))
        .expect(1)
        .mount(&server)
        .await;
    // The follow-up request proves the new access token is in use.
    Mock::given(method("GET"))
        .and(path("/my/database/"))
        .and(header("Authorization", "JWT acc-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = signed_in_client(&server);
    client.refresh().await.unwrap();
    let entries = client.list_entries().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_refresh_reuses_stored_refresh_token() {
    // The session's refresh token survives each exchange; only a working
    // copy is handed to the request. Both refreshes must send the same
    // token.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/jwt/refresh/"))
        .and(body_json(json!({ "refresh": "test-refresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "acc-2" })))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = signed_in_client(&server);
    client.refresh().await.unwrap();
    client.refresh().await.unwrap();
}

#[tokio::test]
async fn test_refresh_without_session_is_not_authenticated() {
    let mut client = BackendClient::new("http://127.0.0.1:9", "Passify");
    let err = client.refresh().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
}

// === Sign-up and reset ===

#[tokio::test]
async fn test_sign_up_expects_created() {
    let server = MockServer::start().await;
    let ua = expected_user_agent();
    Mock::given(method("POST"))
        .and(path("/auth/users/"))
        .and(header("User-Agent", ua.as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri(), "Passify");
    let payload = SignUpPayload {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "difference".to_string(),
        re_password: "difference".to_string(),
    };
    client.sign_up(&payload).await.unwrap();
}

#[tokio::test]
async fn test_sign_up_field_errors_are_newline_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/users/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "password": ["This password is too short.", "This password is too common."],
            "email": ["user with this email already exists."]
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri(), "Passify");
    let payload = SignUpPayload {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "password".to_string(),
        re_password: "password".to_string(),
    };
    let err = client.sign_up(&payload).await.unwrap_err();
    match err {
        ApiError::Status { code: 400, message } => {
            // Messages follow the field order of the response body.
            assert_eq!(
                message,
                "This password is too short.\nThis password is too common.\nuser with this email already exists."
            );
        }
        other => panic!("expected 400, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reset_password_expects_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/users/reset_password/"))
        .and(body_json(json!({ "email": "ada@example.com" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(&server.uri(), "Passify");
    let payload = ResetPasswordPayload {
        email: "ada@example.com".to_string(),
    };
    client.reset_password(&payload).await.unwrap();
}

// === Authenticated requests ===

#[tokio::test]
async fn test_authenticated_requests_carry_jwt_scheme() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my/database/"))
        .and(header("Authorization", "JWT test-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": format!("{}/my/database/1/", server.uri()),
                "title": "GitHub",
                "username": "ada",
                "password": "s3cret!Pass",
                "url": "https://github.com",
                "notes": "work account"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let entries = client.list_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "GitHub");
    assert!(entries[0].id.ends_with("/my/database/1/"));
}

#[tokio::test]
async fn test_authenticated_call_without_session_never_hits_network() {
    let client = BackendClient::new("http://127.0.0.1:9", "Passify");
    let err = client.list_entries().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
}

#[tokio::test]
async fn test_create_entry_posts_to_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/my/database/"))
        .and(body_json(json!({
            "title": "GitHub",
            "username": "ada",
            "password": "s3cret!Pass",
            "url": "https://github.com",
            "notes": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": format!("{}/my/database/9/", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    client.create_entry(&entry_payload()).await.unwrap();
}

#[tokio::test]
async fn test_entry_detail_operations_use_hyperlinked_id() {
    let server = MockServer::start().await;
    let id_url = format!("{}/my/database/5/", server.uri());

    Mock::given(method("GET"))
        .and(path("/my/database/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id_url.clone(),
            "title": "Mail",
            "username": "ada@example.com",
            "password": "another-pass",
            "url": "https://mail.example.com",
            "notes": ""
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/my/database/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": id_url.clone() })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/my/database/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);

    let entry = client.fetch_entry(&id_url).await.unwrap();
    assert_eq!(entry.title, "Mail");

    let mut updated = entry_payload();
    updated.title = "Mail (personal)".to_string();
    client.update_entry(&id_url, &updated).await.unwrap();

    client.delete_entry(&id_url).await.unwrap();
}

#[tokio::test]
async fn test_unexpected_success_code_is_status_error() {
    // A 200 where 204 is required still counts as a failure.
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/my/database/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let id_url = format!("{}/my/database/5/", server.uri());
    let err = client.delete_entry(&id_url).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { code: 200, .. }));
}

// === Profile ===

#[tokio::test]
async fn test_fetch_profile_decodes_nullable_last_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/me/"))
        .and(header("Authorization", "JWT test-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": format!("{}/auth/users/1/", server.uri()),
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "last_login": null,
            "date_joined": "2023-11-02T18:45:12Z"
        })))
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let profile = client.fetch_profile().await.unwrap();
    assert_eq!(profile.email, "ada@example.com");
    assert!(profile.last_login.is_none());
    assert_eq!(profile.date_joined_display(), "2023-11-02 18:45:12");
}

#[tokio::test]
async fn test_delete_account_sends_password_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/users/me/"))
        .and(body_json(json!({ "current_password": "hunter22" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let payload = DeleteAccountPayload {
        current_password: "hunter22".to_string(),
    };
    client.delete_account(&payload).await.unwrap();
}

// === Transport failures ===

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let mut client = BackendClient::new("http://127.0.0.1:9", "Passify");
    let err = client.sign_in(&sign_in_payload()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
