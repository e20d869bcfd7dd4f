// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::{Arc, Mutex};

use matchday::api::ApiClient;
use matchday::auth::{AuthSession, OnAuthChange};
use matchday::models::TokensData;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock backend.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri())
}

/// Token payload in the backend's wire shape.
#[allow(dead_code)]
pub fn token_response_body() -> serde_json::Value {
    json!({
        "accessToken": "access-1",
        "accessTokenExpiresAt": "2030-01-01T00:00:00Z",
        "refreshToken": "refresh-1",
        "refreshTokenExpiresAt": "2030-02-01T00:00:00Z",
    })
}

/// The tokens `token_response_body` converts to.
#[allow(dead_code)]
pub fn tokens() -> TokensData {
    TokensData {
        access: "access-1".to_string(),
        access_expires_at: "2030-01-01T00:00:00Z".to_string(),
        refresh: "refresh-1".to_string(),
        refresh_expires_at: "2030-02-01T00:00:00Z".to_string(),
    }
}

/// User profile in the backend's wire shape.
#[allow(dead_code)]
pub fn user_body() -> serde_json::Value {
    json!({
        "userId": "user-1",
        "displayName": "Alice Smith",
        "email": "alice@example.com",
    })
}

/// Mount a successful login endpoint, asserting it is hit exactly
/// `expected_calls` times.
#[allow(dead_code)]
pub async fn mock_login(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v3/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mount a successful user-profile endpoint.
#[allow(dead_code)]
pub async fn mock_me(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(server)
        .await;
}

/// Recorded listener notifications (cloned token values, `None` for
/// sign-out).
#[allow(dead_code)]
pub type Notifications = Arc<Mutex<Vec<Option<TokensData>>>>;

/// Session store wired to the mock backend with a recording listener.
#[allow(dead_code)]
pub fn test_session(server: &MockServer) -> (Arc<AuthSession>, Notifications) {
    let notifications: Notifications = Arc::new(Mutex::new(Vec::new()));
    let recorded = notifications.clone();
    let listener: OnAuthChange = Arc::new(move |tokens| {
        recorded.lock().unwrap().push(tokens.cloned());
    });

    let session = AuthSession::with_listener(test_client(server), Some(listener));
    (session, notifications)
}
