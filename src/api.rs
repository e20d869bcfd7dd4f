// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the matches backend.
//!
//! Handles:
//! - Credential login and token refresh
//! - Authenticated user-profile fetch
//! - Paginated match listing (total row count in the `total` header)

use crate::error::{ApiError, Result};
use crate::models::{Match, TokenResponse, UserResponse};
use serde::Deserialize;

/// Page size used for paginated match listings.
pub const MATCHES_PAGE_SIZE: usize = 10;

/// Matches backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape returned by the backend on non-success responses.
#[derive(Debug, Deserialize)]
struct BackendMessage {
    message: String,
}

/// One page of matches plus the total row count reported by the backend.
#[derive(Debug, Clone)]
pub struct MatchesPage {
    pub matches: Vec<Match>,
    pub total: usize,
}

impl ApiClient {
    /// Create a new client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Sign in with email/password and obtain a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let url = format!("{}/v3/auth/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        Self::check_response_json(response).await
    }

    /// Rotate the token pair using a refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        let url = format!("{}/v3/auth/refresh", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await?;

        Self::check_response_json(response).await
    }

    /// Get the signed-in user's profile, attaching the bearer token when one
    /// is supplied.
    pub async fn get_me(&self, access_token: Option<&str>) -> Result<UserResponse> {
        let url = format!("{}/v1/users/me", self.base_url);

        let mut request = self.http.get(&url);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        Self::check_response_json(request.send().await?).await
    }

    /// Fetch one page of matches.
    ///
    /// The backend reports the full row count in the `total` response
    /// header; a missing or unparseable header counts as 0.
    pub async fn list_matches(
        &self,
        access_token: Option<&str>,
        page: usize,
        size: usize,
    ) -> Result<MatchesPage> {
        let url = format!("{}/v1/matches", self.base_url);

        let mut request = self
            .http
            .get(&url)
            .query(&[("page", page.to_string()), ("size", size.to_string())]);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let total = response
            .headers()
            .get("total")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);

        let matches = Self::check_response_json(response).await?;
        Ok(MatchesPage { matches, total })
    }

    /// Check response status and parse the JSON body, surfacing the
    /// backend's `message` field on failure.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            let message = serde_json::from_str::<BackendMessage>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
            return Err(ApiError::Backend(message));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("JSON parse error: {}", e)))
    }
}
