//! Credential pair and the wire-to-internal token conversion.

use serde::{Deserialize, Serialize};

/// Access/refresh credential pair with ISO-8601 expiry timestamps.
///
/// Replaced wholesale on login and refresh, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensData {
    /// Access token sent as the bearer credential
    pub access: String,
    /// When the access token expires (ISO 8601)
    pub access_expires_at: String,
    /// Refresh token used to rotate the pair
    pub refresh: String,
    /// When the refresh token expires (ISO 8601)
    pub refresh_expires_at: String,
}

/// Token payload as returned by the login and refresh endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub access_token_expires_at: String,
    pub refresh_token: String,
    pub refresh_token_expires_at: String,
}

impl From<TokenResponse> for TokensData {
    /// Pure field renaming; nothing is validated or altered.
    fn from(response: TokenResponse) -> Self {
        Self {
            access: response.access_token,
            access_expires_at: response.access_token_expires_at,
            refresh: response.refresh_token,
            refresh_expires_at: response.refresh_token_expires_at,
        }
    }
}
