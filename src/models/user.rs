//! User profile models.

use serde::{Deserialize, Serialize};

/// Backend user record from `GET /v1/users/me`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub display_name: String,
    /// Email address (may be absent or null if not shared)
    #[serde(default)]
    pub email: Option<String>,
}

/// Projection of the backend user record kept in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: String,
    pub name: String,
    /// Empty string when the backend has no email for the user
    pub email: String,
}

impl From<UserResponse> for UserData {
    fn from(user: UserResponse) -> Self {
        Self {
            user_id: user.user_id,
            name: user.display_name,
            email: user.email.unwrap_or_default(),
        }
    }
}
