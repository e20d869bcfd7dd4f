// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types shared by the API client, session store, and exporter.

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Login was attempted while a user is already signed in.
    #[error("User is already logged in")]
    AlreadyLoggedIn,

    /// The backend answered with a non-success status. Carries the
    /// backend-supplied `message` field when the body had one.
    #[error("{0}")]
    Backend(String),

    /// Network-level failure or an unparseable response body.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The session was signed out before the operation completed; its
    /// result was dropped rather than resurrecting the old session.
    #[error("Session was signed out before the operation completed")]
    Superseded,

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
