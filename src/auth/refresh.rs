// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Background token refresh.
//!
//! A recurring check rotates the token pair before the access token
//! expires. A failed refresh forces a sign-out through the same
//! notification channel the session store uses.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Utc};

use super::AuthSession;

/// Margin before token expiration when we proactively refresh (5 minutes).
const TOKEN_REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// How often the recurring check runs.
const REFRESH_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// True when the access token is within the refresh margin of expiring,
/// boundary inclusive. An unparseable expiry is never refresh-eligible.
pub fn should_refresh(expires_at: &str) -> bool {
    let Ok(expires_at) = DateTime::parse_from_rfc3339(expires_at) else {
        return false;
    };
    expires_at.with_timezone(&Utc) - ChronoDuration::seconds(TOKEN_REFRESH_MARGIN_SECS)
        <= Utc::now()
}

/// Handle for the recurring refresh schedule. Dropping it cancels the
/// schedule; no timer outlives the session scope.
pub struct TokenRefresher {
    handle: tokio::task::JoinHandle<()>,
}

impl TokenRefresher {
    /// Start the schedule: one check immediately, then one every minute.
    pub fn spawn(session: Arc<AuthSession>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(REFRESH_CHECK_INTERVAL);
            loop {
                ticker.tick().await;
                run_refresh_check(&session).await;
            }
        });
        Self { handle }
    }
}

impl Drop for TokenRefresher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// One refresh tick.
///
/// Skips unless the session holds tokens with a non-empty refresh token and
/// a refresh-eligible access expiry. On success the new pair is installed
/// through the session store (epoch-guarded, so a result from before a
/// logout is dropped); on failure the session is signed out.
pub async fn run_refresh_check(session: &AuthSession) {
    let epoch = session.current_epoch();
    let Some(tokens) = session.tokens() else {
        return;
    };
    if tokens.refresh.is_empty() || !should_refresh(&tokens.access_expires_at) {
        return;
    }

    match session.client().refresh(&tokens.refresh).await {
        Ok(response) => {
            if session.apply_refreshed_tokens(epoch, response.into()) {
                tracing::debug!("Access token refreshed");
            } else {
                tracing::debug!("Dropped refresh result for a signed-out session");
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "Token refresh failed, signing out");
            session.invalidate(epoch);
        }
    }
}
