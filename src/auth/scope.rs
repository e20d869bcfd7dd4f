// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scoped access to the session store.
//!
//! The store is created once at application start and made available to the
//! code below it through a task-local scope, so call sites deep in the call
//! graph do not need it threaded through every signature.

use std::future::Future;
use std::sync::Arc;

use super::AuthSession;

tokio::task_local! {
    static CURRENT_SESSION: Arc<AuthSession>;
}

/// Run `fut` with `session` installed as the ambient session store.
pub async fn with_session<F: Future>(session: Arc<AuthSession>, fut: F) -> F::Output {
    CURRENT_SESSION.scope(session, fut).await
}

/// Return the ambient session store. A lookup, never a mutation.
///
/// # Panics
///
/// Panics when called outside a [`with_session`] scope. That is a
/// programming error, not a recoverable condition: wrap the calling task in
/// `with_session` to fix it.
pub fn current() -> Arc<AuthSession> {
    CURRENT_SESSION
        .try_with(Arc::clone)
        .unwrap_or_else(|_| {
            panic!(
                "auth::scope::current() must be called from within with_session. \
                 Wrap the calling task in auth::scope::with_session to fix this error."
            )
        })
}
