// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state store: hydration, login, logout, change notification.
//!
//! The store owns the token pair and the signed-in user for the lifetime of
//! the application. State moves between three shapes, making partially
//! populated sessions unrepresentable:
//!
//! - `Unresolved`: hydration has not settled yet (not the same as signed out)
//! - `Anonymous`: determined signed-out
//! - `Authenticated`: tokens and user both known
//!
//! Every asynchronous transition snapshots the session epoch before its
//! first await; logout bumps the epoch, so results of operations started
//! before a logout are dropped instead of resurrecting the old session.

pub mod refresh;
pub mod scope;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::future::BoxFuture;
use parking_lot::RwLock;

use crate::api::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::{TokensData, UserData};

/// Listener invoked whenever the stored tokens become determined: `Some` on
/// login, refresh, or hydration with tokens; `None` on logout, forced
/// sign-out, or hydration without tokens. Never invoked while the state is
/// still `Unresolved`.
pub type OnAuthChange = Arc<dyn Fn(Option<&TokensData>) + Send + Sync>;

/// Future supplying the tokens a previous session left behind, if any.
pub type InitialTokens = BoxFuture<'static, anyhow::Result<Option<TokensData>>>;

/// Session state.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// Initial state; hydration has not settled. Consumers must not treat
    /// this as signed out.
    #[default]
    Unresolved,
    /// Determined signed-out.
    Anonymous,
    /// Signed in; tokens and user are installed together.
    Authenticated { tokens: TokensData, user: UserData },
}

impl Session {
    pub fn tokens(&self) -> Option<&TokensData> {
        match self {
            Session::Authenticated { tokens, .. } => Some(tokens),
            _ => None,
        }
    }

    pub fn current_user(&self) -> Option<&UserData> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// True once hydration (or a later transition) has determined the state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Session::Unresolved)
    }
}

/// The session store. Construct once per application, share via `Arc`.
pub struct AuthSession {
    client: ApiClient,
    state: RwLock<Session>,
    /// Bumped on every sign-out so in-flight results from the previous
    /// session are dropped.
    epoch: AtomicU64,
    /// Serializes login against hydration and against concurrent logins.
    login_gate: tokio::sync::Mutex<()>,
    on_change: Option<OnAuthChange>,
}

impl AuthSession {
    /// Create a store with no change listener.
    pub fn new(client: ApiClient) -> Arc<Self> {
        Self::with_listener(client, None)
    }

    /// Create a store that notifies `on_change` on every determined token
    /// transition.
    pub fn with_listener(client: ApiClient, on_change: Option<OnAuthChange>) -> Arc<Self> {
        Arc::new(Self {
            client,
            state: RwLock::new(Session::Unresolved),
            epoch: AtomicU64::new(0),
            login_gate: tokio::sync::Mutex::new(()),
            on_change,
        })
    }

    /// The API client this session authenticates against.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> Session {
        self.state.read().clone()
    }

    /// Snapshot of the stored tokens, if signed in.
    pub fn tokens(&self) -> Option<TokensData> {
        self.state.read().tokens().cloned()
    }

    /// Snapshot of the signed-in user, if any.
    pub fn current_user(&self) -> Option<UserData> {
        self.state.read().current_user().cloned()
    }

    /// Epoch observed by asynchronous transitions; see [`AuthSession`].
    pub fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Resolve the initial session state from an externally supplied tokens
    /// future. Runs once at startup; any failure degrades to a signed-out
    /// session and is logged rather than propagated. A no-op once the state
    /// is already resolved, so a hydration that settles late cannot clobber
    /// a login that won the gate first.
    pub async fn hydrate(&self, initial_tokens: InitialTokens) {
        let _gate = self.login_gate.lock().await;
        if self.state.read().is_resolved() {
            tracing::debug!("Session already resolved, skipping hydration");
            return;
        }
        let epoch = self.current_epoch();

        let tokens = match initial_tokens.await {
            Ok(Some(tokens)) => tokens,
            Ok(None) => {
                self.install(epoch, Session::Anonymous);
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load initial tokens");
                self.install(epoch, Session::Anonymous);
                return;
            }
        };

        match self.fetch_user(&tokens.access).await {
            Ok(user) => {
                self.install(epoch, Session::Authenticated { tokens, user });
                tracing::info!("Session hydrated from initial tokens");
            }
            Err(err) => {
                // Fail closed: no tokens may outlive a failed user fetch here.
                tracing::error!(error = %err, "Failed to load user for initial tokens");
                self.install(epoch, Session::Anonymous);
            }
        }
    }

    /// Sign in with email/password.
    ///
    /// Rejects with [`ApiError::AlreadyLoggedIn`] when a user is already
    /// signed in, without touching the network. Waits for hydration to
    /// settle before acting. A failed user fetch after a successful login
    /// call leaves the store untouched (the obtained tokens are discarded)
    /// and propagates the error.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        if self.current_user().is_some() {
            return Err(ApiError::AlreadyLoggedIn);
        }

        let _gate = self.login_gate.lock().await;
        if self.current_user().is_some() {
            return Err(ApiError::AlreadyLoggedIn);
        }
        let epoch = self.current_epoch();

        let tokens: TokensData = self.client.login(email, password).await?.into();
        let user = self.fetch_user(&tokens.access).await?;

        if !self.install(epoch, Session::Authenticated { tokens, user }) {
            return Err(ApiError::Superseded);
        }

        tracing::info!("Login succeeded");
        Ok(())
    }

    /// Sign out unconditionally and notify the listener with `None`.
    pub fn logout(&self) {
        {
            let mut state = self.state.write();
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = Session::Anonymous;
        }
        self.notify(None);
        tracing::info!("Signed out");
    }

    /// Fetch the user profile for the given access token.
    pub async fn fetch_user(&self, access_token: &str) -> Result<UserData> {
        Ok(self.client.get_me(Some(access_token)).await?.into())
    }

    /// Install tokens produced by a background refresh, keeping the current
    /// user. Returns false (and changes nothing) when the session was signed
    /// out after the refresh started or is no longer authenticated.
    pub fn apply_refreshed_tokens(&self, epoch: u64, tokens: TokensData) -> bool {
        {
            let mut state = self.state.write();
            if self.epoch.load(Ordering::SeqCst) != epoch {
                return false;
            }
            let user = match &*state {
                Session::Authenticated { user, .. } => user.clone(),
                _ => return false,
            };
            *state = Session::Authenticated {
                tokens: tokens.clone(),
                user,
            };
        }
        self.notify(Some(&tokens));
        true
    }

    /// Force a sign-out (failed refresh), unless a logout already happened
    /// since `epoch` was observed. Returns whether the sign-out applied.
    pub fn invalidate(&self, epoch: u64) -> bool {
        {
            let mut state = self.state.write();
            if self.epoch.load(Ordering::SeqCst) != epoch {
                return false;
            }
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = Session::Anonymous;
        }
        self.notify(None);
        true
    }

    /// Apply `next` unless the epoch moved. Notifies the listener with the
    /// new token value on success.
    fn install(&self, epoch: u64, next: Session) -> bool {
        let tokens = {
            let mut state = self.state.write();
            if self.epoch.load(Ordering::SeqCst) != epoch {
                tracing::debug!("Dropping stale session transition");
                return false;
            }
            let tokens = next.tokens().cloned();
            *state = next;
            tokens
        };
        self.notify(tokens.as_ref());
        true
    }

    fn notify(&self, tokens: Option<&TokensData>) {
        if let Some(listener) = &self.on_change {
            listener(tokens);
        }
    }
}
