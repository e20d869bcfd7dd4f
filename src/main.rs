// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Matchday client
//!
//! Signs in to the matches backend, keeps the session's tokens fresh in the
//! background, prints the first page of matches, and exports the full match
//! dataset to a dated CSV file.

use std::sync::Arc;

use matchday::api::{ApiClient, MATCHES_PAGE_SIZE};
use matchday::auth::refresh::TokenRefresher;
use matchday::auth::{scope, AuthSession, OnAuthChange};
use matchday::config::Config;
use matchday::export;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting matchday");

    let client = ApiClient::new(config.api_base_url.clone());

    let on_change: OnAuthChange = Arc::new(|tokens| match tokens {
        Some(_) => tracing::debug!("Session tokens updated"),
        None => tracing::debug!("Session signed out"),
    });
    let session = AuthSession::with_listener(client.clone(), Some(on_change));

    // Nothing persists tokens across runs, so hydration settles anonymous.
    session.hydrate(Box::pin(async { Ok(None) })).await;

    scope::with_session(session.clone(), async move {
        let session = scope::current();

        session.login(&config.email, &config.password).await?;
        if let Some(user) = session.current_user() {
            tracing::info!(user = %user.name, "Signed in");
        }

        // Keeps the access token fresh until dropped at the end of the scope.
        let _refresher = TokenRefresher::spawn(session.clone());

        let tokens = session.tokens();
        let access = tokens.as_ref().map(|t| t.access.as_str());

        let first_page = client.list_matches(access, 0, MATCHES_PAGE_SIZE).await?;
        tracing::info!(total = first_page.total, "Fetched first page of matches");
        for m in &first_page.matches {
            println!(
                "{}  {:<10}  {} {}-{}",
                m.match_id,
                m.sport,
                m.start_day(),
                m.start_time(),
                m.end_time()
            );
        }

        let path = export::export_matches_csv(&client, access, &config.export_dir).await?;
        println!("Exported matches to {}", path.display());

        session.logout();
        Ok::<(), anyhow::Error>(())
    })
    .await
}

/// Initialize structured logging with an env-filter override.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("matchday=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
