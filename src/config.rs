//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the matches backend
    pub api_base_url: String,
    /// Account email used for sign-in
    pub email: String,
    /// Account password used for sign-in
    pub password: String,
    /// Directory where CSV exports are written
    pub export_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_base_url: env::var("MATCHES_API_URL")
                .map_err(|_| ConfigError::Missing("MATCHES_API_URL"))?,
            email: env::var("MATCHES_EMAIL").map_err(|_| ConfigError::Missing("MATCHES_EMAIL"))?,
            password: env::var("MATCHES_PASSWORD")
                .map_err(|_| ConfigError::Missing("MATCHES_PASSWORD"))?,
            export_dir: env::var("MATCHES_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
