//! Configuration management for ytplaylists.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. They are resolved once at startup into
//! a [`Config`] that is handed to the client explicitly.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::errors::ConfigError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/youtube";
pub const DEFAULT_API_URL: &str = "https://music.youtube.com/youtubei/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives in:
/// - Linux: `~/.local/share/ytplaylists/.env`
/// - macOS: `~/Library/Application Support/ytplaylists/.env`
/// - Windows: `%LOCALAPPDATA%/ytplaylists/.env`
///
/// A missing file is reported as an error string; callers may still continue
/// when the variables are exported in the shell.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

/// Root of everything ytplaylists stores locally.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ytplaylists");
    path
}

/// Settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub server_addr: String,
    pub auth_url: String,
    pub token_url: String,
    pub scope: String,
    pub api_url: String,
    /// `None` disables the HTTP client's request timeout.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let request_timeout = match lookup("YTM_REQUEST_TIMEOUT_SECS") {
            None => Some(Duration::from_secs(30)),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        var: "YTM_REQUEST_TIMEOUT_SECS",
                        value,
                    });
                }
            },
        };

        Ok(Config {
            client_id: required("YTM_CLIENT_ID")?,
            client_secret: required("YTM_CLIENT_SECRET")?,
            redirect_uri: or_default("YTM_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            server_addr: or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            auth_url: or_default("YTM_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("YTM_TOKEN_URL", DEFAULT_TOKEN_URL),
            scope: or_default("YTM_SCOPE", DEFAULT_SCOPE),
            api_url: or_default("YTM_API_URL", DEFAULT_API_URL),
            request_timeout,
        })
    }
}
