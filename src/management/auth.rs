use std::path::PathBuf;

use chrono::Utc;

use crate::{config::Config, config::data_dir, errors::ApiError, types::Token, ytmusic};

/// Holds the OAuth token and keeps it fresh.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the cached token, falling back to tokens exported in the
    /// environment (`YTM_ACCESS_TOKEN`, `YTM_REFRESH_TOKEN`, `YTM_EXPIRES_AT`).
    pub async fn load() -> Result<Self, String> {
        match Self::load_from_cache().await {
            Ok(manager) => Ok(manager),
            Err(cache_err) => Self::from_env().ok_or(cache_err),
        }
    }

    pub async fn load_from_cache() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    fn from_env() -> Option<Self> {
        let access_token = std::env::var("YTM_ACCESS_TOKEN").ok()?;
        let refresh_token = std::env::var("YTM_REFRESH_TOKEN").unwrap_or_default();
        let now = Utc::now().timestamp() as u64;
        let expires_at = std::env::var("YTM_EXPIRES_AT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(now);

        Some(Self::new(Token {
            access_token,
            refresh_token,
            scope: String::new(),
            expires_in: expires_at.saturating_sub(now),
            obtained_at: now,
        }))
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing and persisting it first when it is
    /// about to expire.
    pub async fn get_valid_token(&mut self, config: &Config) -> Result<String, ApiError> {
        if self.is_expired() {
            if self.token.refresh_token.is_empty() {
                return Err(ApiError::Auth("token expired and no refresh token".into()));
            }

            let mut new_token = ytmusic::auth::refresh_token(config, &self.token.refresh_token).await?;
            // Google only returns a refresh token on the first exchange.
            if new_token.refresh_token.is_empty() {
                new_token.refresh_token = self.token.refresh_token.clone();
            }
            self.token = new_token;
            if let Err(e) = self.persist().await {
                log::debug!("could not persist refreshed token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
