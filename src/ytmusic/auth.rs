use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    errors::ApiError,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

/// Runs the authorization-code flow with PKCE.
///
/// Starts the local callback server, opens the consent page in the browser
/// and waits up to two minutes for the callback to deliver a token, which is
/// then written to the token cache.
pub async fn auth(config: &Config, shared_state: Arc<Mutex<Option<PkceToken>>>) -> Result<(), String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let server_state = Arc::clone(&shared_state);
    let server_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_config, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = authorization_url(config, &code_challenge)?;

    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(t) => {
            TokenManager::new(t).persist().await?;
            success!("Authentication successful!");
            Ok(())
        }
        None => Err("Authentication failed or timed out.".to_string()),
    }
}

pub fn authorization_url(config: &Config, code_challenge: &str) -> Result<Url, String> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", config.scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .map_err(|e| format!("invalid YTM_AUTH_URL '{}': {}", config.auth_url, e))
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

pub async fn exchange_code_pkce(config: &Config, code: &str, verifier: &str) -> Result<Token, ApiError> {
    let json = post_token_form(
        config,
        &[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .await?;

    token_from_json(&json)
}

pub async fn refresh_token(config: &Config, refresh_token: &str) -> Result<Token, ApiError> {
    let json = post_token_form(
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ],
    )
    .await?;

    token_from_json(&json)
}

async fn post_token_form(config: &Config, form: &[(&str, &str)]) -> Result<Value, ApiError> {
    let client = Client::new();
    let res = client.post(&config.token_url).form(form).send().await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    Ok(res.json().await?)
}

/// Reads a token endpoint response. Only `access_token` is mandatory.
pub fn token_from_json(json: &Value) -> Result<Token, ApiError> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| ApiError::Auth("token response without access_token".into()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
