use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    Res, config::Config, management::TokenManager, types::PkceToken, ytmusic, ytmusic::YtMusic,
};

pub async fn auth(config: &Config) -> Res<()> {
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    ytmusic::auth::auth(config, shared_state).await?;
    Ok(())
}

/// Builds the client from the cached token.
pub async fn connect(config: Config) -> Res<YtMusic> {
    let tokens = TokenManager::load()
        .await
        .map_err(|e| format!("Failed to load token. Please run ytplaylists auth\n Error: {}", e))?;
    Ok(YtMusic::new(config, tokens)?)
}
