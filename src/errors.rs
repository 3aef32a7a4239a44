use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the music service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("not authenticated: {0}. Please run ytplaylists auth")]
    Auth(String),

    #[error("playlist '{0}' not found")]
    PlaylistNotFound(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}
