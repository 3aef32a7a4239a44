//! # API Module
//!
//! HTTP endpoints of the local server started by `ytplaylists auth`:
//!
//! - [`callback`] receives the authorization code from Google and exchanges
//!   it for a token using the PKCE code verifier held in shared state.
//! - [`health`] returns status and version information.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
