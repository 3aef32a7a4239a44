//! YouTube Music Playlist Tools Library
//!
//! This library sorts, cleans and audits playlists in a YouTube Music
//! library through the service's web API. It includes modules for API
//! communication, the playlist logic, report rendering, CLI operations and
//! configuration management.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Error types for API and configuration failures
//! - `management` - OAuth token caching and refresh
//! - `playlist` - Playlist access, classification, matching and mutation
//! - `report` - Markdown table rendering for track reports
//! - `server` - Local HTTP server for OAuth callbacks
//! - `types` - Data structures and type definitions
//! - `utils` - Title normalization and other helpers
//! - `ytmusic` - YouTube Music web API client
//!
//! # Example
//!
//! ```
//! use ytplaylists::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> ytplaylists::Res<()> {
//!     config::load_env().await?;
//!     let api = cli::connect(config::Config::from_env()?).await?;
//!     cli::problems(&api, "Road Trip", 7).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod playlist;
pub mod report;
pub mod server;
pub mod types;
pub mod utils;
pub mod ytmusic;

/// Result alias for command-level glue.
///
/// Library modules return typed errors from [`errors`]; commands box them
/// so the binary can print any failure the same way.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line with a blue `o` bullet to stdout.
///
/// ```
/// info!("Checking {} tracks of {}", count, title);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a green check mark line to stdout.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only for the binary's top level; library code returns errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr. Used for recoverable failures such
/// as a mutating call that did not report success.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
