//! # CLI Module
//!
//! Command implementations behind the `ytplaylists` binary. Each command
//! fetches fresh playlist state, runs the playlist logic from
//! [`crate::playlist`] and prints its report as markdown tables.
//!
//! ## Commands
//!
//! - [`auth`] - Authorize with Google and cache the OAuth token
//! - [`problems`] - Report duplicate, long, unliked, unavailable and low quality tracks
//! - [`sort`] - Sort a playlist by title, archiving its previous order
//! - [`clean`] - Replace explicit tracks with clean versions in a second playlist
//! - [`compare`] - List the tracks only one of two playlists contains
//! - [`rename`] - Rename a playlist, replacing any playlist with the new title
//!
//! ## Usage
//!
//! ```bash
//! ytplaylists auth
//! ytplaylists problems "Road Trip" 7
//! ytplaylists sort "Road Trip" "Road Trip (archive)"
//! ytplaylists clean "Road Trip" "Road Trip Clean" "Road Trip Clean (archive)"
//! ytplaylists compare "Road Trip" "Road Trip Clean"
//! ```
//!
//! Commands are generic over [`crate::ytmusic::MusicApi`] and return
//! [`crate::Res`]; the binary turns errors into an `error!` line.

mod auth;
mod clean;
mod compare;
mod problems;
mod rename;
mod sort;

pub use auth::{auth, connect};
pub use clean::clean;
pub use compare::compare;
pub use problems::problems;
pub use rename::rename;
pub use sort::sort;

use crate::{
    info,
    playlist::writer::Overwrite,
    report::{TrackField, render_tracks},
    success,
    types::Track,
};

/// Prints a titled report section, or a success line when it is empty.
pub(crate) fn print_section<'a, I>(title: &str, tracks: I, fields: &[TrackField])
where
    I: IntoIterator<Item = &'a Track>,
{
    let tracks: Vec<&Track> = tracks.into_iter().collect();
    if tracks.is_empty() {
        success!("{}: none", title);
        return;
    }

    info!("{} ({})", title, tracks.len());
    println!("{}\n", render_tracks(tracks, fields));
}

/// Error message for an overwrite the service did not fully apply.
pub(crate) fn incomplete(live_title: &str, archive_title: &str, overwrite: &Overwrite) -> String {
    format!(
        "{} was not fully rewritten ({}); its previous contents are in {}",
        live_title,
        overwrite.failures.join("; "),
        archive_title
    )
}
