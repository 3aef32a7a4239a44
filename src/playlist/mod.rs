//! # Playlist Module
//!
//! The playlist logic proper, written against [`crate::ytmusic::MusicApi`]:
//!
//! - [`access`] resolves playlist titles and fetches their tracks
//! - [`classify`] holds the read-only problem reports
//! - [`matcher`] finds clean replacements for explicit tracks
//! - [`reconcile`] diffs two track lists by id
//! - [`writer`] archives, overwrites and renames playlists

pub mod access;
pub mod classify;
pub mod matcher;
pub mod reconcile;
pub mod writer;

pub use access::{find_playlist_id, get_tracks};
pub use matcher::{CleanResult, explicit_to_clean};
pub use reconcile::{Reconciliation, reconcile};
pub use writer::{delete_playlist, overwrite_with_archive, rename_playlist};
