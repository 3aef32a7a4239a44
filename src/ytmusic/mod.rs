//! # YouTube Music Integration Module
//!
//! Everything that talks to the service lives here: the [`MusicApi`]
//! contract the playlist logic is written against, the [`YtMusic`]
//! implementation on top of the innertube web API, the response
//! [`parser`] and the OAuth helpers in [`auth`].

pub mod auth;
mod client;
pub mod parser;

use async_trait::async_trait;

pub use client::{YtMusic, search_params};

use crate::{
    errors::ApiError,
    types::{EditStatus, PlaylistSummary, Privacy, SearchFilter, SearchScope, Track, TrackSource},
};

/// Requests the playlist logic needs from the music service.
///
/// Mutating calls return the [`EditStatus`] reported by the service; a
/// transport or parse failure is an `Err`.
#[async_trait]
pub trait MusicApi: Send + Sync {
    /// Playlists in the user's library, in library order.
    async fn library_playlists(&self) -> Result<Vec<PlaylistSummary>, ApiError>;

    /// Tracks of a playlist in playlist order, at most `limit` if given.
    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Track>, ApiError>;

    /// Creates a playlist and returns its id.
    async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy: Privacy,
        video_ids: &[String],
    ) -> Result<String, ApiError>;

    async fn delete_playlist(&self, playlist_id: &str) -> Result<(), ApiError>;

    async fn rename_playlist(&self, playlist_id: &str, title: &str)
    -> Result<EditStatus, ApiError>;

    /// Appends tracks in the given order.
    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        source: TrackSource<'_>,
    ) -> Result<EditStatus, ApiError>;

    /// Removes the given playlist entries. Tracks need their `set_video_id`.
    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        tracks: &[Track],
    ) -> Result<EditStatus, ApiError>;

    /// Full-text catalog search, results in rank order.
    async fn search(
        &self,
        query: &str,
        filter: SearchFilter,
        scope: Option<SearchScope>,
        limit: usize,
    ) -> Result<Vec<Track>, ApiError>;
}
