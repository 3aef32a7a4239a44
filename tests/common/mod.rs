#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use ytplaylists::{
    errors::ApiError,
    types::{
        Artist, EditStatus, LikeStatus, PlaylistSummary, Privacy, SearchFilter, SearchScope,
        Track, TrackSource, VideoType,
    },
    ytmusic::MusicApi,
};

// Helper function to create a clean, available, liked catalog track
pub fn track(id: &str, title: &str) -> Track {
    Track {
        id: id.to_string(),
        set_video_id: None,
        title: title.to_string(),
        artists: vec![Artist {
            name: "Artist".to_string(),
            id: Some("UC_artist".to_string()),
        }],
        duration_seconds: 200,
        is_explicit: false,
        is_available: true,
        like_status: LikeStatus::Like,
        video_type: VideoType::Atv,
    }
}

pub fn explicit(id: &str, title: &str) -> Track {
    Track {
        is_explicit: true,
        ..track(id, title)
    }
}

pub fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

struct MockPlaylist {
    id: String,
    title: String,
    tracks: Vec<Track>,
}

#[derive(Default)]
struct State {
    playlists: Vec<MockPlaylist>,
    catalog: HashMap<String, Track>,
    searches: HashMap<String, Result<Vec<Track>, String>>,
    calls: Vec<String>,
    next_id: u32,
}

impl State {
    fn entry(&mut self, mut track: Track) -> Track {
        self.next_id += 1;
        track.set_video_id = Some(format!("SET{}", self.next_id));
        track
    }

    fn playlist_mut(&mut self, id: &str) -> Result<&mut MockPlaylist, ApiError> {
        self.playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::Parse(format!("no playlist {}", id)))
    }
}

/// In-memory stand-in for the music service.
#[derive(Default)]
pub struct MockApi {
    state: Mutex<State>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_catalog(&self, track: Track) {
        let mut state = self.state.lock().unwrap();
        state.catalog.insert(track.id.clone(), track);
    }

    pub fn add_playlist(&self, title: &str, tracks: Vec<Track>) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("PL{}", state.next_id);
        for t in &tracks {
            state.catalog.insert(t.id.clone(), t.clone());
        }
        let tracks = tracks.into_iter().map(|t| state.entry(t)).collect();
        state.playlists.push(MockPlaylist {
            id: id.clone(),
            title: title.to_string(),
            tracks,
        });
        id
    }

    pub fn set_search(&self, query: &str, results: Vec<Track>) {
        let mut state = self.state.lock().unwrap();
        state.searches.insert(query.to_string(), Ok(results));
    }

    pub fn fail_search(&self, query: &str) {
        let mut state = self.state.lock().unwrap();
        state
            .searches
            .insert(query.to_string(), Err("search backend down".to_string()));
    }

    /// Track ids of every playlist called `title`, in library order.
    pub fn playlist(&self, title: &str) -> Option<Vec<String>> {
        let state = self.state.lock().unwrap();
        state
            .playlists
            .iter()
            .find(|p| p.title == title)
            .map(|p| p.tracks.iter().map(|t| t.id.clone()).collect())
    }

    /// Makes the entries of `video_id` in `title` look like entries the
    /// service returned without a playlist entry id.
    pub fn drop_entry_id(&self, title: &str, video_id: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(playlist) = state.playlists.iter_mut().find(|p| p.title == title) {
            for entry in playlist.tracks.iter_mut().filter(|t| t.id == video_id) {
                entry.set_video_id = None;
            }
        }
    }

    pub fn titles(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.playlists.iter().map(|p| p.title.clone()).collect()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: String) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl MusicApi for MockApi {
    async fn library_playlists(&self) -> Result<Vec<PlaylistSummary>, ApiError> {
        self.record("library_playlists".into());
        let state = self.state.lock().unwrap();
        Ok(state
            .playlists
            .iter()
            .map(|p| PlaylistSummary {
                id: p.id.clone(),
                title: p.title.clone(),
                count: Some(p.tracks.len() as u32),
            })
            .collect())
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Track>, ApiError> {
        self.record(format!("playlist_tracks {}", playlist_id));
        let mut state = self.state.lock().unwrap();
        let playlist = state.playlist_mut(playlist_id)?;
        let mut tracks = playlist.tracks.clone();
        tracks.truncate(limit.unwrap_or(usize::MAX));
        Ok(tracks)
    }

    async fn create_playlist(
        &self,
        title: &str,
        _description: &str,
        _privacy: Privacy,
        video_ids: &[String],
    ) -> Result<String, ApiError> {
        self.record(format!("create_playlist {}", title));
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("PL{}", state.next_id);
        let mut tracks = Vec::new();
        for video_id in video_ids {
            let t = state
                .catalog
                .get(video_id)
                .cloned()
                .ok_or_else(|| ApiError::Parse(format!("unknown video {}", video_id)))?;
            tracks.push(state.entry(t));
        }
        state.playlists.push(MockPlaylist {
            id: id.clone(),
            title: title.to_string(),
            tracks,
        });
        Ok(id)
    }

    async fn delete_playlist(&self, playlist_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_playlist {}", playlist_id));
        let mut state = self.state.lock().unwrap();
        state.playlists.retain(|p| p.id != playlist_id);
        Ok(())
    }

    async fn rename_playlist(
        &self,
        playlist_id: &str,
        title: &str,
    ) -> Result<EditStatus, ApiError> {
        self.record(format!("rename_playlist {} {}", playlist_id, title));
        let mut state = self.state.lock().unwrap();
        state.playlist_mut(playlist_id)?.title = title.to_string();
        Ok(EditStatus::Succeeded)
    }

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        source: TrackSource<'_>,
    ) -> Result<EditStatus, ApiError> {
        self.record(format!("add_playlist_items {}", playlist_id));
        let mut state = self.state.lock().unwrap();
        let incoming: Vec<Track> = match source {
            TrackSource::Videos(video_ids) => {
                let mut distinct: Vec<&String> = video_ids.iter().collect();
                distinct.sort();
                distinct.dedup();
                if distinct.len() < video_ids.len() {
                    return Ok(EditStatus::Failed("STATUS_FAILED".into()));
                }
                let mut found = Vec::new();
                for video_id in video_ids {
                    match state.catalog.get(video_id) {
                        Some(t) => found.push(t.clone()),
                        None => return Ok(EditStatus::Failed("STATUS_FAILED".into())),
                    }
                }
                found
            }
            TrackSource::Playlist(source_id) => state.playlist_mut(source_id)?.tracks.clone(),
        };
        let entries: Vec<Track> = incoming.into_iter().map(|t| state.entry(t)).collect();
        state.playlist_mut(playlist_id)?.tracks.extend(entries);
        Ok(EditStatus::Succeeded)
    }

    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        tracks: &[Track],
    ) -> Result<EditStatus, ApiError> {
        self.record(format!("remove_playlist_items {}", playlist_id));
        let mut state = self.state.lock().unwrap();
        let playlist = state.playlist_mut(playlist_id)?;
        playlist.tracks.retain(|entry| {
            !tracks
                .iter()
                .any(|t| t.set_video_id.is_some() && t.set_video_id == entry.set_video_id)
        });
        Ok(EditStatus::Succeeded)
    }

    async fn search(
        &self,
        query: &str,
        _filter: SearchFilter,
        _scope: Option<SearchScope>,
        limit: usize,
    ) -> Result<Vec<Track>, ApiError> {
        self.record(format!("search {}", query));
        let mut state = self.state.lock().unwrap();
        let result = state.searches.get(query).cloned().unwrap_or(Ok(Vec::new()));
        let mut results = result.map_err(ApiError::Parse)?;
        results.truncate(limit);
        for t in &results {
            state.catalog.insert(t.id.clone(), t.clone());
        }
        Ok(results)
    }
}
