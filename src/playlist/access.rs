use crate::{errors::ApiError, types::Track, ytmusic::MusicApi};

/// Id of the first library playlist titled exactly `title`.
pub async fn find_playlist_id<A: MusicApi>(
    api: &A,
    title: &str,
) -> Result<Option<String>, ApiError> {
    let playlists = api.library_playlists().await?;
    Ok(playlists
        .into_iter()
        .find(|p| p.title == title)
        .map(|p| p.id))
}

/// All tracks of the playlist titled `title`.
pub async fn get_tracks<A: MusicApi>(api: &A, title: &str) -> Result<Vec<Track>, ApiError> {
    let playlist_id = find_playlist_id(api, title)
        .await?
        .ok_or_else(|| ApiError::PlaylistNotFound(title.to_string()))?;
    api.playlist_tracks(&playlist_id, None).await
}
