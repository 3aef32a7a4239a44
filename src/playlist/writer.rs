//! Mutations of live playlists.
//!
//! None of these operations is transactional. A failure between two calls
//! leaves the playlists in the state the last successful call produced.

use crate::{
    errors::ApiError,
    playlist::access::find_playlist_id,
    types::{EditStatus, Privacy, Track, TrackSource},
    warning,
    ytmusic::MusicApi,
};

pub const ARCHIVE_DESCRIPTION: &str = "Archived by ytplaylists";

/// What an overwrite replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwrite {
    pub live_id: String,
    pub archive_id: String,
    /// Contents of the live playlist before the overwrite.
    pub previous: Vec<Track>,
    /// Steps the service did not complete. Empty when the live playlist now
    /// holds exactly the requested tracks.
    pub failures: Vec<String>,
}

impl Overwrite {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Warns about a non-success status and returns it as a failure line.
fn check(status: EditStatus, what: &str, title: &str) -> Option<String> {
    if status.is_success() {
        return None;
    }
    let failure = format!("{} on '{}' reported {}", what, title, status);
    warning!("{}", failure);
    Some(failure)
}

/// Removes every entry of a playlist.
///
/// Entries without a playlist entry id cannot be removed; they are
/// reported as a failure instead of being left behind silently.
async fn clear<A: MusicApi>(
    api: &A,
    playlist_id: &str,
    title: &str,
    tracks: &[Track],
    failures: &mut Vec<String>,
) -> Result<(), ApiError> {
    let (removable, stuck): (Vec<Track>, Vec<Track>) = tracks
        .iter()
        .cloned()
        .partition(|t| t.set_video_id.is_some());

    if !stuck.is_empty() {
        let failure = format!(
            "{} entries of '{}' have no playlist entry id and were not removed",
            stuck.len(),
            title
        );
        warning!("{}", failure);
        failures.push(failure);
    }
    if removable.is_empty() {
        return Ok(());
    }

    let status = api.remove_playlist_items(playlist_id, &removable).await?;
    failures.extend(check(status, "Clearing", title));
    Ok(())
}

/// Makes `live_title` contain exactly `tracks`, in order, after copying its
/// current contents into `archive_title`.
///
/// The archive playlist is emptied when it exists and created otherwise. A
/// missing live playlist is created with `tracks` and leaves an empty archive.
/// Steps the service rejects are collected in [`Overwrite::failures`].
pub async fn overwrite_with_archive<A: MusicApi>(
    api: &A,
    live_title: &str,
    archive_title: &str,
    tracks: &[Track],
) -> Result<Overwrite, ApiError> {
    let mut failures = Vec::new();

    let archive_id = match find_playlist_id(api, archive_title).await? {
        Some(id) => {
            let archived = api.playlist_tracks(&id, None).await?;
            clear(api, &id, archive_title, &archived, &mut failures).await?;
            id
        }
        None => {
            api.create_playlist(archive_title, ARCHIVE_DESCRIPTION, Privacy::Private, &[])
                .await?
        }
    };

    let video_ids: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();

    let Some(live_id) = find_playlist_id(api, live_title).await? else {
        let live_id = api
            .create_playlist(live_title, "", Privacy::Public, &video_ids)
            .await?;
        return Ok(Overwrite {
            live_id,
            archive_id,
            previous: Vec::new(),
            failures,
        });
    };

    let previous = api.playlist_tracks(&live_id, None).await?;
    if !previous.is_empty() {
        let status = api
            .add_playlist_items(&archive_id, TrackSource::Playlist(&live_id))
            .await?;
        failures.extend(check(status, "Archiving", archive_title));
    }

    clear(api, &live_id, live_title, &previous, &mut failures).await?;

    if !video_ids.is_empty() {
        let status = api
            .add_playlist_items(&live_id, TrackSource::Videos(&video_ids))
            .await?;
        failures.extend(check(status, "Adding tracks", live_title));
    }

    Ok(Overwrite {
        live_id,
        archive_id,
        previous,
        failures,
    })
}

/// Deletes the first playlist titled `title`. Returns whether one existed.
pub async fn delete_playlist<A: MusicApi>(api: &A, title: &str) -> Result<bool, ApiError> {
    match find_playlist_id(api, title).await? {
        Some(id) => {
            api.delete_playlist(&id).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Renames `from_title` to `to_title`, deleting any playlist already
/// called `to_title` first.
pub async fn rename_playlist<A: MusicApi>(
    api: &A,
    from_title: &str,
    to_title: &str,
) -> Result<(), ApiError> {
    let source_id = find_playlist_id(api, from_title)
        .await?
        .ok_or_else(|| ApiError::PlaylistNotFound(from_title.to_string()))?;
    if from_title == to_title {
        return Ok(());
    }

    delete_playlist(api, to_title).await?;

    let status = api.rename_playlist(&source_id, to_title).await?;
    check(status, "Renaming", from_title);
    Ok(())
}
