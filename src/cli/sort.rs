use crate::{Res, info, playlist, success, utils, ytmusic::MusicApi};

/// Sorts a playlist by upper-cased title, keeping the old order in `archive_title`.
pub async fn sort<A: MusicApi>(api: &A, target_title: &str, archive_title: &str) -> Res<()> {
    let mut tracks = playlist::get_tracks(api, target_title).await?;
    utils::sort_tracks_by_title(&mut tracks);

    info!("Writing {} sorted tracks to {}", tracks.len(), target_title);
    let overwrite =
        playlist::overwrite_with_archive(api, target_title, archive_title, &tracks).await?;
    if !overwrite.is_complete() {
        return Err(super::incomplete(target_title, archive_title, &overwrite).into());
    }
    success!("{} sorted, previous order kept in {}", target_title, archive_title);

    Ok(())
}
