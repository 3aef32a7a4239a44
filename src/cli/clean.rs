use crate::{
    Res, info, playlist, report::TrackField, success, utils, ytmusic::MusicApi,
};

use super::print_section;

/// Fills `clean_title` with the explicit playlist's tracks, swapping every
/// explicit track for a clean version where one can be found.
pub async fn clean<A: MusicApi>(
    api: &A,
    explicit_title: &str,
    clean_title: &str,
    archive_title: &str,
) -> Res<()> {
    let source = playlist::get_tracks(api, explicit_title).await?;
    let explicit_count = source.iter().filter(|t| t.is_explicit).count();
    info!(
        "Looking for clean versions of {} explicit tracks in {}",
        explicit_count, explicit_title
    );

    let mut result = playlist::explicit_to_clean(api, &source).await;
    utils::sort_tracks_by_title(&mut result.tracks);

    let overwrite =
        playlist::overwrite_with_archive(api, clean_title, archive_title, &result.tracks).await?;
    if !overwrite.is_complete() {
        return Err(super::incomplete(clean_title, archive_title, &overwrite).into());
    }
    success!(
        "{} now holds {} tracks, previous contents kept in {}",
        clean_title,
        result.tracks.len(),
        archive_title
    );

    let diff = playlist::reconcile(&overwrite.previous, &result.tracks);
    let fields = [TrackField::Title, TrackField::Artists];
    print_section("Added", &diff.added, &fields);
    print_section("Removed", &diff.removed, &fields);
    print_section("Uncleanable", &result.uncleanable, &fields);

    Ok(())
}
