use crate::{Res, playlist, report::TrackField, ytmusic::MusicApi};

use super::print_section;

/// Lists the tracks that only one of two playlists contains.
pub async fn compare<A: MusicApi>(api: &A, first_title: &str, second_title: &str) -> Res<()> {
    let first = playlist::get_tracks(api, first_title).await?;
    let second = playlist::get_tracks(api, second_title).await?;

    let diff = playlist::reconcile(&first, &second);
    let fields = [TrackField::Title, TrackField::Artists, TrackField::Duration];
    print_section(&format!("Only in {}", first_title), &diff.removed, &fields);
    print_section(&format!("Only in {}", second_title), &diff.added, &fields);

    Ok(())
}
