use crate::{
    Res, info,
    playlist::{self, classify},
    report::TrackField,
    ytmusic::MusicApi,
};

use super::print_section;

/// Prints every problem report for one playlist.
pub async fn problems<A: MusicApi>(api: &A, playlist_title: &str, max_minutes: u32) -> Res<()> {
    let tracks = playlist::get_tracks(api, playlist_title).await?;
    info!("Checking {} tracks of {}", tracks.len(), playlist_title);

    print_section(
        "Duplicates",
        classify::duplicates(&tracks),
        &[TrackField::Title, TrackField::Artists, TrackField::Duration],
    );
    print_section(
        &format!("Songs longer than {} minutes", max_minutes),
        classify::longer_than(&tracks, max_minutes),
        &[TrackField::Title, TrackField::Artists, TrackField::Duration],
    );
    print_section(
        "Unliked songs",
        classify::unliked(&tracks),
        &[TrackField::Title, TrackField::Artists, TrackField::LikeStatus],
    );
    print_section(
        "Unavailable songs",
        classify::unavailable(&tracks),
        &[TrackField::Title, TrackField::Artists, TrackField::Id],
    );
    print_section(
        "Low quality songs",
        classify::low_quality(&tracks),
        &[TrackField::Title, TrackField::Artists, TrackField::VideoType],
    );

    Ok(())
}
