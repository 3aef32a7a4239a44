//! Markdown tables for track reports.

use tabled::{builder::Builder, settings::Style};

use crate::{types::Track, utils::format_duration};

/// A column that can be rendered for a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Title,
    Artists,
    Duration,
    LikeStatus,
    VideoType,
    Id,
}

impl TrackField {
    pub fn name(&self) -> &'static str {
        match self {
            TrackField::Title => "title",
            TrackField::Artists => "artists",
            TrackField::Duration => "duration",
            TrackField::LikeStatus => "likeStatus",
            TrackField::VideoType => "videoType",
            TrackField::Id => "videoId",
        }
    }

    pub fn format(&self, track: &Track) -> String {
        match self {
            TrackField::Title => track.title.clone(),
            TrackField::Artists => track.artist_names(),
            TrackField::Duration => format_duration(track.duration_seconds),
            TrackField::LikeStatus => track.like_status.to_string(),
            TrackField::VideoType => track.video_type.to_string(),
            TrackField::Id => track.id.clone(),
        }
    }
}

/// Escapes the markdown cell delimiter.
pub fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Renders `tracks` as a markdown table with one column per field.
pub fn render_tracks<'a, I>(tracks: I, fields: &[TrackField]) -> String
where
    I: IntoIterator<Item = &'a Track>,
{
    let mut builder = Builder::default();
    builder.push_record(fields.iter().map(|f| f.name().to_string()));
    for track in tracks {
        builder.push_record(fields.iter().map(|f| escape_cell(&f.format(track))));
    }

    let mut table = builder.build();
    table.with(Style::markdown());
    table.to_string()
}
