use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub id: Option<String>,
}

/// Rating the signed-in user gave a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LikeStatus {
    Like,
    Dislike,
    #[default]
    Indifferent,
}

impl LikeStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "LIKE" => LikeStatus::Like,
            "DISLIKE" => LikeStatus::Dislike,
            _ => LikeStatus::Indifferent,
        }
    }
}

impl fmt::Display for LikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LikeStatus::Like => "LIKE",
            LikeStatus::Dislike => "DISLIKE",
            LikeStatus::Indifferent => "INDIFFERENT",
        };
        write!(f, "{}", s)
    }
}

/// Quality tag of the media behind a track.
///
/// `Atv` is the official catalog audio track and counts as the canonical
/// quality; everything else (official or user uploaded videos, podcasts)
/// shows up in the low quality report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoType {
    Atv,
    Omv,
    Ugc,
    Episode,
    #[default]
    Unknown,
    Other(String),
}

impl VideoType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "MUSIC_VIDEO_TYPE_ATV" => VideoType::Atv,
            "MUSIC_VIDEO_TYPE_OMV" => VideoType::Omv,
            "MUSIC_VIDEO_TYPE_UGC" => VideoType::Ugc,
            "MUSIC_VIDEO_TYPE_PODCAST_EPISODE" => VideoType::Episode,
            "" => VideoType::Unknown,
            other => VideoType::Other(other.to_string()),
        }
    }

    pub fn is_canonical(&self) -> bool {
        *self == VideoType::Atv
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoType::Atv => write!(f, "MUSIC_VIDEO_TYPE_ATV"),
            VideoType::Omv => write!(f, "MUSIC_VIDEO_TYPE_OMV"),
            VideoType::Ugc => write!(f, "MUSIC_VIDEO_TYPE_UGC"),
            VideoType::Episode => write!(f, "MUSIC_VIDEO_TYPE_PODCAST_EPISODE"),
            VideoType::Unknown => write!(f, "UNKNOWN"),
            VideoType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A single playable item as returned by a playlist or search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Video id, stable across playlists.
    pub id: String,
    /// Id of this entry inside its playlist; required to remove it again.
    pub set_video_id: Option<String>,
    pub title: String,
    pub artists: Vec<Artist>,
    pub duration_seconds: u32,
    pub is_explicit: bool,
    pub is_available: bool,
    pub like_status: LikeStatus,
    pub video_type: VideoType,
}

impl Track {
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privacy {
    Public,
    Private,
    Unlisted,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "PUBLIC",
            Privacy::Private => "PRIVATE",
            Privacy::Unlisted => "UNLISTED",
        }
    }
}

/// Where tracks added to a playlist come from.
#[derive(Debug, Clone, Copy)]
pub enum TrackSource<'a> {
    Videos(&'a [String]),
    Playlist(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFilter {
    Songs,
    Videos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Library,
    Uploads,
}

/// Outcome reported by a mutating playlist call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStatus {
    Succeeded,
    Failed(String),
}

impl EditStatus {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "STATUS_SUCCEEDED" {
            EditStatus::Succeeded
        } else {
            EditStatus::Failed(tag.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        *self == EditStatus::Succeeded
    }
}

impl fmt::Display for EditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditStatus::Succeeded => write!(f, "STATUS_SUCCEEDED"),
            EditStatus::Failed(tag) => write!(f, "{}", tag),
        }
    }
}
