//! Read-only reports over a track list. Every function keeps the input order.

use std::collections::HashMap;

use crate::{
    types::{LikeStatus, Track},
    utils::normalize_title,
};

/// Tracks sharing their normalized title with at least one other track.
pub fn duplicates(tracks: &[Track]) -> Vec<&Track> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for track in tracks {
        *counts.entry(normalize_title(&track.title)).or_default() += 1;
    }

    tracks
        .iter()
        .filter(|t| counts.get(&normalize_title(&t.title)).copied().unwrap_or(0) > 1)
        .collect()
}

/// Tracks strictly longer than `max_minutes`.
pub fn longer_than(tracks: &[Track], max_minutes: u32) -> Vec<&Track> {
    let max_seconds = u64::from(max_minutes) * 60;
    tracks
        .iter()
        .filter(|t| u64::from(t.duration_seconds) > max_seconds)
        .collect()
}

pub fn unliked(tracks: &[Track]) -> Vec<&Track> {
    tracks
        .iter()
        .filter(|t| t.is_available && t.like_status != LikeStatus::Like)
        .collect()
}

pub fn unavailable(tracks: &[Track]) -> Vec<&Track> {
    tracks.iter().filter(|t| !t.is_available).collect()
}

/// Available tracks that are not the official catalog audio.
pub fn low_quality(tracks: &[Track]) -> Vec<&Track> {
    tracks
        .iter()
        .filter(|t| t.is_available && !t.video_type.is_canonical())
        .collect()
}
