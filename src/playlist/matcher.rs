use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    types::{SearchFilter, Track},
    utils::normalize_title,
    warning,
    ytmusic::MusicApi,
};

/// Number of search results considered per explicit track.
pub const SEARCH_LIMIT: usize = 10;

/// A candidate may be at most this many seconds longer than the source.
pub const DURATION_TOLERANCE_SECS: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Tracks that were clean already, followed by the chosen replacements.
    /// Each video id appears once.
    pub tracks: Vec<Track>,
    /// Explicit tracks without a clean equivalent.
    pub uncleanable: Vec<Track>,
}

/// Search query for a track: its title, then the primary artist if any.
pub fn build_query(track: &Track) -> String {
    match track.primary_artist() {
        Some(artist) if !artist.name.is_empty() => format!("{} {}", track.title, artist.name),
        _ => track.title.clone(),
    }
}

/// `None` when the track has no artist, `Some(None)` when its primary artist
/// has no browse id.
fn primary_artist_id(track: &Track) -> Option<Option<&str>> {
    track.primary_artist().map(|a| a.id.as_deref())
}

/// Whether `candidate` can stand in for the explicit `source`.
pub fn is_clean_match(source: &Track, candidate: &Track) -> bool {
    !candidate.is_explicit
        && normalize_title(&candidate.title) == normalize_title(&source.title)
        && primary_artist_id(candidate) == primary_artist_id(source)
        && u64::from(source.duration_seconds) + u64::from(DURATION_TOLERANCE_SECS)
            >= u64::from(candidate.duration_seconds)
}

/// First search-ranked candidate that matches `source`.
pub fn pick_replacement<'a>(source: &Track, candidates: &'a [Track]) -> Option<&'a Track> {
    candidates.iter().find(|c| is_clean_match(source, c))
}

/// Replaces every explicit track with a clean equivalent found by search.
///
/// Clean tracks pass through untouched. A failed search only marks that
/// track as uncleanable; the remaining tracks are still processed. A
/// replacement already in the list is not added again.
pub async fn explicit_to_clean<A: MusicApi>(api: &A, tracks: &[Track]) -> CleanResult {
    let (explicit, clean): (Vec<&Track>, Vec<&Track>) =
        tracks.iter().partition(|t| t.is_explicit);

    let mut seen: HashSet<String> = HashSet::new();
    let mut result = CleanResult {
        tracks: clean
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .cloned()
            .collect(),
        uncleanable: Vec::new(),
    };

    let pb = ProgressBar::new(explicit.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    for track in explicit {
        pb.set_message(format!("Searching clean version of {}", track.title));
        let query = build_query(track);

        let candidates = match api.search(&query, SearchFilter::Songs, None, SEARCH_LIMIT).await {
            Ok(candidates) => candidates,
            Err(e) => {
                pb.suspend(|| warning!("Search for '{}' failed: {}", query, e));
                Vec::new()
            }
        };

        match pick_replacement(track, &candidates) {
            Some(replacement) => {
                log::debug!("'{}' replaced by {}", track.title, replacement.id);
                if seen.insert(replacement.id.clone()) {
                    result.tracks.push(replacement.clone());
                }
            }
            None => result.uncleanable.push(track.clone()),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    result
}
