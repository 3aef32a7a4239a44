use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Track;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Canonical comparison key for a track title.
///
/// Lower-cases the title, keeps only the text before the first `(` or `[`
/// and trims surrounding whitespace, so `"Song (feat. X)"` and `"song"`
/// compare equal.
pub fn normalize_title(title: &str) -> String {
    let lower = title.to_lowercase();
    let head = lower.split('(').next().unwrap_or_default();
    let head = head.split('[').next().unwrap_or_default();
    head.trim().to_string()
}

/// Parses a duration text such as `"3:45"` or `"1:02:03"` into seconds.
pub fn parse_duration(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut seconds: u32 = 0;
    for part in text.split(':') {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let value: u32 = part.parse().ok()?;
        seconds = seconds.checked_mul(60)?.checked_add(value)?;
    }
    Some(seconds)
}

pub fn format_duration(seconds: u32) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Sort key used by `sort` and `clean`: the upper-cased title.
pub fn title_sort_key(track: &Track) -> String {
    track.title.to_uppercase()
}

pub fn sort_tracks_by_title(tracks: &mut [Track]) {
    tracks.sort_by_cached_key(title_sort_key);
}
