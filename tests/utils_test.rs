use ytplaylists::utils::*;

mod common;
use common::track;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));
    // SHA-256 digest, base64 url-safe without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_normalize_title_drops_suffixes() {
    assert_eq!(normalize_title("Song (feat. X)"), normalize_title("song"));
    assert_eq!(normalize_title("Song [Remastered 2011]"), "song");
    assert_eq!(normalize_title("  Hello World  (Live)"), "hello world");
    assert_eq!(normalize_title("Intro [Live] (Edit)"), "intro");
}

#[test]
fn test_normalize_title_edge_cases() {
    assert_eq!(normalize_title(""), "");
    assert_eq!(normalize_title("(Untitled)"), "");
    assert_eq!(normalize_title("ÉTÉ"), "été");
}

#[test]
fn test_normalize_title_is_idempotent() {
    for title in ["Song (feat. X)", "A [b] (c)", "  plain  ", "", "MiXeD CaSe"] {
        let once = normalize_title(title);
        assert_eq!(normalize_title(&once), once);
    }
}

#[test]
fn test_parse_duration() {
    assert_eq!(parse_duration("3:45"), Some(225));
    assert_eq!(parse_duration("0:05"), Some(5));
    assert_eq!(parse_duration("1:02:03"), Some(3723));
    assert_eq!(parse_duration("42"), Some(42));
    assert_eq!(parse_duration(""), None);
    assert_eq!(parse_duration("3:4a"), None);
    assert_eq!(parse_duration("Song"), None);
    assert_eq!(parse_duration("3::45"), None);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(225), "3:45");
    assert_eq!(format_duration(5), "0:05");
    assert_eq!(format_duration(3723), "1:02:03");
}

#[test]
fn test_sort_tracks_by_title_ignores_case_and_is_stable() {
    let mut tracks = vec![
        track("1", "beta"),
        track("2", "Alpha"),
        track("3", "BETA"),
        track("4", "alpha"),
    ];
    sort_tracks_by_title(&mut tracks);

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4", "1", "3"]);
}
