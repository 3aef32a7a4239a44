use serde_json::{Value, json};
use ytplaylists::{
    types::{LikeStatus, SearchFilter, SearchScope, VideoType},
    ytmusic::{parser::*, search_params},
};

fn text_run(text: &str) -> Value {
    json!({ "text": text })
}

fn artist_run(name: &str, id: &str) -> Value {
    json!({
        "text": name,
        "navigationEndpoint": { "browseEndpoint": {
            "browseId": id,
            "browseEndpointContextSupportedConfigs": {
                "browseEndpointContextMusicConfig": { "pageType": "MUSIC_PAGE_TYPE_ARTIST" }
            }
        }}
    })
}

fn flex(runs: Vec<Value>) -> Value {
    json!({ "musicResponsiveListItemFlexColumnRenderer": { "text": { "runs": runs } } })
}

// Helper function to create a playlist shelf item
fn playlist_item(video_id: &str, title: &str, artists: Vec<Value>, duration: &str) -> Value {
    json!({ "musicResponsiveListItemRenderer": {
        "overlay": { "musicItemThumbnailOverlayRenderer": { "content": { "musicPlayButtonRenderer": {
            "playNavigationEndpoint": { "watchEndpoint": {
                "videoId": video_id,
                "watchEndpointMusicSupportedConfigs": { "watchEndpointMusicConfig": {
                    "musicVideoType": "MUSIC_VIDEO_TYPE_ATV"
                }}
            }}
        }}}},
        "flexColumns": [flex(vec![text_run(title)]), flex(artists)],
        "fixedColumns": [{ "musicResponsiveListItemFixedColumnRenderer": {
            "text": { "runs": [text_run(duration)] }
        }}],
        "playlistItemData": { "videoId": video_id, "playlistSetVideoId": format!("set-{}", video_id) },
        "menu": { "menuRenderer": { "topLevelButtons": [
            { "likeButtonRenderer": { "likeStatus": "LIKE" } }
        ]}}
    }})
}

#[test]
fn test_parse_playlist_item() {
    let item = playlist_item(
        "vid1",
        "Song (feat. X)",
        vec![
            artist_run("Main", "UC_main"),
            text_run(" & "),
            artist_run("Guest", "UC_guest"),
        ],
        "3:45",
    );

    let track = parse_track(&item).unwrap();
    assert_eq!(track.id, "vid1");
    assert_eq!(track.set_video_id.as_deref(), Some("set-vid1"));
    assert_eq!(track.title, "Song (feat. X)");
    assert_eq!(track.artist_names(), "Main,Guest");
    assert_eq!(track.artists[0].id.as_deref(), Some("UC_main"));
    assert_eq!(track.duration_seconds, 225);
    assert!(!track.is_explicit);
    assert!(track.is_available);
    assert_eq!(track.like_status, LikeStatus::Like);
    assert_eq!(track.video_type, VideoType::Atv);
}

#[test]
fn test_parse_greyed_out_explicit_item() {
    let mut item = playlist_item("vid2", "Gone", vec![text_run("Someone")], "2:00");
    let renderer = &mut item["musicResponsiveListItemRenderer"];
    renderer["musicItemRendererDisplayPolicy"] = json!("MUSIC_ITEM_RENDERER_DISPLAY_POLICY_GREY_OUT");
    renderer["badges"] = json!([{ "musicInlineBadgeRenderer": { "icon": { "iconType": "MUSIC_EXPLICIT_BADGE" } } }]);
    renderer["menu"] = json!({ "menuRenderer": { "topLevelButtons": [
        { "likeButtonRenderer": { "likeStatus": "INDIFFERENT" } }
    ]}});

    let track = parse_track(&item).unwrap();
    assert!(!track.is_available);
    assert!(track.is_explicit);
    assert_eq!(track.like_status, LikeStatus::Indifferent);
    assert_eq!(track.artists.len(), 1);
    assert_eq!(track.artists[0].id, None);
}

#[test]
fn test_parse_track_requires_renderer_and_title() {
    assert!(parse_track(&json!({ "continuationItemRenderer": {} })).is_none());
    assert!(parse_track(&json!({ "musicResponsiveListItemRenderer": {
        "playlistItemData": { "videoId": "x" }
    }}))
    .is_none());
}

#[test]
fn test_parse_playlist_page_with_continuation() {
    let response = json!({ "contents": { "twoColumnBrowseResultsRenderer": {
        "secondaryContents": { "sectionListRenderer": { "contents": [
            { "musicPlaylistShelfRenderer": { "contents": [
                playlist_item("a", "A", vec![text_run("X")], "1:00"),
                playlist_item("b", "B", vec![text_run("Y")], "2:00"),
                { "continuationItemRenderer": { "continuationEndpoint": {
                    "continuationCommand": { "token": "next-page" }
                }}}
            ]}}
        ]}}
    }}});

    let page = parse_playlist_page(&response).unwrap();
    let ids: Vec<&str> = page.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(page.continuation.as_deref(), Some("next-page"));

    let continuation = json!({ "onResponseReceivedActions": [
        { "appendContinuationItemsAction": { "continuationItems": [
            playlist_item("c", "C", vec![text_run("Z")], "3:00")
        ]}}
    ]});
    let page = parse_playlist_continuation(&continuation);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.continuation, None);

    assert!(parse_playlist_page(&json!({})).is_none());
}

#[test]
fn test_parse_library_page() {
    let tile = |title: &str, id: &str, count: &str| {
        json!({ "musicTwoRowItemRenderer": {
            "title": { "runs": [text_run(title)] },
            "subtitle": { "runs": [text_run("Playlist"), text_run(" • "), text_run(count)] },
            "navigationEndpoint": { "browseEndpoint": { "browseId": id } }
        }})
    };
    let response = json!({ "contents": { "singleColumnBrowseResultsRenderer": { "tabs": [
        { "tabRenderer": { "content": { "sectionListRenderer": { "contents": [
            { "gridRenderer": {
                "items": [
                    { "musicTwoRowItemRenderer": { "title": { "runs": [text_run("New playlist")] } } },
                    tile("Road Trip", "VLPL123", "1,204 songs"),
                    tile("Liked", "VLLM", "12 tracks")
                ],
                "continuations": [{ "nextContinuationData": { "continuation": "grid-next" } }]
            }}
        ]}}}}
    ]}}});

    let page = parse_library_page(&response).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "PL123");
    assert_eq!(page.items[0].title, "Road Trip");
    assert_eq!(page.items[0].count, Some(1204));
    assert_eq!(page.items[1].id, "LM");
    assert_eq!(page.continuation.as_deref(), Some("grid-next"));

    let empty = parse_library_continuation(&json!({}));
    assert!(empty.items.is_empty());
    assert!(empty.continuation.is_none());
}

#[test]
fn test_parse_search_results() {
    let mut song = playlist_item(
        "s1",
        "Song",
        vec![
            artist_run("Main", "UC_main"),
            text_run(" • "),
            text_run("Album"),
            text_run(" • "),
            text_run("4:01"),
        ],
        "",
    );
    song["musicResponsiveListItemRenderer"]
        .as_object_mut()
        .unwrap()
        .remove("fixedColumns");

    let response = json!({ "contents": { "tabbedSearchResultsRenderer": { "tabs": [
        { "tabRenderer": { "content": { "sectionListRenderer": { "contents": [
            { "itemSectionRenderer": {} },
            { "musicShelfRenderer": { "contents": [song] } }
        ]}}}}
    ]}}});

    let tracks = parse_search_results(&response);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].artist_names(), "Main");
    assert_eq!(tracks[0].duration_seconds, 241);
    assert!(parse_search_results(&json!({})).is_empty());
}

#[test]
fn test_parse_status() {
    assert_eq!(parse_status(&json!({ "status": "STATUS_SUCCEEDED" })), Some("STATUS_SUCCEEDED"));
    assert_eq!(parse_status(&json!({})), None);
}

#[test]
fn test_search_params() {
    assert_eq!(
        search_params(SearchFilter::Songs, None),
        "EgWKAQIIAWoMEA4QChADEAQQCRAF"
    );
    assert_eq!(
        search_params(SearchFilter::Videos, Some(SearchScope::Library)),
        "EgWKAQIQAWoKEAUQCRADEAoYBA%3D%3D"
    );
    assert_eq!(
        search_params(SearchFilter::Songs, Some(SearchScope::Uploads)),
        "agIYAw%3D%3D"
    );
}
