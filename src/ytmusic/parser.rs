//! Extraction of tracks and playlists from innertube responses.
//!
//! Responses are deeply nested renderer trees; everything here navigates
//! them with JSON pointers and tolerates missing branches.

use serde_json::Value;

use crate::{
    types::{Artist, LikeStatus, PlaylistSummary, Track, VideoType},
    utils,
};

const WATCH_ENDPOINT: &str = "/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint";
const VIDEO_TYPE: &str = "/watchEndpointMusicSupportedConfigs/watchEndpointMusicConfig/musicVideoType";
const LIKE_STATUS: &str = "/menu/menuRenderer/topLevelButtons/0/likeButtonRenderer/likeStatus";
const PAGE_TYPE: &str = "/navigationEndpoint/browseEndpoint/browseEndpointContextSupportedConfigs/browseEndpointContextMusicConfig/pageType";
const GREY_OUT: &str = "MUSIC_ITEM_RENDERER_DISPLAY_POLICY_GREY_OUT";
const EXPLICIT_BADGE: &str = "MUSIC_EXPLICIT_BADGE";
const RUN_SEPARATOR: &str = " • ";

const LIBRARY_GRID: &str = "/contents/singleColumnBrowseResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents/0/gridRenderer";
const GRID_CONTINUATION: &str = "/continuationContents/gridContinuation";
const NEXT_CONTINUATION: &str = "/continuations/0/nextContinuationData/continuation";
const PLAYLIST_SHELVES: [&str; 2] = [
    "/contents/twoColumnBrowseResultsRenderer/secondaryContents/sectionListRenderer/contents/0/musicPlaylistShelfRenderer",
    "/contents/singleColumnBrowseResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents/0/musicPlaylistShelfRenderer",
];
const APPENDED_ITEMS: &str = "/onResponseReceivedActions/0/appendContinuationItemsAction/continuationItems";
const CONTINUATION_TOKEN: &str = "/continuationItemRenderer/continuationEndpoint/continuationCommand/token";
const SEARCH_SECTIONS: &str = "/contents/tabbedSearchResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents";

/// One page of parsed items plus the token for the next page, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub continuation: Option<String>,
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn runs(value: &Value) -> &[Value] {
    value
        .get("runs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn flex_column(renderer: &Value, index: usize) -> Option<&Value> {
    renderer
        .pointer(&format!(
            "/flexColumns/{}/musicResponsiveListItemFlexColumnRenderer/text",
            index
        ))
        .filter(|text| !text.is_null())
}

fn fixed_column_text(renderer: &Value) -> Option<&str> {
    let text = renderer.pointer("/fixedColumns/0/musicResponsiveListItemFixedColumnRenderer/text")?;
    text.get("simpleText")
        .and_then(Value::as_str)
        .or_else(|| runs(text).first().and_then(|r| r["text"].as_str()))
}

/// Artists are the runs before the first ` • ` that are not separators.
fn parse_artists(text: &Value) -> Vec<Artist> {
    runs(text)
        .iter()
        .take_while(|run| run["text"].as_str() != Some(RUN_SEPARATOR))
        .filter_map(|run| {
            let name = run["text"].as_str()?;
            let trimmed = name.trim();
            if trimmed.is_empty() || trimmed == "&" || trimmed == "," {
                return None;
            }
            let id = str_at(run, "/navigationEndpoint/browseEndpoint/browseId").map(str::to_string);
            Some(Artist {
                name: name.to_string(),
                id,
            })
        })
        .collect()
}

fn is_artist_run(run: &Value) -> bool {
    matches!(
        str_at(run, PAGE_TYPE),
        Some("MUSIC_PAGE_TYPE_ARTIST") | Some("MUSIC_PAGE_TYPE_USER_CHANNEL")
    )
}

fn menu_set_video_id(renderer: &Value) -> Option<&str> {
    renderer
        .pointer("/menu/menuRenderer/items")?
        .as_array()?
        .iter()
        .find_map(|item| {
            str_at(
                item,
                "/menuServiceItemRenderer/serviceEndpoint/playlistEditEndpoint/actions/0/setVideoId",
            )
        })
}

fn menu_removed_video_id(renderer: &Value) -> Option<&str> {
    renderer
        .pointer("/menu/menuRenderer/items")?
        .as_array()?
        .iter()
        .find_map(|item| {
            str_at(
                item,
                "/menuServiceItemRenderer/serviceEndpoint/playlistEditEndpoint/actions/0/removedVideoId",
            )
        })
}

fn has_explicit_badge(renderer: &Value) -> bool {
    renderer
        .get("badges")
        .and_then(Value::as_array)
        .is_some_and(|badges| {
            badges.iter().any(|badge| {
                str_at(badge, "/musicInlineBadgeRenderer/icon/iconType") == Some(EXPLICIT_BADGE)
            })
        })
}

/// Parses a `musicResponsiveListItemRenderer` item from a playlist shelf or
/// a search shelf. Returns `None` for items that carry no video id or title.
pub fn parse_track(item: &Value) -> Option<Track> {
    let renderer = item.get("musicResponsiveListItemRenderer")?;
    let watch = renderer.pointer(WATCH_ENDPOINT);

    let id = watch
        .and_then(|w| w["videoId"].as_str())
        .or_else(|| str_at(renderer, "/playlistItemData/videoId"))
        .or_else(|| menu_removed_video_id(renderer))?;

    let title = flex_column(renderer, 0)
        .and_then(|text| runs(text).first())
        .and_then(|run| run["text"].as_str())?;

    let artist_text = flex_column(renderer, 1);
    let artists = match artist_text {
        // search results may prefix the artists with a result type run
        Some(text) if runs(text).iter().any(is_artist_run) => runs(text)
            .iter()
            .filter(|run| is_artist_run(run))
            .filter_map(|run| {
                Some(Artist {
                    name: run["text"].as_str()?.to_string(),
                    id: str_at(run, "/navigationEndpoint/browseEndpoint/browseId")
                        .map(str::to_string),
                })
            })
            .collect(),
        Some(text) => parse_artists(text),
        None => Vec::new(),
    };

    let duration_seconds = fixed_column_text(renderer)
        .and_then(utils::parse_duration)
        .or_else(|| {
            artist_text.and_then(|text| {
                runs(text)
                    .iter()
                    .rev()
                    .filter_map(|run| run["text"].as_str())
                    .filter(|text| text.contains(':'))
                    .find_map(utils::parse_duration)
            })
        })
        .unwrap_or(0);

    let set_video_id = str_at(renderer, "/playlistItemData/playlistSetVideoId")
        .or_else(|| menu_set_video_id(renderer))
        .map(str::to_string);

    Some(Track {
        id: id.to_string(),
        set_video_id,
        title: title.to_string(),
        artists,
        duration_seconds,
        is_explicit: has_explicit_badge(renderer),
        is_available: renderer["musicItemRendererDisplayPolicy"].as_str() != Some(GREY_OUT),
        like_status: str_at(renderer, LIKE_STATUS)
            .map(LikeStatus::from_tag)
            .unwrap_or_default(),
        video_type: watch
            .and_then(|w| w.pointer(VIDEO_TYPE))
            .and_then(Value::as_str)
            .map(VideoType::from_tag)
            .unwrap_or_default(),
    })
}

fn parse_playlist_items(items: &[Value]) -> Page<Track> {
    let continuation = items
        .iter()
        .find_map(|item| str_at(item, CONTINUATION_TOKEN))
        .map(str::to_string);

    Page {
        items: items.iter().filter_map(parse_track).collect(),
        continuation,
    }
}

/// Parses the first page of a playlist browse response.
pub fn parse_playlist_page(response: &Value) -> Option<Page<Track>> {
    let shelf = PLAYLIST_SHELVES
        .iter()
        .find_map(|pointer| response.pointer(pointer))?;
    let items = shelf.get("contents").and_then(Value::as_array);

    Some(parse_playlist_items(items.map(Vec::as_slice).unwrap_or_default()))
}

/// Parses a playlist continuation response.
pub fn parse_playlist_continuation(response: &Value) -> Page<Track> {
    let items = response.pointer(APPENDED_ITEMS).and_then(Value::as_array);
    parse_playlist_items(items.map(Vec::as_slice).unwrap_or_default())
}

fn parse_playlist_summary(item: &Value) -> Option<PlaylistSummary> {
    let renderer = item.get("musicTwoRowItemRenderer")?;
    let browse_id = str_at(renderer, "/navigationEndpoint/browseEndpoint/browseId")?;
    let title = runs(&renderer["title"]).first()?["text"].as_str()?;

    let count = runs(&renderer["subtitle"]).iter().find_map(|run| {
        let text = run["text"].as_str()?;
        let digits: String = text
            .split_whitespace()
            .next()?
            .chars()
            .filter(|c| *c != ',' && *c != '.')
            .collect();
        if text.contains("song") || text.contains("track") || text.contains("episode") {
            digits.parse::<u32>().ok()
        } else {
            None
        }
    });

    Some(PlaylistSummary {
        id: browse_id.strip_prefix("VL").unwrap_or(browse_id).to_string(),
        title: title.to_string(),
        count,
    })
}

fn parse_grid(grid: &Value) -> Page<PlaylistSummary> {
    let items: Vec<PlaylistSummary> = grid
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_playlist_summary).collect())
        .unwrap_or_default();

    Page {
        items,
        continuation: str_at(grid, NEXT_CONTINUATION).map(str::to_string),
    }
}

/// Parses the first page of the library playlists grid.
pub fn parse_library_page(response: &Value) -> Option<Page<PlaylistSummary>> {
    response.pointer(LIBRARY_GRID).map(parse_grid)
}

pub fn parse_library_continuation(response: &Value) -> Page<PlaylistSummary> {
    response
        .pointer(GRID_CONTINUATION)
        .map(parse_grid)
        .unwrap_or(Page {
            items: Vec::new(),
            continuation: None,
        })
}

/// Collects the tracks of every shelf in a search response, in rank order.
pub fn parse_search_results(response: &Value) -> Vec<Track> {
    response
        .pointer(SEARCH_SECTIONS)
        .and_then(Value::as_array)
        .map(|sections| {
            sections
                .iter()
                .filter_map(|section| section.pointer("/musicShelfRenderer/contents"))
                .filter_map(Value::as_array)
                .flatten()
                .filter_map(parse_track)
                .collect()
        })
        .unwrap_or_default()
}

/// Reads the `status` field of an edit response.
pub fn parse_status(response: &Value) -> Option<&str> {
    response["status"].as_str()
}
