use async_trait::async_trait;
use chrono::Utc;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ORIGIN, USER_AGENT},
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::{MusicApi, parser};
use crate::{
    config::Config,
    errors::ApiError,
    management::TokenManager,
    types::{EditStatus, PlaylistSummary, Privacy, SearchFilter, SearchScope, Track, TrackSource},
};

const ORIGIN_URL: &str = "https://music.youtube.com";
const BROWSER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:88.0) Gecko/20100101 Firefox/88.0";
const LIBRARY_PLAYLISTS: &str = "FEmusic_liked_playlists";

/// Innertube client for music.youtube.com.
pub struct YtMusic {
    http: Client,
    config: Config,
    tokens: Mutex<TokenManager>,
}

impl YtMusic {
    pub fn new(config: Config, tokens: TokenManager) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_AGENT));
        headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_URL));
        headers.insert("X-Goog-AuthUser", HeaderValue::from_static("0"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(YtMusic {
            http: builder.build()?,
            config,
            tokens: Mutex::new(tokens),
        })
    }

    fn context() -> Value {
        json!({
            "client": {
                "clientName": "WEB_REMIX",
                "clientVersion": format!("1.{}.01.00", Utc::now().format("%Y%m%d")),
                "hl": "en",
            },
            "user": {},
        })
    }

    /// Posts `body` (plus the client context) to an innertube endpoint.
    async fn send(
        &self,
        endpoint: &str,
        mut body: Value,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let token = self.tokens.lock().await.get_valid_token(&self.config).await?;
        body["context"] = Self::context();

        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), endpoint);
        log::debug!("POST {} {:?}", url, query);

        let response = self
            .http
            .post(&url)
            .query(&[("alt", "json")])
            .query(query)
            .bearer_auth(token)
            .header("X-Goog-Request-Time", Utc::now().timestamp().to_string())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("{} answered {}: {}", endpoint, status, body);
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json::<Value>().await?)
    }

    async fn browse(&self, browse_id: &str) -> Result<Value, ApiError> {
        self.send("browse", json!({ "browseId": browse_id }), &[]).await
    }

    async fn edit_playlist(
        &self,
        playlist_id: &str,
        actions: Vec<Value>,
    ) -> Result<EditStatus, ApiError> {
        let body = json!({
            "playlistId": strip_vl(playlist_id),
            "actions": actions,
        });
        let response = self.send("browse/edit_playlist", body, &[]).await?;

        Ok(parser::parse_status(&response)
            .map(EditStatus::from_tag)
            .unwrap_or_else(|| EditStatus::Failed("missing status".to_string())))
    }
}

fn strip_vl(playlist_id: &str) -> &str {
    playlist_id.strip_prefix("VL").unwrap_or(playlist_id)
}

/// Search `params` for a filter and scope, as the web client encodes them.
pub fn search_params(filter: SearchFilter, scope: Option<SearchScope>) -> String {
    let filter_param = match filter {
        SearchFilter::Songs => "II",
        SearchFilter::Videos => "IQ",
    };

    match scope {
        None => format!("EgWKAQ{}AWoMEA4QChADEAQQCRAF", filter_param),
        Some(SearchScope::Library) => format!("EgWKAQ{}AWoKEAUQCRADEAoYBA%3D%3D", filter_param),
        Some(SearchScope::Uploads) => "agIYAw%3D%3D".to_string(),
    }
}

#[async_trait]
impl MusicApi for YtMusic {
    async fn library_playlists(&self) -> Result<Vec<PlaylistSummary>, ApiError> {
        let response = self.browse(LIBRARY_PLAYLISTS).await?;
        let mut page = parser::parse_library_page(&response)
            .ok_or_else(|| ApiError::Parse("library playlists grid not found".into()))?;
        let mut playlists = std::mem::take(&mut page.items);

        while let Some(token) = page.continuation.take() {
            let query = [
                ("ctoken", token.as_str()),
                ("continuation", token.as_str()),
                ("type", "next"),
            ];
            let response = self
                .send("browse", json!({ "browseId": LIBRARY_PLAYLISTS }), &query)
                .await?;
            page = parser::parse_library_continuation(&response);
            playlists.append(&mut page.items);
        }

        Ok(playlists)
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Track>, ApiError> {
        let browse_id = format!("VL{}", strip_vl(playlist_id));
        let response = self.browse(&browse_id).await?;
        let mut page = parser::parse_playlist_page(&response)
            .ok_or_else(|| ApiError::Parse(format!("no track shelf in playlist {}", playlist_id)))?;
        let mut tracks = std::mem::take(&mut page.items);
        let wanted = limit.unwrap_or(usize::MAX);

        while tracks.len() < wanted {
            let Some(token) = page.continuation.take() else {
                break;
            };
            let response = self
                .send("browse", json!({ "continuation": token }), &[])
                .await?;
            page = parser::parse_playlist_continuation(&response);
            if page.items.is_empty() && page.continuation.is_none() {
                break;
            }
            tracks.append(&mut page.items);
        }

        tracks.truncate(wanted);
        Ok(tracks)
    }

    async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy: Privacy,
        video_ids: &[String],
    ) -> Result<String, ApiError> {
        let body = json!({
            "title": title,
            "description": description,
            "privacyStatus": privacy.as_str(),
            "videoIds": video_ids,
        });
        let response = self.send("playlist/create", body, &[]).await?;

        response["playlistId"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ApiError::Parse("create response without playlistId".into()))
    }

    async fn delete_playlist(&self, playlist_id: &str) -> Result<(), ApiError> {
        self.send(
            "playlist/delete",
            json!({ "playlistId": strip_vl(playlist_id) }),
            &[],
        )
        .await?;
        Ok(())
    }

    async fn rename_playlist(
        &self,
        playlist_id: &str,
        title: &str,
    ) -> Result<EditStatus, ApiError> {
        let actions = vec![json!({
            "action": "ACTION_SET_PLAYLIST_NAME",
            "playlistName": title,
        })];
        self.edit_playlist(playlist_id, actions).await
    }

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        source: TrackSource<'_>,
    ) -> Result<EditStatus, ApiError> {
        let actions = match source {
            TrackSource::Videos(ids) => ids
                .iter()
                .map(|id| {
                    json!({
                        "action": "ACTION_ADD_VIDEO",
                        "addedVideoId": id,
                        "dedupeOption": "DEDUPE_OPTION_SKIP",
                    })
                })
                .collect(),
            TrackSource::Playlist(source_id) => vec![json!({
                "action": "ACTION_ADD_PLAYLIST",
                "addedFullListId": strip_vl(source_id),
            })],
        };
        self.edit_playlist(playlist_id, actions).await
    }

    async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        tracks: &[Track],
    ) -> Result<EditStatus, ApiError> {
        let actions: Vec<Value> = tracks
            .iter()
            .filter_map(|track| {
                let set_video_id = track.set_video_id.as_deref()?;
                Some(json!({
                    "action": "ACTION_REMOVE_VIDEO",
                    "setVideoId": set_video_id,
                    "removedVideoId": track.id,
                }))
            })
            .collect();

        if actions.len() < tracks.len() {
            log::debug!(
                "{} of {} tracks have no playlist entry id and stay in {}",
                tracks.len() - actions.len(),
                tracks.len(),
                playlist_id
            );
        }
        if actions.is_empty() {
            return Ok(EditStatus::Failed("no removable entries".to_string()));
        }

        self.edit_playlist(playlist_id, actions).await
    }

    async fn search(
        &self,
        query: &str,
        filter: SearchFilter,
        scope: Option<SearchScope>,
        limit: usize,
    ) -> Result<Vec<Track>, ApiError> {
        let body = json!({
            "query": query,
            "params": search_params(filter, scope),
        });
        let response = self.send("search", body, &[]).await?;

        let mut tracks = parser::parse_search_results(&response);
        tracks.truncate(limit);
        Ok(tracks)
    }
}
