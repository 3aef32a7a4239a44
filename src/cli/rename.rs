use crate::{Res, playlist, success, ytmusic::MusicApi};

pub async fn rename<A: MusicApi>(api: &A, from_title: &str, to_title: &str) -> Res<()> {
    playlist::rename_playlist(api, from_title, to_title).await?;
    success!("Renamed {} to {}", from_title, to_title);
    Ok(())
}
