use crate::{
    Res,
    cli::spinner,
    config::Config,
    info, player, spotify, success,
    types::{NowPlaying, Outcome},
};

/// Resolves an album link and prints it without dispatching.
///
/// With `--track`/`--artist` the player query is bypassed entirely; without
/// them the current track is used, and a stopped player is the quiescent
/// [`Outcome::Idle`] just as for `grab`.
pub async fn resolve(
    config: &Config,
    track: Option<String>,
    artist: Option<String>,
) -> Res<Outcome> {
    let (track, artist) = match (track, artist) {
        (Some(track), Some(artist)) => (track, artist),
        _ => match player::now_playing().await? {
            NowPlaying::Nothing => return Ok(Outcome::Idle),
            NowPlaying::Playing { track, artist } => {
                info!("Now playing: {} - {}", track, artist);
                (track, artist)
            }
        },
    };

    let token = spotify::auth::acquire_token(&config.api, &config.credentials).await?;

    let pb = spinner("Searching for the album...");
    let result = spotify::search::resolve_album(&config.api, &token, &track, &artist).await;
    pb.finish_and_clear();
    let album = result?;

    success!("Found: {} by {}", album.name, album.artist);
    println!("{}", album.url);

    Ok(Outcome::Resolved(album))
}
