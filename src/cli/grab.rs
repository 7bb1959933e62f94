use crate::{
    Res,
    cli::spinner,
    config::{Config, DispatchMode},
    dispatch, info, player, spotify,
    types::{NowPlaying, Outcome},
};

/// Runs the full lookup-and-handoff pipeline once.
///
/// Queries the player first so a stopped player short-circuits into the
/// quiescent [`Outcome::Idle`] without any network traffic. Otherwise
/// acquires a token, resolves the album of the current track and delivers
/// the link through the configured handoff strategy.
///
/// # Arguments
///
/// * `config` - Runtime configuration built once at process start
/// * `via` - Optional strategy override from the command line, taking
///   precedence over the mode in the credentials file
///
/// # Errors
///
/// Every pipeline failure propagates unchanged; there is no local recovery.
/// The caller in `main` maps errors to diagnostics and a non-zero exit.
pub async fn grab(config: &Config, via: Option<DispatchMode>) -> Res<Outcome> {
    let (track, artist) = match player::now_playing().await? {
        NowPlaying::Nothing => return Ok(Outcome::Idle),
        NowPlaying::Playing { track, artist } => (track, artist),
    };

    info!("Now playing: {} - {}", track, artist);

    let token = spotify::auth::acquire_token(&config.api, &config.credentials).await?;

    let pb = spinner("Searching for the album...");
    let result = spotify::search::resolve_album(&config.api, &token, &track, &artist).await;
    pb.finish_and_clear();
    let album = result?;

    info!("Found: {} by {}", album.name, album.artist);
    info!("{}", album.url);

    let mut dispatch_config = config.dispatch.clone();
    if let Some(mode) = via {
        dispatch_config.mode = mode;
    }

    let strategy = dispatch::select(&dispatch_config)?;
    info!("Sending album link to {}...", strategy.target());
    strategy.deliver(&album).await?;

    Ok(Outcome::Dispatched(album))
}
