//! Now-playing query against the Spotify desktop app.
//!
//! The media player is an external collaborator: a single synchronous
//! AppleScript query returns either `track|||artist` or a sentinel meaning
//! nothing is playing. The sentinel is a quiescent outcome, not an error,
//! and short-circuits the pipeline before any network traffic happens.

use tokio::process::Command;

use crate::{Res, error::Error, types::NowPlaying};

/// Literal reply of the player when playback is stopped or paused.
pub const NOTHING_PLAYING: &str = "No song playing";

/// Separator between track and artist in the player reply. Chosen by the
/// script below because it cannot appear in real track metadata.
const DELIMITER: &str = "|||";

const NOW_PLAYING_SCRIPT: &str = r#"
tell application "Spotify"
  if player state is playing then
    set trackName to name of current track
    set artistName to artist of current track
    return trackName & "|||" & artistName
  else
    return "No song playing"
  end if
end tell
"#;

/// Asks the player for the current track.
///
/// Runs `osascript` as a subprocess and parses its reply. Failure to launch
/// the interpreter or a non-zero exit both surface as
/// [`Error::PlayerQuery`]; a stopped player surfaces as
/// [`NowPlaying::Nothing`].
pub async fn now_playing() -> Res<NowPlaying> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(NOW_PLAYING_SCRIPT)
        .output()
        .await
        .map_err(|e| Error::PlayerQuery(format!("cannot run osascript: {e}")))?;

    if !output.status.success() {
        return Err(Error::PlayerQuery(format!(
            "osascript exited with {}",
            output.status
        )));
    }

    let reply = String::from_utf8_lossy(&output.stdout);
    parse_reply(reply.trim())
}

/// Parses a raw player reply into a [`NowPlaying`] value.
///
/// The sentinel maps to [`NowPlaying::Nothing`]; a delimited pair maps to
/// [`NowPlaying::Playing`]. Anything else means the player answered in a
/// shape this tool does not understand.
pub fn parse_reply(reply: &str) -> Res<NowPlaying> {
    if reply == NOTHING_PLAYING {
        return Ok(NowPlaying::Nothing);
    }

    match reply.split_once(DELIMITER) {
        Some((track, artist)) => Ok(NowPlaying::Playing {
            track: track.to_string(),
            artist: artist.to_string(),
        }),
        None => Err(Error::PlayerQuery(format!(
            "unexpected player reply: {reply}"
        ))),
    }
}
