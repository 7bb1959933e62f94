use std::process::Stdio;

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

use crate::{Res, dispatch::Dispatch, error::Error, types::AlbumMatch};

/// Clipboard + GUI-automation handoff.
///
/// Copies the album link to the system clipboard, makes sure the target
/// application is running (launching it with a settling delay if not),
/// brings it to the foreground, and simulates the paste-and-confirm
/// keystroke sequence. The fixed delays accommodate UI responsiveness;
/// nothing verifies that the paste succeeded.
pub struct GuiDispatch {
    app: String,
}

impl GuiDispatch {
    pub fn new(app: String) -> Self {
        GuiDispatch { app }
    }
}

#[async_trait]
impl Dispatch for GuiDispatch {
    fn target(&self) -> String {
        self.app.clone()
    }

    async fn deliver(&self, album: &AlbumMatch) -> Res<()> {
        copy_to_clipboard(&album.url).await?;
        run_osascript(&paste_script(&self.app)).await
    }
}

/// Places text on the clipboard via `pbcopy`.
async fn copy_to_clipboard(text: &str) -> Res<()> {
    let mut child = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| Error::AutomationFailed(format!("cannot run pbcopy: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::AutomationFailed("pbcopy stdin unavailable".to_string()))?;
    stdin
        .write_all(text.as_bytes())
        .await
        .map_err(|e| Error::AutomationFailed(format!("cannot write to pbcopy: {e}")))?;
    drop(stdin);

    let status = child
        .wait()
        .await
        .map_err(|e| Error::AutomationFailed(format!("pbcopy did not finish: {e}")))?;
    if !status.success() {
        return Err(Error::AutomationFailed(format!(
            "pbcopy exited with {status}"
        )));
    }

    Ok(())
}

async fn run_osascript(script: &str) -> Res<()> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .await
        .map_err(|e| Error::AutomationFailed(format!("cannot run osascript: {e}")))?;

    if !output.status.success() {
        return Err(Error::AutomationFailed(format!(
            "osascript exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}

/// Builds the paste-and-confirm automation script for the target app.
///
/// Cmd+V pastes the link into the app's input field; the long delay lets the
/// app fetch the link's metadata before Cmd+H confirms the handoff.
fn paste_script(app: &str) -> String {
    format!(
        r#"
tell application "System Events"
  set isRunning to false
  set appList to (get name of every process)
  if appList contains "{app}" then set isRunning to true
end tell

if isRunning is false then
  tell application "{app}" to activate
  delay 1
end if

tell application "{app}" to activate
delay 0.5

tell application "System Events"
  keystroke "v" using command down
  delay 0.1
  key up command
  delay 3.5
  keystroke "h" using command down
end tell
"#
    )
}
