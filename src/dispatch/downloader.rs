use std::{path::PathBuf, process::Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Res, dispatch::Dispatch, error::Error, types::AlbumMatch};

/// Subprocess handoff to a downloader CLI.
///
/// Runs the configured program with the album link as its sole argument,
/// streaming the subprocess's stdout/stderr to the invoking terminal, and
/// waits synchronously for it to finish. A non-zero exit is a fatal
/// download failure.
pub struct CliDispatch {
    program: PathBuf,
}

impl CliDispatch {
    pub fn new(program: PathBuf) -> Self {
        CliDispatch { program }
    }
}

#[async_trait]
impl Dispatch for CliDispatch {
    fn target(&self) -> String {
        self.program.display().to_string()
    }

    async fn deliver(&self, album: &AlbumMatch) -> Res<()> {
        let status = Command::new(&self.program)
            .arg(&album.url)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if !status.success() {
            return Err(Error::DownloadFailed { status });
        }

        Ok(())
    }
}
