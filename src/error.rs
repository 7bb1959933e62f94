use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Error taxonomy shared by every component.
///
/// All errors are terminal for the current invocation; there is no retry or
/// partial-success path anywhere in the pipeline. Components return these
/// variants upward and the handler in `main.rs` turns them into a diagnostic
/// and a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    /// The credentials file could not be read or parsed at all.
    #[error("cannot read credentials file at {path}: {reason}")]
    ConfigMissing { path: PathBuf, reason: String },

    /// The credentials file parsed but a required field is absent or empty.
    #[error("credentials file at {path} is missing `{field}`")]
    ConfigIncomplete { path: PathBuf, field: &'static str },

    /// The token endpoint answered without a usable `access_token`.
    #[error("token exchange failed: {0}")]
    TokenAcquisition(String),

    /// The media player query could not be run or returned garbage.
    #[error("now-playing query failed: {0}")]
    PlayerQuery(String),

    /// The search returned no track, or the top hit carried no album link.
    #[error("could not find album info for `{query}`")]
    AlbumNotFound { query: String },

    /// Clipboard copy or keystroke automation into the GUI app failed.
    #[error("GUI handoff failed: {0}")]
    AutomationFailed(String),

    /// The downloader subprocess finished with a non-zero exit status.
    #[error("downloader exited with {status}")]
    DownloadFailed { status: ExitStatus },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Setup guidance printed next to configuration errors.
    ///
    /// Mirrors the diagnostic contract of the credential loader: the expected
    /// file path, a minimal example document, and a pointer to where the
    /// credentials come from.
    pub fn remediation(&self) -> Option<String> {
        match self {
            Error::ConfigMissing { path, .. } | Error::ConfigIncomplete { path, .. } => {
                Some(format!(
                    "Expected location: {path}\n\
                     \n\
                     Create a credentials file with:\n\
                     \x20 {{\n\
                     \x20   \"spotify\": {{\n\
                     \x20     \"client_id\": \"your_id\",\n\
                     \x20     \"client_secret\": \"your_secret\"\n\
                     \x20   }}\n\
                     \x20 }}\n\
                     \n\
                     Get credentials from: https://developer.spotify.com/dashboard/applications",
                    path = path.display()
                ))
            }
            _ => None,
        }
    }
}
