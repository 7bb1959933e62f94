//! Configuration management for the now-playing bridge.
//!
//! This module loads the unified credentials file and turns it into an
//! explicit [`Config`] value that is constructed once at process start and
//! passed by parameter into each component. No component reads ambient
//! environment or global state; everything flows through this value, which
//! keeps the pipeline independently testable.
//!
//! The file also carries optional handoff settings next to the credentials,
//! so one document configures the whole tool:
//!
//! ```json
//! {
//!   "spotify": {
//!     "client_id": "your_id",
//!     "client_secret": "your_secret"
//!   },
//!   "dispatch": {
//!     "mode": "cli",
//!     "downloader": "/usr/local/bin/deemix-download.sh"
//!   }
//! }
//! ```

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use crate::{
    Res,
    error::Error,
    types::Credentials,
};

/// Token endpoint for the client-credentials grant.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// GUI application the clipboard handoff targets when nothing else is set.
pub const DEFAULT_GUI_APP: &str = "Deemix";

/// Fully resolved runtime configuration.
///
/// Built once in `main` from the credentials file and handed down into the
/// token acquirer, the resolver and the dispatcher. Immutable for the rest
/// of the run.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api: ApiConfig,
    pub dispatch: DispatchConfig,
}

/// Endpoints used for the token grant and the track search.
///
/// Fixed in production; tests construct their own values against local
/// fixtures instead of touching the network.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token_url: String,
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            token_url: SPOTIFY_TOKEN_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
        }
    }
}

/// Which handoff strategy delivers the resolved album link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Clipboard copy plus simulated paste into the GUI application.
    Gui,
    /// Invoke the downloader CLI with the album link as its sole argument.
    Cli,
}

/// Settings for the handoff dispatcher.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub mode: DispatchMode,
    /// Name of the GUI application to paste into.
    pub app: String,
    /// Downloader program for [`DispatchMode::Cli`].
    pub downloader: Option<PathBuf>,
}

/// Raw shape of the credentials file. Everything is optional here so that
/// missing fields surface as [`Error::ConfigIncomplete`] with the field
/// name instead of an opaque parse failure.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    spotify: Option<SpotifySection>,
    dispatch: Option<DispatchSection>,
}

#[derive(Debug, Deserialize)]
struct SpotifySection {
    client_id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DispatchSection {
    mode: Option<DispatchMode>,
    app: Option<String>,
    downloader: Option<PathBuf>,
}

/// Returns the fixed credentials file location.
///
/// The file lives in the platform-specific user configuration directory:
/// - Linux: `~/.config/nowgrab/credentials.json`
/// - macOS: `~/Library/Application Support/nowgrab/credentials.json`
/// - Windows: `%APPDATA%/nowgrab/credentials.json`
pub fn credentials_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowgrab/credentials.json");
    path
}

impl Config {
    /// Loads the configuration from the fixed credentials file location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigMissing`] if the file cannot be read or parsed
    /// and [`Error::ConfigIncomplete`] if a required credential field is
    /// absent. No partial credentials are accepted and nothing is defaulted
    /// for the `spotify` section.
    pub async fn load() -> Res<Self> {
        Self::load_from(credentials_path()).await
    }

    /// Loads the configuration from an explicit path.
    ///
    /// Same contract as [`Config::load`]; exposed separately so tests can
    /// point at temporary files.
    pub async fn load_from(path: PathBuf) -> Res<Self> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| Error::ConfigMissing {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let file: CredentialsFile =
            serde_json::from_str(&content).map_err(|e| Error::ConfigMissing {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let spotify = file.spotify.ok_or(Error::ConfigIncomplete {
            path: path.clone(),
            field: "spotify",
        })?;

        let client_id = require(spotify.client_id, &path, "spotify.client_id")?;
        let client_secret = require(spotify.client_secret, &path, "spotify.client_secret")?;

        let dispatch = file.dispatch.unwrap_or(DispatchSection {
            mode: None,
            app: None,
            downloader: None,
        });

        Ok(Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            api: ApiConfig::default(),
            dispatch: DispatchConfig {
                mode: dispatch.mode.unwrap_or(DispatchMode::Gui),
                app: dispatch.app.unwrap_or_else(|| DEFAULT_GUI_APP.to_string()),
                downloader: dispatch.downloader,
            },
        })
    }
}

fn require(value: Option<String>, path: &PathBuf, field: &'static str) -> Res<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::ConfigIncomplete {
            path: path.clone(),
            field,
        }),
    }
}
