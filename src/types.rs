use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Opaque short-lived bearer token. Used once per invocation, never cached.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        AccessToken(token)
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NowPlaying {
    Playing { track: String, artist: String },
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumMatch {
    pub name: String,
    pub artist: String,
    pub url: String,
}

/// Terminal state of a pipeline run, mapped to an exit code in `main`.
#[derive(Debug, Clone)]
pub enum Outcome {
    Dispatched(AlbumMatch),
    Resolved(AlbumMatch),
    Idle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    #[serde(default)]
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
    #[serde(default)]
    pub external_urls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumArtist {
    pub name: String,
}
