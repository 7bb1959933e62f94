use reqwest::Client;

use crate::{
    Res,
    config::ApiConfig,
    error::Error,
    types::{AccessToken, AlbumMatch, SearchResponse},
};

/// Builds the percent-encoded search query for a track/artist pair.
///
/// The query string is exactly the encoded form of `<track> artist:<artist>`,
/// matching what the search endpoint expects in its `q` parameter.
pub fn build_search_query(track: &str, artist: &str) -> String {
    urlencoding::encode(&format!("{track} artist:{artist}")).into_owned()
}

/// Resolves the parent album of the best-matching track.
///
/// Issues one authenticated GET against the search endpoint with
/// `type=track&limit=1` and extracts the album of the first result. There is
/// no scoring and no fallback to a second candidate; whatever the API ranks
/// first wins or the lookup fails.
///
/// # Errors
///
/// Network and HTTP failures propagate as [`Error::Http`]. An empty result
/// list, a first hit without an album object, or an album without an
/// external link all yield [`Error::AlbumNotFound`].
pub async fn resolve_album(
    api: &ApiConfig,
    token: &AccessToken,
    track: &str,
    artist: &str,
) -> Res<AlbumMatch> {
    let api_url = format!(
        "{uri}/search?q={query}&type=track&limit=1",
        uri = &api.api_url,
        query = build_search_query(track, artist)
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token.secret())
        .send()
        .await?;

    let json = response.json::<SearchResponse>().await?;

    first_album(json, &format!("{track} artist:{artist}"))
}

/// Extracts the album link from the first search hit.
///
/// Takes the first item of the result list only. The external link prefers
/// the `spotify` provider entry and otherwise falls back to the first link
/// the album carries.
pub fn first_album(response: SearchResponse, query: &str) -> Res<AlbumMatch> {
    let not_found = || Error::AlbumNotFound {
        query: query.to_string(),
    };

    let item = response
        .tracks
        .items
        .into_iter()
        .next()
        .ok_or_else(not_found)?;
    let album = item.album.ok_or_else(not_found)?;

    let url = album
        .external_urls
        .get("spotify")
        .or_else(|| album.external_urls.values().next())
        .cloned()
        .ok_or_else(not_found)?;

    let artist = album
        .artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_default();

    Ok(AlbumMatch {
        name: album.name,
        artist,
        url,
    })
}
