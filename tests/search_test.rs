use nowgrab::error::Error;
use nowgrab::spotify::search::{build_search_query, first_album};
use nowgrab::types::SearchResponse;

// Helper function to parse a search response fixture
fn response(json: &str) -> SearchResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_build_search_query_is_percent_encoded() {
    // Exactly the percent-encoded form of `Song artist:Artist`
    assert_eq!(
        build_search_query("Song", "Artist"),
        "Song%20artist%3AArtist"
    );
}

#[test]
fn test_build_search_query_encodes_metadata_characters() {
    assert_eq!(
        build_search_query("Don't Stop Me Now", "Queen"),
        "Don%27t%20Stop%20Me%20Now%20artist%3AQueen"
    );
    assert_eq!(
        build_search_query("M&M", "A/B"),
        "M%26M%20artist%3AA%2FB"
    );
}

#[test]
fn test_first_album_returns_external_url() {
    let resp = response(
        r#"{"tracks":{"items":[{"album":{
            "name":"Foo",
            "artists":[{"name":"Bar"}],
            "external_urls":{"primary":"https://example/album/1"}
        }}]}}"#,
    );

    let album = first_album(resp, "Foo artist:Bar").unwrap();
    assert_eq!(album.name, "Foo");
    assert_eq!(album.artist, "Bar");
    assert_eq!(album.url, "https://example/album/1");
}

#[test]
fn test_first_album_prefers_spotify_provider() {
    let resp = response(
        r#"{"tracks":{"items":[{"album":{
            "name":"Foo",
            "artists":[{"name":"Bar"}],
            "external_urls":{
                "deezer":"https://example/deezer/1",
                "spotify":"https://open.spotify.com/album/1"
            }
        }}]}}"#,
    );

    let album = first_album(resp, "q").unwrap();
    assert_eq!(album.url, "https://open.spotify.com/album/1");
}

#[test]
fn test_first_album_takes_first_item_only() {
    let resp = response(
        r#"{"tracks":{"items":[
            {"album":{
                "name":"First",
                "artists":[{"name":"A"}],
                "external_urls":{"spotify":"https://example/album/first"}
            }},
            {"album":{
                "name":"Second",
                "artists":[{"name":"B"}],
                "external_urls":{"spotify":"https://example/album/second"}
            }}
        ]}}"#,
    );

    let album = first_album(resp, "q").unwrap();
    assert_eq!(album.name, "First");
}

#[test]
fn test_empty_items_is_album_not_found() {
    let resp = response(r#"{"tracks":{"items":[]}}"#);

    let err = first_album(resp, "Song artist:Artist").unwrap_err();
    match err {
        Error::AlbumNotFound { query } => assert_eq!(query, "Song artist:Artist"),
        other => panic!("expected AlbumNotFound, got {other:?}"),
    }
}

#[test]
fn test_item_without_album_is_album_not_found() {
    let resp = response(r#"{"tracks":{"items":[{}]}}"#);

    let err = first_album(resp, "q").unwrap_err();
    assert!(matches!(err, Error::AlbumNotFound { .. }));
}

#[test]
fn test_album_without_links_is_album_not_found() {
    let resp = response(
        r#"{"tracks":{"items":[{"album":{
            "name":"Foo",
            "artists":[{"name":"Bar"}],
            "external_urls":{}
        }}]}}"#,
    );

    let err = first_album(resp, "q").unwrap_err();
    assert!(matches!(err, Error::AlbumNotFound { .. }));
}

#[test]
fn test_album_without_artists_falls_back_to_empty_name() {
    let resp = response(
        r#"{"tracks":{"items":[{"album":{
            "name":"Foo",
            "external_urls":{"spotify":"https://example/album/1"}
        }}]}}"#,
    );

    let album = first_album(resp, "q").unwrap();
    assert_eq!(album.artist, "");
    assert_eq!(album.url, "https://example/album/1");
}
