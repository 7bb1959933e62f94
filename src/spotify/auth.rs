use reqwest::Client;
use serde_json::Value;

use crate::{
    Res,
    config::ApiConfig,
    error::Error,
    types::{AccessToken, Credentials},
};

/// Exchanges application credentials for a short-lived bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant against the configured
/// token endpoint: a single HTTPS POST with `grant_type=client_credentials`
/// and the client id/secret as URL-encoded form parameters. The token is
/// used once by the caller and never persisted.
///
/// # Errors
///
/// Network and HTTP failures propagate as [`Error::Http`]. A well-formed
/// JSON reply without a usable `access_token` (typically an
/// `invalid_client` rejection) becomes [`Error::TokenAcquisition`] carrying
/// the server's error description when one is present.
///
/// # Example
///
/// ```
/// let token = acquire_token(&config.api, &config.credentials).await?;
/// let results = search::resolve_album(&config.api, &token, track, artist).await?;
/// ```
pub async fn acquire_token(api: &ApiConfig, credentials: &Credentials) -> Res<AccessToken> {
    let client = Client::new();
    let res = client
        .post(&api.token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .await?;

    let json: Value = res.json().await?;

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(AccessToken::new(token.to_string())),
        _ => {
            let reason = json["error_description"]
                .as_str()
                .or_else(|| json["error"].as_str())
                .unwrap_or("no access_token in response");
            Err(Error::TokenAcquisition(reason.to_string()))
        }
    }
}
