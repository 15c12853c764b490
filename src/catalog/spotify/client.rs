//! Spotify Web API HTTP client
//!
//! Handles communication with the Spotify Web API.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! Every request needs a bearer token. We use the client-credentials flow
//! and cache the token until it expires.
//!
//! Search runs progressively looser queries until one returns results:
//! 1. Fielded: `track:"Title" artist:"Artist"`
//! 2. Unfielded: `Title Artist`
//! 3. Title only

use std::future::Future;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, CatalogTrack};
use crate::catalog::{fetch_json, http_client};
use crate::config::ProvidersConfig;

/// Refresh the token this long before Spotify says it expires
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// Used when the token response carries no `expires_in`
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// Upper bound on how long a token is cached, whatever the server claims
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 3600);

/// Spotify Web API client
pub struct SpotifyClient {
    credentials: Option<(String, String)>,
    http_client: reqwest::Client,
    api_url: String,
    token_url: String,
    limit: u32,
    market: Option<String>,
    token: Mutex<Option<CachedToken>>,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl SpotifyClient {
    /// Create a new client. Without credentials every request fails with
    /// [`CatalogError::MissingCredentials`].
    pub fn new(credentials: Option<(&str, &str)>, settings: &ProvidersConfig) -> Self {
        Self {
            credentials: credentials.map(|(id, secret)| (id.to_string(), secret.to_string())),
            http_client: http_client(Duration::from_secs(settings.request_timeout_secs)),
            api_url: "https://api.spotify.com/v1".to_string(),
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            limit: settings.result_limit,
            market: settings.spotify_market.clone(),
            token: Mutex::new(None),
        }
    }

    /// Create a client for testing with custom base URLs
    #[cfg(test)]
    pub fn with_base_urls(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token_url: token_url.into(),
            ..Self::new(Some(("id", "secret")), &ProvidersConfig::default())
        }
    }

    /// Search for tracks, loosening the query until something matches
    pub async fn search_tracks(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Vec<CatalogTrack>, CatalogError> {
        let token = self.access_token().await?;
        let token = token.as_str();

        first_non_empty(search_queries(title, artist), |query| async move {
            self.send_search_request(token, &query).await
        })
        .await
    }

    /// Look up a single track by Spotify ID
    pub async fn get_track(&self, track_id: &str) -> Result<CatalogTrack, CatalogError> {
        let token = self.access_token().await?;
        let url = format!("{}/tracks/{}", self.api_url, urlencoding::encode(track_id));

        let track: dto::Track =
            fetch_json(self.http_client.get(&url).bearer_auth(&token)).await?;

        adapter::to_track(track).ok_or_else(|| CatalogError::NotFound(track_id.to_string()))
    }

    async fn send_search_request(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<CatalogTrack>, CatalogError> {
        let mut url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.api_url,
            urlencoding::encode(query),
            self.limit
        );
        if let Some(ref market) = self.market {
            url.push_str(&format!("&market={}", urlencoding::encode(market)));
        }

        let response: dto::SearchResponse =
            fetch_json(self.http_client.get(&url).bearer_auth(token)).await?;

        Ok(adapter::to_tracks(response))
    }

    /// Return a cached access token, requesting a new one when needed
    async fn access_token(&self) -> Result<String, CatalogError> {
        let (client_id, client_secret) = self
            .credentials
            .as_ref()
            .ok_or(CatalogError::MissingCredentials("spotify"))?;

        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        let request = self
            .http_client
            .post(&self.token_url)
            .basic_auth(client_id, Some(client_secret))
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body("grant_type=client_credentials");

        let response: dto::TokenResponse = fetch_json(request).await?;

        match token_expiry(Instant::now(), response.expires_in) {
            Some(expires_at) => {
                *self.token.lock() = Some(CachedToken {
                    value: response.access_token.clone(),
                    expires_at,
                });
            }
            None => tracing::warn!(provider = "spotify", "Token lifetime out of range, not caching"),
        }

        tracing::debug!(provider = "spotify", "Obtained access token");
        Ok(response.access_token)
    }

    fn cached_token(&self) -> Option<String> {
        self.token
            .lock()
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.value.clone())
    }
}

/// When a token issued at `now` should be refreshed.
///
/// The advertised lifetime is capped, so a bogus `expires_in` can't overflow.
fn token_expiry(now: Instant, expires_in: Option<u64>) -> Option<Instant> {
    let lifetime = expires_in
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TOKEN_LIFETIME)
        .min(MAX_TOKEN_LIFETIME)
        .saturating_sub(TOKEN_EXPIRY_MARGIN);
    now.checked_add(lifetime)
}

/// Run the queries in order and return the first non-empty result set.
///
/// A failed query is logged and treated as empty so the looser ones still
/// run. The last error is returned only when every query failed.
async fn first_non_empty<F, Fut>(
    queries: Vec<(&'static str, String)>,
    mut send: F,
) -> Result<Vec<CatalogTrack>, CatalogError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<CatalogTrack>, CatalogError>>,
{
    let mut last_error = None;
    let mut any_succeeded = false;

    for (strategy, query) in queries {
        tracing::debug!(provider = "spotify", strategy, query = %query, "Searching");
        match send(query).await {
            Ok(tracks) if !tracks.is_empty() => return Ok(tracks),
            Ok(_) => any_succeeded = true,
            Err(e) => {
                tracing::warn!(provider = "spotify", strategy, "Search query failed: {}", e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if !any_succeeded => Err(e),
        _ => Ok(Vec::new()),
    }
}

/// The query strategies to try, most specific first
fn search_queries(title: &str, artist: &str) -> Vec<(&'static str, String)> {
    let mut fielded = Vec::new();
    if !title.is_empty() {
        fielded.push(format!("track:\"{}\"", title));
    }
    if !artist.is_empty() {
        fielded.push(format!("artist:\"{}\"", artist));
    }

    let loose: Vec<&str> = [title, artist].into_iter().filter(|s| !s.is_empty()).collect();

    let mut queries = Vec::new();
    if !fielded.is_empty() {
        queries.push(("strict", fielded.join(" ")));
    }
    if !loose.is_empty() {
        queries.push(("loose", loose.join(" ")));
    }
    if !title.is_empty() {
        queries.push(("title_only", title.to_string()));
    }
    queries
}
