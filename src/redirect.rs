//! Redirect planning: turn a shared track link into a link on the
//! listener's preferred platform.
//!
//! The flow mirrors what a redirect endpoint would do:
//! 1. Work out which platform the link belongs to and its track ID
//! 2. Keep the original link when there is nothing to translate
//! 3. Otherwise look the track up on its own catalog and resolve it
//!    everywhere else
//! 4. Redirect when the preferred platform has an exact match, or fall back
//!    to a listing of known links and alternatives

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{CatalogSearchProvider, TrackMetadata};
use crate::error::{Error, Result};
use crate::links::{self, Platform};
use crate::matching::{self, MatchCandidate, MatchConfig};

/// What to do with a shared link
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum RedirectPlan {
    /// Send the listener straight to this URL
    Redirect { url: String },
    /// No exact match on the preferred platform; let the listener choose
    Fallback {
        preferred: Platform,
        title: Option<String>,
        artist: Option<String>,
        /// Provider ID → known exact link
        links: BTreeMap<String, String>,
        /// Ranked alternatives on the preferred platform
        alternatives: Vec<MatchCandidate>,
    },
}

impl RedirectPlan {
    pub fn redirect(url: impl Into<String>) -> Self {
        RedirectPlan::Redirect { url: url.into() }
    }

    /// The redirect target, if this plan is a redirect
    pub fn target(&self) -> Option<&str> {
        match self {
            RedirectPlan::Redirect { url } => Some(url),
            RedirectPlan::Fallback { .. } => None,
        }
    }
}

/// Pick the platform preference: an explicit choice wins over the stored one.
pub fn effective_preference(explicit: Option<&str>, stored: Option<&str>) -> Option<String> {
    explicit
        .or(stored)
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
}

/// Plan the redirect for `url` given the listener's preferred platform.
pub async fn plan_redirect(
    url: &str,
    preference: Option<Platform>,
    providers: &[Arc<dyn CatalogSearchProvider>],
    config: &MatchConfig,
) -> Result<RedirectPlan> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::invalid_url("missing url"));
    }

    let Some(platform) = links::detect_platform(url) else {
        tracing::info!(url, "Unrecognized platform, redirecting to original link");
        return Ok(RedirectPlan::redirect(url));
    };

    let preferred = match preference {
        Some(preferred) if preferred != platform => preferred,
        _ => {
            tracing::debug!(%platform, "No translation needed");
            return Ok(RedirectPlan::redirect(url));
        }
    };

    let track_id = links::extract_track_id(platform, url);
    let source = match track_id.as_deref() {
        Some(id) => fetch_source(platform, id, providers).await,
        None => {
            tracing::warn!(%platform, url, "Could not extract a track ID");
            None
        }
    };

    let mut known_links = BTreeMap::new();
    known_links.insert(platform.as_str().to_string(), url.to_string());

    let mut alternatives = Vec::new();

    if let Some(ref source) = source
        && source.is_searchable()
    {
        let resolution = matching::resolve(source, providers, config).await;
        for (provider, link) in resolution.links {
            known_links.entry(provider).or_insert(link);
        }
        alternatives = resolution
            .alternatives
            .get(preferred.as_str())
            .cloned()
            .unwrap_or_default();
    }

    if let Some(target) = known_links.get(preferred.as_str()) {
        tracing::info!(from = %platform, to = %preferred, target = %target, "Redirecting");
        return Ok(RedirectPlan::redirect(target.clone()));
    }

    tracing::info!(
        from = %platform,
        to = %preferred,
        alternatives = alternatives.len(),
        "No exact match on preferred platform"
    );

    Ok(RedirectPlan::Fallback {
        preferred,
        title: source.as_ref().map(|s| s.title.clone()),
        artist: source.as_ref().map(|s| s.artist.clone()),
        links: known_links,
        alternatives,
    })
}

/// Look the source track up on its own catalog
async fn fetch_source(
    platform: Platform,
    track_id: &str,
    providers: &[Arc<dyn CatalogSearchProvider>],
) -> Option<TrackMetadata> {
    let Some(provider) = providers.iter().find(|p| p.id() == platform.as_str()) else {
        tracing::warn!(%platform, "No provider configured for source platform");
        return None;
    };

    let track = provider.fetch_by_id(track_id).await?;
    tracing::debug!(
        %platform,
        title = %track.metadata.title,
        artist = %track.metadata.artist,
        album = %track.metadata.album_str(),
        duration_ms = ?track.metadata.duration_ms,
        track_number = ?track.metadata.track_number,
        "Source metadata"
    );
    Some(track.metadata)
}
