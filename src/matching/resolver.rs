//! Match orchestration - fan a source track out to every catalog
//!
//! For each provider, independently and concurrently:
//! 1. Search by title and artist (bounded by the provider timeout)
//! 2. Classify every candidate against the source
//! 3. Rank exact matches and alternatives
//!
//! The per-provider results are then folded into a [`Resolution`].

use std::sync::Arc;

use futures::future::join_all;
use tracing::Instrument;

use super::classify::{SourceProfile, classify};
use super::domain::{Classification, ProviderResult, Resolution};
use super::rank::{rank_alternatives, select_best_exact};
use super::thresholds::MatchConfig;
use crate::catalog::{self, CatalogSearchProvider, CatalogTrack, TrackMetadata};
use crate::config::Config;

/// Classify and rank one provider's search results.
pub fn match_provider_results(
    provider_id: &str,
    source: &SourceProfile,
    candidates: &[CatalogTrack],
    config: &MatchConfig,
) -> ProviderResult {
    let span = tracing::debug_span!("match_provider", provider = provider_id);
    let _guard = span.enter();

    let mut exact = Vec::new();
    let mut alternatives = Vec::new();

    for candidate in candidates {
        let outcome = classify(source, candidate, config);
        tracing::trace!(
            title = %candidate.metadata.title,
            url = %candidate.url,
            outcome = outcome.label(),
            "Classified candidate"
        );
        match outcome {
            Classification::Exact(m) => exact.push(m),
            Classification::Alternative(m) => alternatives.push(m),
            Classification::Rejected => {}
        }
    }

    let best_exact = select_best_exact(exact);
    let alternatives = rank_alternatives(alternatives);

    tracing::debug!(
        candidates = candidates.len(),
        exact = best_exact.is_some(),
        alternatives = alternatives.len(),
        "Provider matching complete"
    );

    ProviderResult {
        provider_id: provider_id.to_string(),
        best_exact,
        alternatives,
    }
}

/// Search one provider, giving up after the configured timeout.
async fn search_with_timeout(
    provider: &dyn CatalogSearchProvider,
    source: &TrackMetadata,
    config: &MatchConfig,
) -> Vec<CatalogTrack> {
    let search = provider.search(&source.title, &source.artist);
    match tokio::time::timeout(config.provider_timeout(), search).await {
        Ok(results) => results,
        Err(_) => {
            tracing::warn!(
                provider = provider.id(),
                timeout_ms = config.provider_timeout_ms,
                "Search timed out"
            );
            Vec::new()
        }
    }
}

/// Find the source track on every provider.
///
/// Providers are searched concurrently. A provider that fails, times out or
/// finds nothing simply contributes no entries. A source without a title or
/// artist yields an empty resolution and no provider is queried.
pub async fn resolve(
    source: &TrackMetadata,
    providers: &[Arc<dyn CatalogSearchProvider>],
    config: &MatchConfig,
) -> Resolution {
    if !source.is_searchable() {
        tracing::warn!(
            title = %source.title,
            artist = %source.artist,
            "Source track is missing title or artist, skipping match"
        );
        return Resolution::default();
    }

    let profile = SourceProfile::new(source.clone());

    let searches = providers.iter().map(|provider| {
        let profile = &profile;
        let span = tracing::info_span!("provider", provider = provider.id());
        async move {
            let candidates = search_with_timeout(provider.as_ref(), &profile.metadata, config).await;
            match_provider_results(provider.id(), profile, &candidates, config)
        }
        .instrument(span)
    });

    let resolution: Resolution = join_all(searches).await.into_iter().collect();

    tracing::info!(
        title = %source.title,
        artist = %source.artist,
        links = resolution.links.len(),
        alternatives = resolution.alternatives.len(),
        "Resolved track"
    );

    resolution
}

/// Resolves tracks against a fixed set of providers
pub struct Resolver {
    providers: Vec<Arc<dyn CatalogSearchProvider>>,
    config: MatchConfig,
}

impl Resolver {
    /// Create a resolver over the given providers
    pub fn new(providers: Vec<Arc<dyn CatalogSearchProvider>>, config: MatchConfig) -> Self {
        Self { providers, config }
    }

    /// Create a resolver over the real catalogs described by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(catalog::build_providers(config), config.matching.clone())
    }

    pub fn providers(&self) -> &[Arc<dyn CatalogSearchProvider>] {
        &self.providers
    }

    /// Find `source` on every provider
    pub async fn resolve(&self, source: &TrackMetadata) -> Resolution {
        resolve(source, &self.providers, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::catalog::CatalogError;
    use crate::catalog::traits::mocks::MockCatalog;
    use crate::test_utils::{candidate, yellow_source};

    fn providers(mocks: Vec<Arc<MockCatalog>>) -> Vec<Arc<dyn CatalogSearchProvider>> {
        mocks
            .into_iter()
            .map(|m| m as Arc<dyn CatalogSearchProvider>)
            .collect()
    }

    fn yellow_on(url: &str) -> CatalogTrack {
        CatalogTrack::new(
            TrackMetadata::new("Yellow", "Coldplay")
                .with_album("Parachutes")
                .with_duration_ms(266_000)
                .with_track_number(1),
            url,
        )
    }

    #[test]
    fn test_match_provider_results_splits_exact_and_alternatives() {
        let profile = SourceProfile::new(yellow_source());
        let live = candidate(
            TrackMetadata::new("Yellow - Live", "Coldplay")
                .with_album("Live 2003")
                .with_duration_ms(270_000),
        );
        let unrelated = candidate(TrackMetadata::new("Fix You", "Coldplay"));

        let result = match_provider_results(
            "spotify",
            &profile,
            &[live, yellow_on("https://open.spotify.com/track/exact"), unrelated],
            &MatchConfig::default(),
        );

        assert_eq!(result.provider_id, "spotify");
        assert_eq!(
            result.best_exact.map(|m| m.canonical_url),
            Some("https://open.spotify.com/track/exact".to_string())
        );
        assert_eq!(result.alternatives.len(), 1);
        assert_eq!(result.alternatives[0].metadata.title, "Yellow - Live");
    }

    #[tokio::test]
    async fn test_exact_match_becomes_link() {
        let spotify = Arc::new(MockCatalog::with_results(
            "spotify",
            vec![yellow_on("https://open.spotify.com/track/abc")],
        ));

        let resolution = resolve(
            &yellow_source(),
            &providers(vec![spotify]),
            &MatchConfig::default(),
        )
        .await;

        assert_eq!(resolution.links["spotify"], "https://open.spotify.com/track/abc");
        assert!(resolution.alternatives.is_empty());
    }

    #[tokio::test]
    async fn test_live_version_is_only_an_alternative() {
        let apple = Arc::new(MockCatalog::with_results(
            "apple",
            vec![candidate(
                TrackMetadata::new("Yellow - Live", "Coldplay")
                    .with_album("Live 2003")
                    .with_duration_ms(270_000),
            )],
        ));

        let resolution = resolve(
            &yellow_source(),
            &providers(vec![apple]),
            &MatchConfig::default(),
        )
        .await;

        assert!(!resolution.links.contains_key("apple"));
        let alternatives = &resolution.alternatives["apple"];
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].flags.version_penalty, 0.1);
    }

    #[tokio::test]
    async fn test_single_token_candidate_contributes_nothing() {
        let youtube = Arc::new(MockCatalog::with_results(
            "youtube",
            vec![candidate(TrackMetadata::new("X", ""))],
        ));

        let resolution = resolve(
            &TrackMetadata::new("X", "Coldplay"),
            &providers(vec![youtube]),
            &MatchConfig::default(),
        )
        .await;

        assert!(resolution.is_empty());
    }

    #[tokio::test]
    async fn test_failing_and_slow_providers_degrade_to_nothing() {
        let spotify = Arc::new(MockCatalog::with_results(
            "spotify",
            vec![yellow_on("https://open.spotify.com/track/abc")],
        ));
        let apple = Arc::new(MockCatalog::with_error(
            "apple",
            CatalogError::Network("connection refused".into()),
        ));
        let youtube = Arc::new(MockCatalog::empty("youtube"));
        let slow = Arc::new(
            MockCatalog::with_results("slow", vec![yellow_on("https://slow.example/1")])
                .delayed(Duration::from_secs(5)),
        );

        let config = MatchConfig {
            provider_timeout_ms: 50,
            ..Default::default()
        };

        let resolution = resolve(
            &yellow_source(),
            &providers(vec![spotify, apple.clone(), youtube.clone(), slow.clone()]),
            &config,
        )
        .await;

        assert_eq!(resolution.links.len(), 1);
        assert!(resolution.links.contains_key("spotify"));
        assert!(resolution.alternatives.is_empty());
        assert_eq!(apple.calls(), 1);
        assert_eq!(youtube.calls(), 1);
        assert_eq!(slow.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_source_queries_nobody() {
        let spotify = Arc::new(MockCatalog::with_results(
            "spotify",
            vec![yellow_on("https://open.spotify.com/track/abc")],
        ));

        let resolution = resolve(
            &TrackMetadata::new("Yellow", "   "),
            &providers(vec![spotify.clone()]),
            &MatchConfig::default(),
        )
        .await;

        assert!(resolution.is_empty());
        assert_eq!(spotify.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolver_uses_its_providers() {
        let spotify = Arc::new(MockCatalog::with_results(
            "spotify",
            vec![yellow_on("https://open.spotify.com/track/abc")],
        ));
        let resolver = Resolver::new(providers(vec![spotify.clone()]), MatchConfig::default());

        assert_eq!(resolver.providers().len(), 1);
        let resolution = resolver.resolve(&yellow_source()).await;
        assert_eq!(resolution.links.len(), 1);
        assert_eq!(spotify.calls(), 1);
    }
}
