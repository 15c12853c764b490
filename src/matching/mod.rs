//! Cross-catalog track matching - find the same recording on other services.
//!
//! # Pipeline
//!
//! - **Tokenize** (`tokenize.rs`) - Normalize title/artist/album into word sets
//! - **Similarity** (`similarity.rs`) - Asymmetric subset score of candidate vs source
//! - **Classify** (`classify.rs`) - Exact match, alternative, or rejected
//! - **Rank** (`rank.rs`) - Best exact match and ordered alternatives per provider
//! - **Resolver** (`resolver.rs`) - Concurrent fan-out over all providers
//!
//! The classifier and ranker are pure; only the resolver does I/O, and only
//! through [`CatalogSearchProvider`](crate::catalog::CatalogSearchProvider).
//!
//! # Usage
//!
//! ```ignore
//! use music_redirect::catalog::TrackMetadata;
//! use music_redirect::matching::Resolver;
//!
//! let resolver = Resolver::from_config(&music_redirect::config::load());
//! let source = TrackMetadata::new("Yellow", "Coldplay").with_album("Parachutes");
//! let resolution = resolver.resolve(&source).await;
//! for (provider, url) in &resolution.links {
//!     println!("{provider}: {url}");
//! }
//! ```

pub mod classify;
pub mod domain;
pub mod rank;
pub mod resolver;
pub mod similarity;
pub mod thresholds;
pub mod tokenize;

pub use classify::{SourceProfile, classify};
pub use domain::{Classification, MatchCandidate, MatchFlags, ProviderResult, Resolution};
pub use rank::{rank_alternatives, select_best_exact};
pub use resolver::{Resolver, match_provider_results, resolve};
pub use similarity::subset_similarity;
pub use thresholds::MatchConfig;
pub use tokenize::{TokenSet, normalize, token_set};
