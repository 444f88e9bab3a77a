//! Upstream Module
//!
//! Cache-aside gateway to the public game-platform APIs: identity resolution,
//! game details, vote totals and thumbnail assets.
//!
//! Detail and identity failures propagate to the caller; vote and thumbnail
//! failures are neutralized to a zeroed signal or a placeholder URL. The
//! aggregator alone decides whether a propagated failure turns into a
//! fallback record.

mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::UpstreamClient;
pub use types::{GameDetails, VoteTotals};

// == Public Constants ==
/// Image URL substituted when no thumbnail is available
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/512x512?text=No+Image";

// == Metadata Provider ==
/// Read-only access to per-game platform metadata.
///
/// The aggregator depends on this trait rather than on the HTTP client, so
/// tests can substitute scripted providers.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolves a public place id to an internal universe id.
    async fn resolve_universe(&self, place_id: &str) -> Result<u64>;

    /// Fetches the essential detail record; errors propagate.
    async fn fetch_details(&self, universe_id: u64) -> Result<GameDetails>;

    /// Fetches vote totals; failures yield zeroed totals.
    async fn fetch_votes(&self, universe_id: u64) -> VoteTotals;

    /// Fetches the icon URL; failures yield a placeholder.
    async fn fetch_thumbnail(&self, universe_id: u64) -> String;
}
