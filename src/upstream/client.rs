//! Upstream Client
//!
//! HTTP client for the game-platform endpoints. Each call is cache-aside
//! under its own namespace: successful responses are stored before being
//! returned, so repeated lookups within the TTL window incur no network cost.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::games::GameCaches;
use crate::upstream::types::{
    GameDetails, GamesListResponse, ThumbnailsListResponse, UniverseResponse, VoteTotals,
    VotesListResponse,
};
use crate::upstream::{MetadataProvider, PLACEHOLDER_THUMBNAIL};

// == Upstream Client ==
/// Client for the platform's universe, games, votes and thumbnails APIs.
pub struct UpstreamClient {
    /// HTTP client with the configured request timeout
    http: reqwest::Client,
    /// Shared per-namespace caches
    caches: Arc<GameCaches>,
    games_api_base: String,
    thumbnails_api_base: String,
    apis_base: String,
    /// TTL in seconds for near-static namespaces (universe ids, thumbnails)
    long_ttl: u64,
}

impl UpstreamClient {
    // == Constructor ==
    /// Creates a new UpstreamClient from configuration.
    ///
    /// # Arguments
    /// * `config` - Base URLs, timeout and TTL settings
    /// * `caches` - Shared cache set, injected by the composition root
    pub fn new(config: &Config, caches: Arc<GameCaches>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| ApiError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            caches,
            games_api_base: config.games_api_base.clone(),
            thumbnails_api_base: config.thumbnails_api_base.clone(),
            apis_base: config.apis_base.clone(),
            long_ttl: config.long_ttl,
        })
    }

    /// Issues a GET request and decodes the JSON body.
    ///
    /// Any transport error, non-success status or decode failure is reported
    /// as `ApiError::Upstream` tagged with `what`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("{what}: {e}")))?
            .error_for_status()
            .map_err(|e| ApiError::Upstream(format!("{what}: {e}")))?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("{what}: {e}")))
    }
}

#[async_trait]
impl MetadataProvider for UpstreamClient {
    /// Resolves a public place id to the platform's internal universe id.
    ///
    /// Failures propagate; the aggregator decides the fallback policy.
    async fn resolve_universe(&self, place_id: &str) -> Result<u64> {
        let cache_key = format!("universe:{place_id}");
        if let Some(universe_id) = self.caches.universe.write().await.get(&cache_key) {
            return Ok(universe_id);
        }

        debug!("Resolving universe id for place {place_id}");
        let url = format!("{}/universes/v1/places/{place_id}/universe", self.apis_base);
        let body: UniverseResponse = self
            .get_json(&url, &format!("universe lookup for place {place_id}"))
            .await?;

        self.caches
            .universe
            .write()
            .await
            .set(cache_key, body.universe_id, Some(self.long_ttl));

        Ok(body.universe_id)
    }

    /// Fetches the detail record for a universe.
    ///
    /// An empty result set is an error: detail data is essential.
    async fn fetch_details(&self, universe_id: u64) -> Result<GameDetails> {
        let cache_key = format!("details:{universe_id}");
        if let Some(details) = self.caches.details.write().await.get(&cache_key) {
            return Ok(details);
        }

        debug!("Fetching game details for universe {universe_id}");
        let url = format!("{}/games?universeIds={universe_id}", self.games_api_base);
        let body: GamesListResponse = self
            .get_json(&url, &format!("game details for universe {universe_id}"))
            .await?;

        let details = body.data.into_iter().next().ok_or_else(|| {
            ApiError::Upstream(format!("no game found for universe {universe_id}"))
        })?;

        self.caches
            .details
            .write()
            .await
            .set(cache_key, details.clone(), None);

        Ok(details)
    }

    /// Fetches the vote totals for a universe.
    ///
    /// Votes are cosmetic: any failure yields zeroed totals instead of an
    /// error, and the substitute is not cached.
    async fn fetch_votes(&self, universe_id: u64) -> VoteTotals {
        let cache_key = format!("votes:{universe_id}");
        if let Some(votes) = self.caches.votes.write().await.get(&cache_key) {
            return votes;
        }

        debug!("Fetching votes for universe {universe_id}");
        let url = format!(
            "{}/games/votes?universeIds={universe_id}",
            self.games_api_base
        );
        let body: VotesListResponse = match self
            .get_json(&url, &format!("votes for universe {universe_id}"))
            .await
        {
            Ok(body) => body,
            Err(err) => {
                warn!("Vote lookup failed for universe {universe_id}: {err}");
                return VoteTotals::zeroed(universe_id);
            }
        };

        match body.data.into_iter().next() {
            Some(votes) => {
                self.caches.votes.write().await.set(cache_key, votes, None);
                votes
            }
            None => {
                warn!("No vote record for universe {universe_id}");
                VoteTotals::zeroed(universe_id)
            }
        }
    }

    /// Fetches the icon URL for a universe.
    ///
    /// Any failure, or an asset state other than `Completed`, yields the
    /// placeholder URL; the substitute is not cached.
    async fn fetch_thumbnail(&self, universe_id: u64) -> String {
        let cache_key = format!("thumbnail:{universe_id}");
        if let Some(thumbnail) = self.caches.thumbnails.write().await.get(&cache_key) {
            return thumbnail;
        }

        debug!("Fetching thumbnail for universe {universe_id}");
        let url = format!(
            "{}/games/icons?universeIds={universe_id}&size=512x512&format=Png",
            self.thumbnails_api_base
        );
        let body: ThumbnailsListResponse = match self
            .get_json(&url, &format!("thumbnail for universe {universe_id}"))
            .await
        {
            Ok(body) => body,
            Err(err) => {
                warn!("Thumbnail lookup failed for universe {universe_id}: {err}");
                return PLACEHOLDER_THUMBNAIL.to_string();
            }
        };

        let image_url = body
            .data
            .into_iter()
            .next()
            .filter(|info| info.state == "Completed")
            .and_then(|info| info.image_url);

        match image_url {
            Some(image_url) => {
                self.caches
                    .thumbnails
                    .write()
                    .await
                    .set(cache_key, image_url.clone(), Some(self.long_ttl));
                image_url
            }
            None => {
                warn!("Thumbnail not available for universe {universe_id}");
                PLACEHOLDER_THUMBNAIL.to_string()
            }
        }
    }
}
