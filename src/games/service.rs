//! Game Service
//!
//! The cache-aside aggregator. Composes one `Game` record per place id from
//! identity resolution plus a three-way concurrent fetch of details, votes
//! and thumbnail, caching only successfully composed records. When identity
//! or detail data cannot be fetched, the static fallback record is served
//! instead; unknown place ids always fail.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::games::catalog::{self, GameConfig, DEVELOPER_NAME, POPULAR_THRESHOLD};
use crate::games::{fallback, GameCaches};
use crate::models::Game;
use crate::upstream::MetadataProvider;

// == Rating ==
/// Converts vote totals into a 0-5 star rating with one decimal place.
///
/// Returns 0.0 when no votes have been cast.
pub fn calculate_rating(up_votes: u64, down_votes: u64) -> f64 {
    let total = up_votes + down_votes;
    if total == 0 {
        return 0.0;
    }

    let ratio = up_votes as f64 / total as f64;
    (ratio * 5.0 * 10.0).round() / 10.0
}

// == Game Service ==
/// Aggregates upstream metadata into denormalized game records.
pub struct GameService {
    /// Upstream metadata source
    provider: Arc<dyn MetadataProvider>,
    /// Shared per-namespace caches
    caches: Arc<GameCaches>,
}

impl GameService {
    // == Constructor ==
    /// Creates a new GameService over an injected provider and cache set.
    pub fn new(provider: Arc<dyn MetadataProvider>, caches: Arc<GameCaches>) -> Self {
        Self { provider, caches }
    }

    // == Get One ==
    /// Returns the composed record for one place id.
    ///
    /// Cache-aside under `full:<place_id>`. On a miss the record is composed
    /// live and cached; if identity or detail fetching fails, the static
    /// fallback is returned without being cached, so a recovered upstream is
    /// used on the next call. A place id without a catalog entry is an
    /// `UnknownGame` error regardless of upstream state.
    pub async fn get_game(&self, place_id: &str) -> Result<Game> {
        let cache_key = format!("full:{place_id}");
        if let Some(game) = self.caches.games.write().await.get(&cache_key) {
            return Ok(game);
        }

        let config = catalog::config_for(place_id)
            .ok_or_else(|| ApiError::UnknownGame(place_id.to_string()))?;

        match self.compose_game(place_id, config).await {
            Ok(game) => {
                self.caches
                    .games
                    .write()
                    .await
                    .set(cache_key, game.clone(), None);
                info!("Composed game record for place {place_id}: {}", game.title);
                Ok(game)
            }
            Err(err) => {
                warn!("Live composition failed for place {place_id}: {err}");
                match fallback::fallback_game(place_id) {
                    Some(game) => Ok(game),
                    None => Err(err),
                }
            }
        }
    }

    /// Resolves identity, fans out the three metadata fetches concurrently
    /// and composes the record.
    async fn compose_game(&self, place_id: &str, config: &GameConfig) -> Result<Game> {
        let universe_id = self.provider.resolve_universe(place_id).await?;

        let (details, votes, thumbnail) = tokio::join!(
            self.provider.fetch_details(universe_id),
            self.provider.fetch_votes(universe_id),
            self.provider.fetch_thumbnail(universe_id),
        );
        let details = details?;

        let rating = calculate_rating(votes.up_votes, votes.down_votes);
        let is_popular = details.playing >= POPULAR_THRESHOLD;

        Ok(Game {
            id: place_id.to_string(),
            title: details.name,
            description: details
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| "Description not available".to_string()),
            thumbnail,
            category: config.category,
            players_online: details.playing,
            visits: details.visits,
            rating,
            is_popular,
            created_at: details.created,
            last_updated: details.updated,
            tags: config.tags.iter().map(|tag| tag.to_string()).collect(),
            developer: DEVELOPER_NAME.to_string(),
            featured: true,
            url: catalog::game_url(place_id),
        })
    }

    // == Get All ==
    /// Returns the composed records for a batch of place ids.
    ///
    /// Cache-aside under `all:<sorted place ids>`. Each place id is fetched
    /// independently and concurrently; an id whose fetch fails is replaced by
    /// its fallback, and ids with neither live data nor a fallback are
    /// silently dropped. A partial batch is a success, never an error.
    pub async fn get_all_games(&self, place_ids: &[String]) -> Vec<Game> {
        let cache_key = batch_key(place_ids);
        if let Some(games) = self.caches.listings.write().await.get(&cache_key) {
            return games;
        }

        info!("Fetching {} games", place_ids.len());
        let fetches = place_ids.iter().map(|place_id| async move {
            match self.get_game(place_id).await {
                Ok(game) => Some(game),
                Err(err) => {
                    warn!("Dropping place {place_id} from listing: {err}");
                    fallback::fallback_game(place_id)
                }
            }
        });

        let games: Vec<Game> = join_all(fetches).await.into_iter().flatten().collect();
        info!("Loaded {} games", games.len());

        self.caches
            .listings
            .write()
            .await
            .set(cache_key, games.clone(), None);

        games
    }

    // == Fallback ==
    /// Pure lookup into the static fallback table.
    pub fn fallback_game(&self, place_id: &str) -> Option<Game> {
        fallback::fallback_game(place_id)
    }
}

/// Batch cache key: place ids sorted and joined, so equal sets hit the same
/// entry regardless of request order.
fn batch_key(place_ids: &[String]) -> String {
    let mut keys: Vec<&str> = place_ids.iter().map(String::as_str).collect();
    keys.sort_unstable();
    format!("all:{}", keys.join(","))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::upstream::{GameDetails, VoteTotals};

    /// Scripted provider: resolves place ids to their numeric value and
    /// counts every call.
    #[derive(Default)]
    struct StubProvider {
        fail_universe_for: HashSet<String>,
        fail_details_for: HashSet<u64>,
        playing: u64,
        up_votes: u64,
        down_votes: u64,
        resolve_calls: AtomicUsize,
        details_calls: AtomicUsize,
        votes_calls: AtomicUsize,
        thumbnail_calls: AtomicUsize,
    }

    fn stub() -> StubProvider {
        StubProvider {
            playing: 120_000,
            up_votes: 80,
            down_votes: 20,
            ..Default::default()
        }
    }

    #[async_trait]
    impl MetadataProvider for StubProvider {
        async fn resolve_universe(&self, place_id: &str) -> Result<u64> {
            self.resolve_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_universe_for.contains(place_id) {
                return Err(ApiError::Upstream("scripted universe failure".to_string()));
            }
            place_id
                .parse()
                .map_err(|_| ApiError::Upstream("unparseable place id".to_string()))
        }

        async fn fetch_details(&self, universe_id: u64) -> Result<GameDetails> {
            self.details_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_details_for.contains(&universe_id) {
                return Err(ApiError::Upstream("scripted detail failure".to_string()));
            }
            Ok(GameDetails {
                id: universe_id,
                name: format!("Game {universe_id}"),
                description: Some("A scripted game for tests".to_string()),
                playing: self.playing,
                visits: 5_000_000,
                created: "2024-01-01T00:00:00Z".to_string(),
                updated: "2024-06-01T00:00:00Z".to_string(),
            })
        }

        async fn fetch_votes(&self, universe_id: u64) -> VoteTotals {
            self.votes_calls.fetch_add(1, Ordering::SeqCst);
            VoteTotals {
                id: universe_id,
                up_votes: self.up_votes,
                down_votes: self.down_votes,
            }
        }

        async fn fetch_thumbnail(&self, universe_id: u64) -> String {
            self.thumbnail_calls.fetch_add(1, Ordering::SeqCst);
            format!("https://cdn.example.com/{universe_id}.png")
        }
    }

    const KNOWN_ID: &str = "113494949872227";
    const OTHER_ID: &str = "124863958602381";

    fn service_with(provider: StubProvider) -> (GameService, Arc<StubProvider>, Arc<GameCaches>) {
        let provider = Arc::new(provider);
        let caches = Arc::new(GameCaches::new(&Config::default()));
        let service = GameService::new(
            Arc::clone(&provider) as Arc<dyn MetadataProvider>,
            Arc::clone(&caches),
        );
        (service, provider, caches)
    }

    #[test]
    fn test_rating_formula() {
        assert_eq!(calculate_rating(80, 20), 4.0);
        assert_eq!(calculate_rating(0, 0), 0.0);
        assert_eq!(calculate_rating(1, 0), 5.0);
        assert_eq!(calculate_rating(47, 3), 4.7);
        assert_eq!(calculate_rating(1, 2), 1.7);
    }

    #[tokio::test]
    async fn test_get_game_composes_record() {
        let (service, _, _) = service_with(stub());

        let game = service.get_game(KNOWN_ID).await.unwrap();

        assert_eq!(game.id, KNOWN_ID);
        assert_eq!(game.title, format!("Game {KNOWN_ID}"));
        assert_eq!(game.rating, 4.0);
        assert!(game.is_popular);
        assert_eq!(game.developer, DEVELOPER_NAME);
        assert_eq!(game.tags, vec!["roleplay", "social", "city", "jobs", "economy"]);
        assert_eq!(
            game.thumbnail,
            format!("https://cdn.example.com/{KNOWN_ID}.png")
        );
    }

    #[tokio::test]
    async fn test_popular_boundary() {
        let mut provider = stub();
        provider.playing = 100_000;
        let (service, _, _) = service_with(provider);
        assert!(service.get_game(KNOWN_ID).await.unwrap().is_popular);

        let mut provider = stub();
        provider.playing = 99_999;
        let (service, _, _) = service_with(provider);
        assert!(!service.get_game(KNOWN_ID).await.unwrap().is_popular);
    }

    #[tokio::test]
    async fn test_unknown_game_always_raises() {
        let (service, _, _) = service_with(stub());

        let result = service.get_game("does-not-exist").await;
        assert!(matches!(result, Err(ApiError::UnknownGame(_))));
    }

    #[tokio::test]
    async fn test_fallback_on_detail_failure_not_cached() {
        let mut provider = stub();
        provider
            .fail_details_for
            .insert(KNOWN_ID.parse().unwrap());
        let (service, _, caches) = service_with(provider);

        let game = service.get_game(KNOWN_ID).await.unwrap();

        // The static record is served instead of an error
        assert_eq!(game.title, "Mini City RP");

        // Only live compositions are cached; the fallback is not
        let cached = caches
            .games
            .write()
            .await
            .has(&format!("full:{KNOWN_ID}"));
        assert!(!cached);
    }

    #[tokio::test]
    async fn test_fallback_on_identity_failure() {
        let mut provider = stub();
        provider.fail_universe_for.insert(KNOWN_ID.to_string());
        let (service, _, _) = service_with(provider);

        let game = service.get_game(KNOWN_ID).await.unwrap();
        assert_eq!(game.title, "Mini City RP");
    }

    #[tokio::test]
    async fn test_get_game_served_from_cache() {
        let (service, provider, _) = service_with(stub());

        let first = service.get_game(KNOWN_ID).await.unwrap();
        let second = service.get_game(KNOWN_ID).await.unwrap();

        assert_eq!(first, second);
        // The second call never reached the provider
        assert_eq!(provider.resolve_calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.details_calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.votes_calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.thumbnail_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_partial_batch_success() {
        let mut provider = stub();
        provider
            .fail_details_for
            .insert(OTHER_ID.parse().unwrap());
        let (service, _, _) = service_with(provider);

        let place_ids = vec![
            KNOWN_ID.to_string(),
            OTHER_ID.to_string(),
            "does-not-exist".to_string(),
        ];
        let games = service.get_all_games(&place_ids).await;

        // Live record, fallback record, unknown id dropped
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].title, format!("Game {KNOWN_ID}"));
        assert_eq!(games[1].title, "Mini Shooters");
    }

    #[tokio::test]
    async fn test_batch_served_from_cache() {
        let (service, provider, _) = service_with(stub());
        let place_ids = vec![KNOWN_ID.to_string(), OTHER_ID.to_string()];

        let first = service.get_all_games(&place_ids).await;
        let second = service.get_all_games(&place_ids).await;

        assert_eq!(first, second);
        assert_eq!(provider.resolve_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fallback_lookup_is_pure() {
        let (service, provider, _) = service_with(stub());

        let game = service.fallback_game(KNOWN_ID).unwrap();
        assert_eq!(game.title, "Mini City RP");
        assert!(service.fallback_game("does-not-exist").is_none());

        // Pure table lookup, no provider involved
        assert_eq!(provider.resolve_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_batch_key_order_independent() {
        let (service, _, caches) = service_with(stub());

        let forward = vec![KNOWN_ID.to_string(), OTHER_ID.to_string()];
        let reverse = vec![OTHER_ID.to_string(), KNOWN_ID.to_string()];

        service.get_all_games(&forward).await;

        // Same set in another order maps to the same batch entry
        assert_eq!(caches.listings.write().await.stats().size, 1);
        service.get_all_games(&reverse).await;
        assert_eq!(caches.listings.write().await.stats().size, 1);
    }
}
