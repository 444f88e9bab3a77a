//! Games Module
//!
//! The game domain: static catalog, fallback table and the cache-aside
//! aggregation service composing upstream metadata into `Game` records.

pub mod catalog;
pub mod fallback;
pub mod service;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, TtlCache};
use crate::config::Config;
use crate::models::Game;
use crate::upstream::{GameDetails, VoteTotals};

pub use service::{calculate_rating, GameService};

// == Game Caches ==
/// The per-namespace cache set shared by the gateway and the aggregator.
///
/// Each namespace keeps its own value type; all instances share the
/// configured default TTL, while near-static namespaces are written with the
/// long TTL at the call site. Built once by the composition root and
/// injected, never a global.
#[derive(Debug)]
pub struct GameCaches {
    /// `universe:<place_id>` → universe id
    pub universe: RwLock<TtlCache<u64>>,
    /// `details:<universe_id>` → detail record
    pub details: RwLock<TtlCache<GameDetails>>,
    /// `votes:<universe_id>` → vote totals
    pub votes: RwLock<TtlCache<VoteTotals>>,
    /// `thumbnail:<universe_id>` → icon URL
    pub thumbnails: RwLock<TtlCache<String>>,
    /// `full:<place_id>` → composed record
    pub games: RwLock<TtlCache<Game>>,
    /// `all:<sorted place ids>` → composed batch
    pub listings: RwLock<TtlCache<Vec<Game>>>,
}

impl GameCaches {
    /// Creates the cache set with the configured default TTL.
    pub fn new(config: &Config) -> Self {
        Self {
            universe: RwLock::new(TtlCache::new(config.default_ttl)),
            details: RwLock::new(TtlCache::new(config.default_ttl)),
            votes: RwLock::new(TtlCache::new(config.default_ttl)),
            thumbnails: RwLock::new(TtlCache::new(config.default_ttl)),
            games: RwLock::new(TtlCache::new(config.default_ttl)),
            listings: RwLock::new(TtlCache::new(config.default_ttl)),
        }
    }

    /// Merged snapshot of the unexpired keys across every namespace.
    pub async fn stats(&self) -> CacheStats {
        let mut stats = self.universe.write().await.stats();
        stats.merge(self.details.write().await.stats());
        stats.merge(self.votes.write().await.stats());
        stats.merge(self.thumbnails.write().await.stats());
        stats.merge(self.games.write().await.stats());
        stats.merge(self.listings.write().await.stats());
        stats
    }
}
