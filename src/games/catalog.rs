//! Game Catalog
//!
//! Static configuration for the studio's published games: place ids,
//! categories and tags. This is configuration, not fallback data - a place id
//! absent from the catalog is unknown to the API.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::GameCategory;

// == Public Constants ==
/// Studio name attached to every record
pub const DEVELOPER_NAME: &str = "Mini Groups Studio";

/// A game with at least this many active players counts as popular
pub const POPULAR_THRESHOLD: u64 = 100_000;

/// Place ids of the published games, in display order
pub const GAME_PLACE_IDS: [&str; 3] = [
    "113494949872227",
    "128160564290614",
    "124863958602381",
];

// == Game Config ==
/// Static catalog entry for one game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub place_id: &'static str,
    pub category: GameCategory,
    pub tags: &'static [&'static str],
}

static GAMES_CONFIG: Lazy<HashMap<&'static str, GameConfig>> = Lazy::new(|| {
    [
        GameConfig {
            place_id: "113494949872227",
            category: GameCategory::Rp,
            tags: &["roleplay", "social", "city", "jobs", "economy"],
        },
        GameConfig {
            place_id: "128160564290614",
            category: GameCategory::Casual,
            tags: &["meme", "casual", "fun", "creative", "brainrot"],
        },
        GameConfig {
            place_id: "124863958602381",
            category: GameCategory::Action,
            tags: &["shooter", "fps", "action", "combat", "competitive"],
        },
    ]
    .into_iter()
    .map(|config| (config.place_id, config))
    .collect()
});

/// Looks up the catalog entry for a place id.
pub fn config_for(place_id: &str) -> Option<&'static GameConfig> {
    GAMES_CONFIG.get(place_id)
}

/// Place ids of every published game, in display order.
pub fn all_place_ids() -> Vec<String> {
    GAME_PLACE_IDS.iter().map(|id| id.to_string()).collect()
}

/// Public page URL for a place id.
pub fn game_url(place_id: &str) -> String {
    format!("https://www.roblox.com/games/{place_id}")
}
