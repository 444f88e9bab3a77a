//! Game Record Model
//!
//! The denormalized game record served to the frontend, composed from the
//! static catalog and three upstream metadata calls.

use serde::{Deserialize, Serialize};

// == Game Category ==
/// Catalog category of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCategory {
    Action,
    Casual,
    #[serde(rename = "RP")]
    Rp,
}

// == Game ==
/// Fully-composed game record.
///
/// Built on cache miss from identity resolution, detail, votes and thumbnail
/// data; replaced wholesale on recomputation, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Public place id the frontend addresses the game by
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub category: GameCategory,
    /// Currently-active player count
    pub players_online: u64,
    /// All-time visit count
    pub visits: u64,
    /// Star rating derived from the vote signal, one decimal place
    pub rating: f64,
    pub is_popular: bool,
    pub created_at: String,
    pub last_updated: String,
    pub tags: Vec<String>,
    pub developer: String,
    pub featured: bool,
    pub url: String,
}
