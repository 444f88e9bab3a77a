//! Upstream Response Types
//!
//! Deserialization targets for the game-platform endpoints. Field names
//! follow the platform's wire format.

use serde::Deserialize;

// == Universe Resolution ==
/// Response of the place-to-universe resolution endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseResponse {
    pub universe_id: u64,
}

// == Game Details ==
/// Envelope of the games endpoint (batched by universe id).
#[derive(Debug, Clone, Deserialize)]
pub struct GamesListResponse {
    pub data: Vec<GameDetails>,
}

/// Per-game detail record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Currently-active player count
    pub playing: u64,
    /// All-time visit count
    pub visits: u64,
    pub created: String,
    pub updated: String,
}

// == Votes ==
/// Envelope of the votes endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VotesListResponse {
    pub data: Vec<VoteTotals>,
}

/// Approval/disapproval counts for one universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTotals {
    pub id: u64,
    pub up_votes: u64,
    pub down_votes: u64,
}

impl VoteTotals {
    /// Neutral totals substituted when the vote lookup fails.
    pub fn zeroed(universe_id: u64) -> Self {
        Self {
            id: universe_id,
            up_votes: 0,
            down_votes: 0,
        }
    }
}

// == Thumbnails ==
/// Envelope of the thumbnails endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailsListResponse {
    pub data: Vec<ThumbnailInfo>,
}

/// Asset-processing record for one universe icon.
///
/// `image_url` is only present once `state` is `"Completed"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailInfo {
    pub target_id: u64,
    pub state: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
