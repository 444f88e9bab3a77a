//! Static Fallback Table
//!
//! Hand-authored last-known-good data per game, substituted when live
//! composition fails. Fallback records are rebuilt on every call and are
//! never written to the cache, so a recovered upstream is picked up on the
//! very next request.

use crate::games::catalog::{self, DEVELOPER_NAME, POPULAR_THRESHOLD};
use crate::models::Game;

// == Fallback Seed ==
/// Frozen metrics and copy for one game.
struct FallbackSeed {
    title: &'static str,
    description: &'static str,
    thumbnail: &'static str,
    players_online: u64,
    visits: u64,
    rating: f64,
    created_at: &'static str,
}

fn seed_for(place_id: &str) -> Option<FallbackSeed> {
    match place_id {
        "113494949872227" => Some(FallbackSeed {
            title: "Mini City RP",
            description: "💼 Trabalhe de Gari, Fazendeiro, Entregador, Médico, entre outros empregos. Você também pode ser Policial, e colocar ordem na cidade, ou seguir a vida do crime, e criar sua própria gangue para dominar a cidade.",
            thumbnail: "https://tr.rbxcdn.com/180DAY-31e03c5b3b13bc4b4bf82029914393d7/768/432/Image/Webp/noFilter",
            players_online: 450_000,
            visits: 3_200_000_000,
            rating: 4.8,
            created_at: "2025-05-11T00:00:00Z",
        }),
        "128160564290614" => Some(FallbackSeed {
            title: "Make A BrainRot",
            description: "Crie seu Brainrot e explore um mundo caótico e divertido com seus amigos!",
            thumbnail: "https://tr.rbxcdn.com/180DAY-e57ef39efc0654add0260badc5a415c0/768/432/Image/Webp/noFilter",
            players_online: 380_000,
            visits: 2_800_000_000,
            rating: 4.7,
            created_at: "2024-08-10T00:00:00Z",
        }),
        "124863958602381" => Some(FallbackSeed {
            title: "Mini Shooters",
            description: "Enter our intense and fast first-person shooter, where skill, style and chaos reign!",
            thumbnail: "https://tr.rbxcdn.com/180DAY-fd26469cf96029dcc251c6c7e50072ed/768/432/Image/Webp/noFilter",
            players_online: 320_000,
            visits: 2_500_000_000,
            rating: 4.6,
            created_at: "2024-11-15T00:00:00Z",
        }),
        _ => None,
    }
}

// == Fallback Game ==
/// Builds the fallback record for a place id.
///
/// Merges the frozen seed with the catalog's category and tags. Returns None
/// when the place id has no catalog entry or no seed.
pub fn fallback_game(place_id: &str) -> Option<Game> {
    let config = catalog::config_for(place_id)?;
    let seed = seed_for(place_id)?;

    Some(Game {
        id: place_id.to_string(),
        title: seed.title.to_string(),
        description: seed.description.to_string(),
        thumbnail: seed.thumbnail.to_string(),
        category: config.category,
        players_online: seed.players_online,
        visits: seed.visits,
        rating: seed.rating,
        is_popular: seed.players_online >= POPULAR_THRESHOLD,
        created_at: seed.created_at.to_string(),
        last_updated: chrono::Utc::now().to_rfc3339(),
        tags: config.tags.iter().map(|tag| tag.to_string()).collect(),
        developer: DEVELOPER_NAME.to_string(),
        featured: true,
        url: catalog::game_url(place_id),
    })
}
