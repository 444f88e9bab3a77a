//! API Handlers
//!
//! HTTP request handlers for each games API endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::cache::CacheStats;
use crate::config::Config;
use crate::email::EmailService;
use crate::error::{ApiError, Result};
use crate::games::{catalog, GameCaches, GameService};
use crate::models::{
    ApiResponse, ContactHealthResponse, ContactRequest, ContactResponse, Game, HealthResponse,
};
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The aggregation service
    pub service: Arc<GameService>,
    /// Contact email delivery
    pub email: Arc<EmailService>,
    /// Shared cache set, exposed for the stats endpoint
    pub caches: Arc<GameCaches>,
}

impl AppState {
    /// Creates a new AppState from already-composed parts.
    pub fn new(service: GameService, email: EmailService, caches: Arc<GameCaches>) -> Self {
        Self {
            service: Arc::new(service),
            email: Arc::new(email),
            caches,
        }
    }

    /// Composes the full application from configuration: cache set, upstream
    /// client, aggregation service and email service.
    pub fn from_config(config: &Config) -> Result<Self> {
        let caches = Arc::new(GameCaches::new(config));
        let provider = Arc::new(UpstreamClient::new(config, Arc::clone(&caches))?);
        let service = GameService::new(provider, Arc::clone(&caches));
        let email = EmailService::new(config)?;
        Ok(Self::new(service, email, caches))
    }
}

/// Handler for GET /
///
/// Service banner with the available endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Mini Groups API - game metadata backend",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "games": "/api/games",
            "gameById": "/api/games/:placeId",
            "stats": "/api/stats",
            "contact": "/api/contact",
            "contactHealth": "/api/contact/health",
            "health": "/api/health"
        }
    }))
}

/// Handler for GET /health and GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::online())
}

/// Handler for GET /api/games
///
/// Returns every catalog game. Individual failures are absorbed by the
/// aggregator (fallback or silent drop), so this endpoint always answers 200
/// with whatever records could be produced.
pub async fn list_games_handler(State(state): State<AppState>) -> Json<ApiResponse<Vec<Game>>> {
    let games = state.service.get_all_games(&catalog::all_place_ids()).await;
    Json(ApiResponse::ok(games))
}

/// Handler for GET /api/games/:place_id
///
/// Returns one game. An unknown place id is 404; an upstream failure with no
/// surviving fallback is a gateway error.
pub async fn get_game_handler(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<Game>>> {
    let game = state.service.get_game(&place_id).await?;
    Ok(Json(ApiResponse::ok(game)))
}

/// Handler for GET /api/stats
///
/// Merged snapshot of the unexpired cache keys across all namespaces.
pub async fn stats_handler(State(state): State<AppState>) -> Json<ApiResponse<CacheStats>> {
    let stats = state.caches.stats().await;
    Json(ApiResponse::ok(stats))
}

/// Handler for POST /api/contact
///
/// Validates the submission, then forwards it through the email service.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ApiResponse<ContactResponse>>> {
    if let Some(error_msg) = req.validate() {
        warn!("Contact form validation failed: {error_msg}");
        return Err(ApiError::InvalidRequest(error_msg));
    }

    if !state.email.is_configured() {
        return Err(ApiError::EmailNotConfigured);
    }

    state.email.send_contact(&req).await?;

    Ok(Json(ApiResponse::ok(ContactResponse::sent())))
}

/// Handler for GET /api/contact/health
pub async fn contact_health_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<ContactHealthResponse>> {
    Json(ApiResponse::ok(ContactHealthResponse::new(
        state.email.is_configured(),
    )))
}
