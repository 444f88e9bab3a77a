//! API Routes
//!
//! Configures the Axum router with all games API endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    contact_handler, contact_health_handler, get_game_handler, health_handler, index_handler,
    list_games_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Service banner
/// - `GET /health`, `GET /api/health` - Health check
/// - `GET /api/games` - List all catalog games
/// - `GET /api/games/:place_id` - Retrieve one game
/// - `GET /api/stats` - Cache statistics
/// - `POST /api/contact` - Submit the contact form
/// - `GET /api/contact/health` - Email service status
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        .route("/api/games", get(list_games_handler))
        .route("/api/games/:place_id", get(get_game_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/contact/health", get(contact_health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
