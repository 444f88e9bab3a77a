//! API Module
//!
//! HTTP handlers and routing for the games API.
//!
//! # Endpoints
//! - `GET /` - Service banner
//! - `GET /health`, `GET /api/health` - Health check
//! - `GET /api/games` - List all catalog games
//! - `GET /api/games/:place_id` - Retrieve one game
//! - `GET /api/stats` - Cache statistics
//! - `POST /api/contact` - Submit the contact form
//! - `GET /api/contact/health` - Email service status

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
