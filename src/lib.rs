//! Games API - backend for the Mini Groups marketing site
//!
//! Aggregates public game-platform metadata behind a TTL cache with a static
//! fallback table, and forwards contact submissions to an email provider.

pub mod api;
pub mod cache;
pub mod config;
pub mod email;
pub mod error;
pub mod games;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{ApiError, Result};
pub use games::{GameCaches, GameService};
