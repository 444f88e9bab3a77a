//! Request and Response models for the games API
//!
//! This module defines the domain record plus the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response
//! bodies.

pub mod game;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use game::{Game, GameCategory};
pub use requests::ContactRequest;
pub use responses::{ApiResponse, ContactHealthResponse, ContactResponse, HealthResponse};
