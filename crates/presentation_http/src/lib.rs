//! ChronoSort HTTP presentation layer
//!
//! This crate provides the HTTP API for ChronoSort.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
