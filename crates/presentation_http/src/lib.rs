//! CleanSky HTTP presentation layer
//!
//! This crate provides the HTTP API consumed by the CleanSky frontend.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::NoCacheLayer;
pub use routes::create_router;
pub use state::AppState;
