//! Application layer - Use cases and orchestration
//!
//! Holds the three resolvers (air quality, current weather, forecast) and the
//! ports they use to reach upstream providers. Each resolver decides locally
//! whether an unavailable upstream is replaced by fallback data or reported
//! to the caller.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
