//! Domain layer for CleanSky
//!
//! Contains the per-request value types the aggregator hands back to clients:
//! coordinates, pollutant readings, station reports, weather snapshots and
//! forecast series. Nothing in here is persisted or performs I/O.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
