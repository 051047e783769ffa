//! HTTP middleware components

pub mod no_cache;

pub use no_cache::{NoCache, NoCacheLayer};
