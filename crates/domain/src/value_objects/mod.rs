//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod pollutant;

pub use coordinate::Coordinate;
pub use pollutant::Pollutant;
