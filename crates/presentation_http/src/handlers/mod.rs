//! HTTP request handlers

pub mod air_quality;
pub mod common;
pub mod forecast;
pub mod health;
pub mod weather;
