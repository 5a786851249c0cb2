//! Geography lookup module for the location stage

mod client;
mod traits;

pub use client::{GeoClient, GeoError, RegionOption, DEFAULT_COUNTRY};

#[cfg(test)]
pub use traits::MockGeoClientTrait;
pub use traits::GeoClientTrait;
