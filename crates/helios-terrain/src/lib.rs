//! Planet surface shaping: vertex displacement along the sphere normal,
//! elevation range tracking, and the biome-index math used for mesh UVs.

mod biome;
mod elevation;
mod error;
mod shape;

pub use biome::{BiomeBand, BiomeSampler, BiomeSettings};
pub use elevation::ElevationRange;
pub use error::TerrainError;
pub use shape::ShapeGenerator;
