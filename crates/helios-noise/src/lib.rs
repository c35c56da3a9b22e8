//! Layered fractal noise for planet terrain.
//!
//! A [`NoiseFilter`] turns a point on the unit sphere into a scalar height
//! contribution by compositing octaves of simplex noise; a [`NoiseStack`]
//! combines an ordered list of filters, with the first enabled layer usable
//! as a mask that gates later layers (continents gating mountain ranges).

mod error;
mod filter;
mod stack;

pub use error::NoiseError;
pub use filter::{FilterKind, NoiseFilter, NoiseParams};
pub use stack::{NoiseLayer, NoiseStack};
