//! Whole-planet mesh orchestration: six terrain faces, the face render mask,
//! and the rebuild lifecycle that feeds elevation data to the coloring
//! system.

mod builder;
mod error;
mod face_mask;

pub use builder::{PlanetBuilder, RebuildReport};
pub use error::PlanetError;
pub use face_mask::FaceRenderMask;
