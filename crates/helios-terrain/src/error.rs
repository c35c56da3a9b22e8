//! Terrain configuration error types.

use helios_noise::NoiseError;

/// Errors raised when building the surface shaping pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The planet radius must be a positive, finite length.
    #[error("planet radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// A noise layer failed validation.
    #[error(transparent)]
    Noise(#[from] NoiseError),
}
