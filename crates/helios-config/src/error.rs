//! Configuration error types.

use helios_nbody::NBodyError;
use helios_noise::NoiseError;

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// The face grid resolution is below the 2×2 minimum.
    #[error("planet resolution must be at least 2, got {0}")]
    ResolutionTooSmall(u32),

    /// The planet radius must be positive and finite.
    #[error("planet radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// A noise layer carries invalid parameters.
    #[error("invalid noise configuration")]
    Noise(#[from] NoiseError),

    /// The body or simulation configuration is invalid.
    #[error("invalid simulation configuration")]
    Simulation(#[from] NBodyError),
}
