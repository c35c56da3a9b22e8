//! Noise configuration error types.

/// Errors produced when validating noise parameters.
///
/// All variants are configuration errors: they are raised eagerly when a
/// filter or stack is built, never in the middle of an evaluation pass.
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    /// A filter needs at least one octave to produce output.
    #[error("noise filter needs at least one octave")]
    ZeroOctaves,

    /// Octave frequency scaling must grow from a positive base.
    #[error("base roughness must be positive, got {0}")]
    NonPositiveBaseRoughness(f64),

    /// A zero or negative per-octave frequency multiplier never converges.
    #[error("roughness must be positive, got {0}")]
    NonPositiveRoughness(f64),

    /// A layer inside a stack failed validation.
    #[error("noise layer {index} is invalid")]
    Layer {
        /// Position of the offending layer in configuration order.
        index: usize,
        /// The underlying parameter error.
        #[source]
        source: Box<NoiseError>,
    },
}
