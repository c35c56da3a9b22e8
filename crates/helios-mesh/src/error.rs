//! Meshing error types.

/// Errors raised when configuring face mesh construction.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// A face needs at least a 2×2 vertex grid to form one quad.
    #[error("face resolution must be at least 2, got {0}")]
    ResolutionTooSmall(u32),
}
