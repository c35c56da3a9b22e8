//! Planet rebuild error types.

use helios_mesh::MeshError;
use helios_terrain::TerrainError;

/// Errors raised by a planet rebuild.
///
/// All variants are configuration errors detected before any face is built;
/// a failing rebuild leaves the previously committed geometry untouched.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// Face meshing configuration was invalid.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Surface shaping configuration was invalid.
    #[error(transparent)]
    Terrain(#[from] TerrainError),
}
