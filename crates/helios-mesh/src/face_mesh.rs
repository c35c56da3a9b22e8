//! Mesh data for one constructed cube face.

use glam::{DVec2, DVec3};

use crate::MeshVertex;

/// Vertex and index data for one face of the planet.
///
/// Positions, normals, and UVs are kept in `f64` while the mesh is built and
/// post-processed; [`FaceMesh::render_vertices`] produces the interleaved
/// `f32` form a renderer consumes. The whole struct is rebuilt from scratch
/// on every regeneration — there is no incremental update path.
#[derive(Clone, Debug, Default)]
pub struct FaceMesh {
    /// Displaced vertex positions, row-major (`index = x + y * resolution`).
    pub positions: Vec<DVec3>,
    /// Per-vertex normals of the displaced surface.
    pub normals: Vec<DVec3>,
    /// Per-vertex UVs; `x` carries the biome index.
    pub uvs: Vec<DVec2>,
    /// Triangle indices, three per triangle, outward winding.
    pub indices: Vec<u32>,
}

impl FaceMesh {
    /// Number of vertices in the face grid.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave the mesh into renderer-ready vertices.
    #[must_use]
    pub fn render_vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| MeshVertex {
                position: position.as_vec3().to_array(),
                normal: normal.as_vec3().to_array(),
                uv: uv.as_vec2().to_array(),
            })
            .collect()
    }
}
