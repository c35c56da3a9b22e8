//! Construction of one displaced cube face.

use glam::{DVec2, DVec3};
use helios_cubesphere::{CubeFace, FaceCoord, face_coord_to_sphere};
use helios_terrain::{BiomeSampler, ElevationRange, ShapeGenerator};
use tracing::debug;

use crate::{FaceMesh, MeshError, recompute_normals};

/// Builds the mesh for one cube face of the planet.
///
/// Construction walks a `resolution × resolution` vertex grid over the face,
/// projects each grid point to the unit sphere, and displaces it through the
/// [`ShapeGenerator`]. Triangulation and vertex order are fixed (row-major,
/// `index = x + y * resolution`), so rebuilding with identical configuration
/// reproduces the geometry bit for bit.
pub struct TerrainFace {
    face: CubeFace,
    resolution: u32,
}

impl TerrainFace {
    /// Create a face builder. Rejects `resolution < 2`: a valid face needs
    /// at least one quad.
    pub fn new(face: CubeFace, resolution: u32) -> Result<Self, MeshError> {
        if resolution < 2 {
            return Err(MeshError::ResolutionTooSmall(resolution));
        }
        Ok(Self { face, resolution })
    }

    /// Which cube face this builder constructs.
    #[must_use]
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// The vertex grid resolution.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Build the displaced mesh for this face.
    ///
    /// Produces exactly `resolution²` vertices and
    /// `2 * (resolution - 1)²` triangles. Elevations are recorded into the
    /// shared accumulator; normals are recomputed from the displaced
    /// triangles afterwards, and UVs (biome index in `uv.x`) are assigned
    /// after displacement.
    pub fn construct(
        &self,
        shape: &ShapeGenerator,
        biome: Option<&BiomeSampler>,
        range: &mut ElevationRange,
    ) -> FaceMesh {
        let res = self.resolution;
        let vertex_count = (res as usize) * (res as usize);
        let quad_count = ((res - 1) as usize) * ((res - 1) as usize);

        let mut sphere_points = Vec::with_capacity(vertex_count);
        let mut positions = Vec::with_capacity(vertex_count);
        let mut indices = Vec::with_capacity(quad_count * 6);

        for y in 0..res {
            for x in 0..res {
                let fc = FaceCoord::from_grid(self.face, x, y, res);
                let point_on_sphere = face_coord_to_sphere(&fc);
                sphere_points.push(point_on_sphere);
                positions.push(shape.displace(point_on_sphere, range));

                // Two triangles per quad, wound so they face outward.
                if x != res - 1 && y != res - 1 {
                    let i = x + y * res;
                    indices.extend_from_slice(&[
                        i,
                        i + res + 1,
                        i + res,
                        i,
                        i + 1,
                        i + res + 1,
                    ]);
                }
            }
        }

        let normals = recompute_normals(&positions, &indices);
        let uvs: Vec<DVec2> = sphere_points
            .iter()
            .map(|p| {
                let index = biome.map_or(0.0, |b| b.biome_percent(*p));
                DVec2::new(index, 0.0)
            })
            .collect();

        debug!(
            face = ?self.face,
            vertices = vertex_count,
            triangles = quad_count * 2,
            "constructed terrain face"
        );

        FaceMesh {
            positions,
            normals,
            uvs,
            indices,
        }
    }
}

/// Convenience used by tests and tools: the unit-sphere direction of a grid
/// vertex, without displacement.
#[must_use]
pub fn grid_sphere_point(face: CubeFace, x: u32, y: u32, resolution: u32) -> DVec3 {
    face_coord_to_sphere(&FaceCoord::from_grid(face, x, y, resolution))
}
