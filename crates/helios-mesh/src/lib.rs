//! Terrain face meshing: grid construction, triangulation, displaced-normal
//! recomputation, and the interleaved vertex format handed to a renderer.

mod error;
mod face_mesh;
mod normals;
mod terrain_face;
mod vertex;

pub use error::MeshError;
pub use face_mesh::FaceMesh;
pub use normals::recompute_normals;
pub use terrain_face::{TerrainFace, grid_sphere_point};
pub use vertex::MeshVertex;
