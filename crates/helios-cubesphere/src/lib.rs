//! Cube-sphere geometry: the six cube faces, face-local coordinates, and the
//! cube-to-sphere projection used for planet surface construction.

mod cube_face;
mod face_coord;
mod projection;

pub use cube_face::CubeFace;
pub use face_coord::FaceCoord;
pub use projection::{cube_point_to_sphere, face_coord_to_cube_point, face_coord_to_sphere};
