//! Face-local 2D coordinates on a cube face.

use crate::CubeFace;

/// A position on one cube face, with `u` and `v` in `[0, 1]`.
///
/// `(0.5, 0.5)` is the face center; the corners are the cube corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// The cube face this coordinate lies on.
    pub face: CubeFace,
    /// Coordinate along the face tangent, in `[0, 1]`.
    pub u: f64,
    /// Coordinate along the face bitangent, in `[0, 1]`.
    pub v: f64,
}

impl FaceCoord {
    /// Create a face coordinate from explicit `u`, `v`.
    #[must_use]
    pub fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self { face, u, v }
    }

    /// Coordinate of grid cell `(x, y)` on a `resolution × resolution`
    /// vertex grid, so the grid's border rows land exactly on the face edges.
    ///
    /// `resolution` must be at least 2; the caller validates that.
    #[must_use]
    pub fn from_grid(face: CubeFace, x: u32, y: u32, resolution: u32) -> Self {
        let denom = f64::from(resolution - 1);
        Self {
            face,
            u: f64::from(x) / denom,
            v: f64::from(y) / denom,
        }
    }
}
