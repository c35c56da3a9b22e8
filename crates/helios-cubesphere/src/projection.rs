//! Cube-to-sphere projection.
//!
//! A [`FaceCoord`] maps to a point on the surface of the `[-1, 1]` cube,
//! which is then radially normalized onto the unit sphere. The planet
//! surface keeps the radial direction of the cube point, so every terrain
//! vertex lies along the ray from the center through its cube projection.

use glam::DVec3;

use crate::FaceCoord;

/// Convert a [`FaceCoord`] to a point on the surface of the `[-1, 1]` cube.
///
/// The face center `(0.5, 0.5)` maps to the face normal.
#[inline]
#[must_use]
pub fn face_coord_to_cube_point(fc: &FaceCoord) -> DVec3 {
    // Remap u, v from [0, 1] to [-1, 1].
    let s = 2.0 * fc.u - 1.0;
    let t = 2.0 * fc.v - 1.0;

    fc.face.normal() + s * fc.face.tangent() + t * fc.face.bitangent()
}

/// Radially project a cube-surface point onto the unit sphere.
///
/// Every point on the cube surface has length ≥ 1 (one component is ±1),
/// so the normalization never sees a zero vector.
#[inline]
#[must_use]
pub fn cube_point_to_sphere(cube_point: DVec3) -> DVec3 {
    cube_point.normalize()
}

/// Convenience: [`FaceCoord`] → unit sphere.
#[inline]
#[must_use]
pub fn face_coord_to_sphere(fc: &FaceCoord) -> DVec3 {
    cube_point_to_sphere(face_coord_to_cube_point(fc))
}
