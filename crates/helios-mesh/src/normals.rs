//! Normal recomputation over displaced geometry.

use glam::DVec3;
use tracing::warn;

/// Recompute per-vertex normals from final (displaced) triangle geometry.
///
/// Accumulates each triangle's cross-product normal onto its three corners —
/// the unnormalized cross product weights large triangles more, which is the
/// usual smooth-shading behavior — then normalizes per vertex. Normals must
/// come from the displaced surface, not the smooth sphere, so lighting picks
/// up the terrain relief.
///
/// A vertex whose accumulated normal degenerates to zero (mirrored triangle
/// fans from pathological displacement) falls back to its radial direction;
/// the fallback count is logged rather than failing the build.
#[must_use]
pub fn recompute_normals(positions: &[DVec3], indices: &[u32]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face_normal =
            (positions[i1] - positions[i0]).cross(positions[i2] - positions[i0]);
        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    let mut fallbacks = 0u32;
    for (normal, position) in normals.iter_mut().zip(positions) {
        let n = normal.normalize_or_zero();
        *normal = if n == DVec3::ZERO {
            fallbacks += 1;
            position.normalize_or(DVec3::Y)
        } else {
            n
        };
    }
    if fallbacks > 0 {
        warn!(fallbacks, "degenerate vertex normals replaced by radial direction");
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_quad_normals_point_up() {
        // One quad in the XZ plane, counter-clockwise seen from +Y.
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
        ];
        let indices = vec![0, 1, 3, 0, 3, 2];
        let normals = recompute_normals(&positions, &indices);
        for (i, n) in normals.iter().enumerate() {
            assert!(
                (*n - DVec3::Y).length() < 1e-12,
                "vertex {i} normal should be +Y, got {n:?}"
            );
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        // A small tent: two triangles folded along the ridge x = 0.5.
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.5, 0.5, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(0.5, 0.5, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
        ];
        let indices = vec![0, 1, 4, 0, 4, 3, 1, 2, 5, 1, 5, 4];
        let normals = recompute_normals(&positions, &indices);
        for (i, n) in normals.iter().enumerate() {
            assert!(
                (n.length() - 1.0).abs() < 1e-12,
                "vertex {i} normal not unit length: {}",
                n.length()
            );
        }
    }

    #[test]
    fn test_unreferenced_vertex_falls_back_to_radial_direction() {
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 5.0), // not referenced by any triangle
        ];
        let indices = vec![0, 1, 2];
        let normals = recompute_normals(&positions, &indices);
        assert!(
            (normals[3] - DVec3::Z).length() < 1e-12,
            "unreferenced vertex should use its radial direction, got {:?}",
            normals[3]
        );
    }

    #[test]
    fn test_ridge_vertices_blend_adjacent_faces() {
        // Ridge of the tent from above: the smoothed normal must sit between
        // the two slope normals (mostly up), not equal either face normal.
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.5, 0.5, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(0.5, 0.5, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
        ];
        let indices = vec![0, 1, 4, 0, 4, 3, 1, 2, 5, 1, 5, 4];
        let normals = recompute_normals(&positions, &indices);

        let ridge = normals[1];
        let left_slope = DVec3::new(-0.5, 0.5, 0.0).normalize();
        let right_slope = DVec3::new(0.5, 0.5, 0.0).normalize();
        assert!(
            ridge.y > left_slope.y,
            "ridge normal should be more upright than either slope: {ridge:?}"
        );
        assert!(
            (ridge - left_slope).length() > 1e-3 && (ridge - right_slope).length() > 1e-3,
            "ridge normal must blend, not copy, a face normal"
        );
    }
}
