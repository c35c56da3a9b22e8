//! Six-face planet construction and regeneration.

use helios_cubesphere::CubeFace;
use helios_mesh::{FaceMesh, TerrainFace};
use helios_noise::NoiseLayer;
use helios_terrain::{BiomeSampler, ElevationRange, ShapeGenerator};
use tracing::info;

use crate::{FaceRenderMask, PlanetError};

/// Summary of one completed rebuild, for logging and for the external
/// coloring system (which consumes the elevation range).
#[derive(Clone, Copy, Debug)]
pub struct RebuildReport {
    /// Elevation min/max over every generated vertex, plus the count of
    /// non-finite elevations that were replaced by the safe fallback.
    pub elevation: ElevationRange,
    /// Total vertices across all built faces.
    pub vertex_count: usize,
    /// Total triangles across all built faces.
    pub triangle_count: usize,
    /// How many faces the render mask selected.
    pub faces_built: usize,
}

/// Owns the six face meshes of a planet and their regeneration lifecycle.
///
/// Regeneration is always a full rebuild: every selected face is
/// reconstructed from scratch and the elevation range is re-accumulated.
/// Rebuilding twice with unchanged settings produces bit-identical
/// geometry. Configuration is validated eagerly, and a failed rebuild
/// leaves the previously committed faces and elevation range untouched.
pub struct PlanetBuilder {
    resolution: u32,
    radius: f64,
    layers: Vec<NoiseLayer>,
    biome: Option<BiomeSampler>,
    mask: FaceRenderMask,
    faces: [Option<FaceMesh>; 6],
    elevation: ElevationRange,
    rebuild_requested: bool,
}

impl PlanetBuilder {
    /// Create a builder. Nothing is validated or constructed until
    /// [`PlanetBuilder::rebuild`] runs.
    #[must_use]
    pub fn new(resolution: u32, radius: f64, layers: Vec<NoiseLayer>) -> Self {
        Self {
            resolution,
            radius,
            layers,
            biome: None,
            mask: FaceRenderMask::All,
            faces: [None, None, None, None, None, None],
            elevation: ElevationRange::new(),
            rebuild_requested: false,
        }
    }

    /// Attach a biome sampler used for per-vertex UV assignment.
    #[must_use]
    pub fn with_biome(mut self, biome: BiomeSampler) -> Self {
        self.biome = Some(biome);
        self
    }

    /// Restrict which faces are built.
    #[must_use]
    pub fn with_face_mask(mut self, mask: FaceRenderMask) -> Self {
        self.mask = mask;
        self
    }

    /// Rebuild all faces selected by the render mask.
    ///
    /// Validation happens before any state changes: an error from a bad
    /// resolution or bad noise parameters is returned with the previous
    /// geometry still in place. On success the new faces and elevation range
    /// replace the old ones atomically and the report is returned.
    pub fn rebuild(&mut self) -> Result<RebuildReport, PlanetError> {
        // Validate everything up front. TerrainFace checks the resolution,
        // ShapeGenerator checks the radius and every enabled noise layer.
        let shape = ShapeGenerator::new(self.radius, &self.layers)?;
        let mut face_builders = Vec::with_capacity(6);
        for face in CubeFace::ALL {
            if self.mask.includes(face) {
                face_builders.push(TerrainFace::new(face, self.resolution)?);
            }
        }

        // Build into fresh storage; commit only when the whole pass is done.
        let mut range = ElevationRange::new();
        let mut faces: [Option<FaceMesh>; 6] = [None, None, None, None, None, None];
        for builder in &face_builders {
            let mesh = builder.construct(&shape, self.biome.as_ref(), &mut range);
            faces[builder.face().index()] = Some(mesh);
        }

        self.faces = faces;
        self.elevation = range;
        self.rebuild_requested = false;

        let report = RebuildReport {
            elevation: self.elevation,
            vertex_count: self.built_faces().map(FaceMesh::vertex_count).sum(),
            triangle_count: self.built_faces().map(FaceMesh::triangle_count).sum(),
            faces_built: face_builders.len(),
        };
        info!(
            faces = report.faces_built,
            vertices = report.vertex_count,
            triangles = report.triangle_count,
            elevation_min = report.elevation.min(),
            elevation_max = report.elevation.max(),
            "planet rebuilt"
        );
        Ok(report)
    }

    /// Flag that settings changed and the next
    /// [`PlanetBuilder::rebuild_if_requested`] should regenerate.
    ///
    /// The editor/UI layer calls this explicitly after mutating settings;
    /// there is no implicit change broadcast.
    pub fn mark_settings_changed(&mut self) {
        self.rebuild_requested = true;
    }

    /// Rebuild only if a settings change was flagged since the last rebuild.
    pub fn rebuild_if_requested(&mut self) -> Result<Option<RebuildReport>, PlanetError> {
        if self.rebuild_requested {
            self.rebuild().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Replace the vertex grid resolution and flag a rebuild.
    pub fn set_resolution(&mut self, resolution: u32) {
        self.resolution = resolution;
        self.mark_settings_changed();
    }

    /// Replace the planet radius and flag a rebuild.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.mark_settings_changed();
    }

    /// Replace the noise layer configuration and flag a rebuild.
    pub fn set_noise_layers(&mut self, layers: Vec<NoiseLayer>) {
        self.layers = layers;
        self.mark_settings_changed();
    }

    /// Replace the face render mask and flag a rebuild.
    pub fn set_face_mask(&mut self, mask: FaceRenderMask) {
        self.mask = mask;
        self.mark_settings_changed();
    }

    /// The mesh for one face, if the last rebuild constructed it.
    #[must_use]
    pub fn face(&self, face: CubeFace) -> Option<&FaceMesh> {
        self.faces[face.index()].as_ref()
    }

    /// All faces built by the last rebuild, in canonical face order.
    pub fn built_faces(&self) -> impl Iterator<Item = &FaceMesh> {
        self.faces.iter().filter_map(Option::as_ref)
    }

    /// Elevation range accumulated by the last successful rebuild.
    #[must_use]
    pub fn elevation_range(&self) -> &ElevationRange {
        &self.elevation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helios_noise::NoiseParams;

    fn test_layers(seed: u32) -> Vec<NoiseLayer> {
        vec![
            NoiseLayer {
                params: NoiseParams {
                    seed,
                    num_layers: 3,
                    strength: 0.15,
                    ..Default::default()
                },
                ..Default::default()
            },
            NoiseLayer {
                use_first_layer_as_mask: true,
                params: NoiseParams {
                    seed: seed.wrapping_add(1),
                    num_layers: 2,
                    strength: 0.4,
                    base_roughness: 1.6,
                    ..Default::default()
                },
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_rebuild_constructs_all_six_faces() {
        let mut builder = PlanetBuilder::new(8, 1.0, test_layers(42));
        let report = builder.rebuild().expect("rebuild succeeds");

        assert_eq!(report.faces_built, 6);
        assert_eq!(report.vertex_count, 6 * 8 * 8);
        assert_eq!(report.triangle_count, 6 * 2 * 7 * 7);
        for face in CubeFace::ALL {
            assert!(builder.face(face).is_some(), "face {face:?} missing");
        }
    }

    #[test]
    fn test_rebuild_twice_is_bit_identical() {
        let mut builder = PlanetBuilder::new(10, 3.0, test_layers(7));
        builder.rebuild().expect("first rebuild");
        let first: Vec<FaceMesh> = builder.built_faces().cloned().collect();
        let first_range = *builder.elevation_range();

        builder.rebuild().expect("second rebuild");
        let second: Vec<FaceMesh> = builder.built_faces().cloned().collect();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.positions, b.positions, "positions must be bit-identical");
            assert_eq!(a.normals, b.normals);
            assert_eq!(a.uvs, b.uvs);
            assert_eq!(a.indices, b.indices);
        }
        assert_eq!(first_range, *builder.elevation_range());
    }

    #[test]
    fn test_elevation_range_brackets_every_vertex() {
        let mut builder = PlanetBuilder::new(9, 2.0, test_layers(19));
        let report = builder.rebuild().expect("rebuild succeeds");
        let radius = 2.0;

        for mesh in builder.built_faces() {
            for pos in &mesh.positions {
                let elevation = pos.length() / radius - 1.0;
                assert!(
                    elevation >= report.elevation.min() - 1e-9
                        && elevation <= report.elevation.max() + 1e-9,
                    "vertex elevation {elevation} escapes [{}, {}]",
                    report.elevation.min(),
                    report.elevation.max()
                );
            }
        }
    }

    #[test]
    fn test_zero_layers_is_flat_sphere() {
        let mut builder = PlanetBuilder::new(6, 4.0, Vec::new());
        let report = builder.rebuild().expect("rebuild succeeds");

        assert_eq!(report.elevation.min(), 0.0);
        assert_eq!(report.elevation.max(), 0.0);
        for mesh in builder.built_faces() {
            for pos in &mesh.positions {
                assert!(
                    (pos.length() - 4.0).abs() < 1e-9,
                    "flat sphere vertex at distance {}",
                    pos.length()
                );
            }
        }
    }

    #[test]
    fn test_face_mask_builds_one_face_only() {
        let mut builder = PlanetBuilder::new(5, 1.0, test_layers(3))
            .with_face_mask(FaceRenderMask::Only(CubeFace::PosZ));
        let report = builder.rebuild().expect("rebuild succeeds");

        assert_eq!(report.faces_built, 1);
        assert_eq!(report.vertex_count, 25);
        assert!(builder.face(CubeFace::PosZ).is_some());
        for face in CubeFace::ALL {
            if face != CubeFace::PosZ {
                assert!(builder.face(face).is_none(), "face {face:?} should be skipped");
            }
        }
    }

    #[test]
    fn test_masked_faces_do_not_affect_elevation_range() {
        // The masked build's range must come from its own face alone: it
        // must sit inside the full build's range.
        let mut full = PlanetBuilder::new(7, 1.0, test_layers(11));
        let full_report = full.rebuild().expect("full rebuild");

        let mut masked = PlanetBuilder::new(7, 1.0, test_layers(11))
            .with_face_mask(FaceRenderMask::Only(CubeFace::NegX));
        let masked_report = masked.rebuild().expect("masked rebuild");

        assert!(masked_report.elevation.min() >= full_report.elevation.min() - 1e-12);
        assert!(masked_report.elevation.max() <= full_report.elevation.max() + 1e-12);
    }

    #[test]
    fn test_failed_rebuild_preserves_previous_state() {
        let mut builder = PlanetBuilder::new(6, 1.0, test_layers(5));
        builder.rebuild().expect("initial rebuild");
        let before_range = *builder.elevation_range();
        let before_vertices = builder
            .face(CubeFace::PosX)
            .expect("face built")
            .positions
            .clone();

        builder.set_resolution(1); // invalid
        let err = builder.rebuild();
        assert!(err.is_err(), "resolution 1 must fail");

        assert_eq!(*builder.elevation_range(), before_range);
        assert_eq!(
            builder.face(CubeFace::PosX).expect("face kept").positions,
            before_vertices,
            "failed rebuild must not clobber committed geometry"
        );
    }

    #[test]
    fn test_invalid_noise_layer_fails_before_mutation() {
        let mut builder = PlanetBuilder::new(4, 1.0, test_layers(1));
        builder.rebuild().expect("initial rebuild");
        let before = *builder.elevation_range();

        builder.set_noise_layers(vec![NoiseLayer {
            params: NoiseParams { roughness: 0.0, ..Default::default() },
            ..Default::default()
        }]);
        assert!(matches!(builder.rebuild(), Err(PlanetError::Terrain(_))));
        assert_eq!(*builder.elevation_range(), before);
    }

    #[test]
    fn test_settings_change_flag_drives_rebuild() {
        let mut builder = PlanetBuilder::new(4, 1.0, test_layers(2));
        assert!(
            builder.rebuild_if_requested().expect("no-op").is_none(),
            "no rebuild without a flagged change"
        );

        builder.set_radius(2.5);
        let report = builder
            .rebuild_if_requested()
            .expect("rebuild succeeds")
            .expect("change was flagged");
        assert_eq!(report.faces_built, 6);

        assert!(
            builder.rebuild_if_requested().expect("no-op").is_none(),
            "flag must clear after a successful rebuild"
        );
    }
}
