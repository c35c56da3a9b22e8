//! Face render mask: build all faces, or a single face for inspection.

use helios_cubesphere::CubeFace;

/// Which cube faces a rebuild constructs.
///
/// Restricting the mask to one face is an authoring aid (regenerating a
/// single face is six times faster while tuning noise settings). Faces
/// excluded by the mask are not built at all, so they contribute nothing to
/// the elevation range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaceRenderMask {
    /// Build all six faces.
    #[default]
    All,
    /// Build only the named face.
    Only(CubeFace),
}

impl FaceRenderMask {
    /// Whether the mask includes the given face.
    #[must_use]
    pub fn includes(self, face: CubeFace) -> bool {
        match self {
            FaceRenderMask::All => true,
            FaceRenderMask::Only(only) => only == face,
        }
    }

    /// Number of faces the mask selects.
    #[must_use]
    pub fn face_count(self) -> usize {
        match self {
            FaceRenderMask::All => 6,
            FaceRenderMask::Only(_) => 1,
        }
    }
}
