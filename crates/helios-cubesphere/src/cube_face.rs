//! The six faces of the cube underlying a cube-sphere planet.

use glam::DVec3;

/// One face of the cube that is inflated into a sphere.
///
/// Each variant names the axis direction of the face's outward normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Canonical slot of this face in a six-element per-face array.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// In-face axis of increasing `u`.
    ///
    /// Derived from the normal by the cyclic component permutation
    /// `(x, y, z) → (y, z, x)`, so every face uses the same rule and no face
    /// needs a hand-picked basis.
    #[must_use]
    pub fn tangent(self) -> DVec3 {
        let n = self.normal();
        DVec3::new(n.y, n.z, n.x)
    }

    /// In-face axis of increasing `v`: `normal × tangent`.
    ///
    /// Together with [`CubeFace::tangent`] this forms a basis where
    /// `tangent × bitangent == normal`, which keeps triangle winding
    /// outward-facing on every face.
    #[must_use]
    pub fn bitangent(self) -> DVec3 {
        self.normal().cross(self.tangent())
    }
}
