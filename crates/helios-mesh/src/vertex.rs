//! Interleaved vertex format for renderer handoff.

use bytemuck::{Pod, Zeroable};

/// One GPU-ready terrain vertex: position, displaced-surface normal, and the
/// biome/elevation UV.
///
/// `repr(C)` with three tightly packed attributes (32 bytes, no padding), so
/// a `&[MeshVertex]` can be uploaded as raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit normal of the displaced terrain surface.
    pub normal: [f32; 3],
    /// `uv.x` is the biome index in `[0, 1]`; `uv.y` is reserved.
    pub uv: [f32; 2],
}

/// Stride must stay in sync with the renderer's vertex layout.
const _: () = assert!(std::mem::size_of::<MeshVertex>() == 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
        assert_eq!(std::mem::align_of::<MeshVertex>(), 4);
    }

    #[test]
    fn test_vertex_slice_casts_to_bytes() {
        let verts = [
            MeshVertex {
                position: [1.0, 2.0, 3.0],
                normal: [0.0, 1.0, 0.0],
                uv: [0.5, 0.0],
            };
            3
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 3 * 32);
    }
}
