//! Wavefront OBJ export of the generated planet mesh.
//!
//! A stand-in for the real renderer handoff: the same (position, normal, uv)
//! vertices and triangle indices, written to a format any mesh viewer opens.

use std::io::{BufWriter, Write};
use std::path::Path;

use helios_mesh::FaceMesh;

/// Write all face meshes into one OBJ file.
///
/// OBJ indices are global and 1-based, so each face's triangle indices are
/// offset by the vertices written before it.
pub fn export_obj(path: &Path, faces: &[&FaceMesh]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "o planet")?;
    for mesh in faces {
        for p in &mesh.positions {
            writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
        }
    }
    for mesh in faces {
        for uv in &mesh.uvs {
            writeln!(out, "vt {} {}", uv.x, uv.y)?;
        }
    }
    for mesh in faces {
        for n in &mesh.normals {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
    }

    let mut base = 1usize;
    for mesh in faces {
        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (
                base + tri[0] as usize,
                base + tri[1] as usize,
                base + tri[2] as usize,
            );
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        base += mesh.vertex_count();
    }

    out.flush()
}
