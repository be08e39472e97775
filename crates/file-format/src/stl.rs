//! Binary and ASCII STL encoders for the composed frame mesh.
//!
//! Binary layout (little-endian):
//! - 80-byte header text, zero padded
//! - u32 triangle count
//! - per triangle: 3×f32 normal, 3×(3×f32) vertices, u16 attribute = 50 bytes

use frame_geometry::{FrameMesh, Triangle};

use crate::errors::StlError;

const HEADER_LEN: usize = 80;
const BYTES_PER_TRIANGLE: usize = 50;

/// Serialize the mesh as a binary STL byte buffer.
///
/// Purely structural: triangles are written in emission order with no
/// validation of manifoldness, which the format does not require.
pub fn encode_binary_stl(mesh: &FrameMesh, name: &str) -> Result<Vec<u8>, StlError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(StlError::EmptyMesh);
    }
    if tri_count > u32::MAX as usize {
        return Err(StlError::TooManyTriangles { count: tri_count });
    }

    let mut buf = Vec::with_capacity(HEADER_LEN + 4 + tri_count * BYTES_PER_TRIANGLE);

    // Zero-padded header.
    let header = name.as_bytes();
    buf.extend_from_slice(&header[..header.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.triangles() {
        write_triangle(&mut buf, tri);
    }

    Ok(buf)
}

fn write_triangle(buf: &mut Vec<u8>, tri: &Triangle) {
    for c in tri.normal.iter() {
        buf.extend_from_slice(&(*c as f32).to_le_bytes());
    }
    for v in &tri.vertices {
        for c in v.coords.iter() {
            buf.extend_from_slice(&(*c as f32).to_le_bytes());
        }
    }
    // Attribute byte count, required by the layout, always zero.
    buf.extend_from_slice(&0u16.to_le_bytes());
}

/// Serialize the mesh as an ASCII STL string. Slicers accept either
/// form; this one is handy for eyeballing output in a text editor.
pub fn encode_ascii_stl(mesh: &FrameMesh, name: &str) -> Result<String, StlError> {
    if mesh.triangle_count() == 0 {
        return Err(StlError::EmptyMesh);
    }

    let mut out = String::with_capacity(mesh.triangle_count() * 250);
    out.push_str(&format!("solid {name}\n"));
    for tri in mesh.triangles() {
        out.push_str(&format!(
            "  facet normal {} {} {}\n",
            tri.normal.x as f32, tri.normal.y as f32, tri.normal.z as f32
        ));
        out.push_str("    outer loop\n");
        for v in &tri.vertices {
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                v.x as f32, v.y as f32, v.z as f32
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}
