//! Read-back parser for the binary mesh layout, so tests can verify
//! the encoder byte-for-byte.

use crate::helpers::HarnessError;

/// One triangle as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTriangle {
    pub normal: [f32; 3],
    pub vertices: [[f32; 3]; 3],
    pub attribute: u16,
}

/// A parsed binary mesh file.
#[derive(Debug, Clone)]
pub struct ParsedStl {
    /// Header text up to the first zero byte.
    pub header: String,
    pub triangles: Vec<RawTriangle>,
}

/// Parse a binary STL buffer, checking the declared triangle count
/// against the actual file length.
pub fn parse_binary_stl(bytes: &[u8]) -> Result<ParsedStl, HarnessError> {
    if bytes.len() < 84 {
        return Err(HarnessError::MalformedFile {
            reason: format!("file is {} bytes, header needs 84", bytes.len()),
        });
    }

    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
    let expected_len = 84 + 50 * count;
    if bytes.len() != expected_len {
        return Err(HarnessError::MalformedFile {
            reason: format!(
                "declared {} triangles implies {} bytes, file has {}",
                count,
                expected_len,
                bytes.len()
            ),
        });
    }

    let header_end = bytes[..80].iter().position(|&b| b == 0).unwrap_or(80);
    let header = String::from_utf8_lossy(&bytes[..header_end]).into_owned();

    let mut triangles = Vec::with_capacity(count);
    for i in 0..count {
        let base = 84 + 50 * i;
        let f = |off: usize| -> f32 {
            f32::from_le_bytes(bytes[base + off..base + off + 4].try_into().unwrap())
        };
        triangles.push(RawTriangle {
            normal: [f(0), f(4), f(8)],
            vertices: [
                [f(12), f(16), f(20)],
                [f(24), f(28), f(32)],
                [f(36), f(40), f(44)],
            ],
            attribute: u16::from_le_bytes(bytes[base + 48..base + 50].try_into().unwrap()),
        });
    }

    Ok(ParsedStl { header, triangles })
}
