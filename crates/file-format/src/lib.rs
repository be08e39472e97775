//! Mesh file serialization and the download entry point.

pub mod errors;
pub mod stl;

pub use errors::StlError;
pub use stl::{encode_ascii_stl, encode_binary_stl};

use frame_geometry::compose_frame;
use moxon_types::{ConvertedDimensions, PrintConfig};

/// Compose the frame for one set of dimensions and serialize it as a
/// binary mesh file, ready to hand to the download glue.
pub fn generate_frame(
    dims: &ConvertedDimensions,
    cfg: &PrintConfig,
) -> Result<Vec<u8>, StlError> {
    let mesh = compose_frame(dims, cfg);
    let bytes = encode_binary_stl(&mesh, "moxon antenna frame")?;
    tracing::debug!(bytes = bytes.len(), "encoded frame file");
    Ok(bytes)
}

/// Download file name for a given operating frequency.
pub fn suggested_file_name(frequency_mhz: f64) -> String {
    format!("moxon-frame-{frequency_mhz}MHz.stl")
}
