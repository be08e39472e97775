//! Error type and shared mesh math for the harness.

use frame_geometry::Solid;
use nalgebra::Point3;

/// Unified error type for harness checks.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("malformed mesh file: {reason}")]
    MalformedFile { reason: String },
}

/// Axis-aligned bounds of a set of solids.
pub fn solids_bounding_box(solids: &[Solid]) -> (Point3<f64>, Point3<f64>) {
    let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
    let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
    for s in solids {
        for tri in &s.triangles {
            for v in &tri.vertices {
                min = Point3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
                max = Point3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
            }
        }
    }
    (min, max)
}
