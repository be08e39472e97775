//! Mesh checks with diagnostic context strings.

use std::collections::HashMap;

use frame_geometry::Solid;
use nalgebra::Point3;

use crate::helpers::HarnessError;

/// Assert every triangle normal has unit length and points away from
/// the solid's centroid. Valid for the convex solids the composer emits.
pub fn assert_outward_unit_normals(solid: &Solid, ctx: &str) -> Result<(), HarnessError> {
    let c = solid.centroid();
    for (i, tri) in solid.triangles.iter().enumerate() {
        let len = tri.normal.norm();
        if (len - 1.0).abs() > 1e-9 {
            return Err(HarnessError::AssertionFailed {
                detail: format!("[{ctx}] triangle {i} normal length {len}"),
            });
        }
        let face_center = Point3::from(
            (tri.vertices[0].coords + tri.vertices[1].coords + tri.vertices[2].coords) / 3.0,
        );
        if tri.normal.dot(&(face_center - c)) <= 0.0 {
            return Err(HarnessError::AssertionFailed {
                detail: format!("[{ctx}] triangle {i} normal points inward"),
            });
        }
    }
    Ok(())
}

/// Assert the solid is closed: every directed edge must be matched by
/// exactly one opposite-direction twin. Vertices are compared by exact
/// bit pattern, which holds because the builders compute shared
/// corners identically.
pub fn assert_closed_solid(solid: &Solid, ctx: &str) -> Result<(), HarnessError> {
    type Key = [u64; 3];
    let key = |p: &Point3<f64>| -> Key { [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()] };

    let mut edges: HashMap<(Key, Key), i64> = HashMap::new();
    for tri in &solid.triangles {
        for i in 0..3 {
            let a = key(&tri.vertices[i]);
            let b = key(&tri.vertices[(i + 1) % 3]);
            *edges.entry((a, b)).or_insert(0) += 1;
            *edges.entry((b, a)).or_insert(0) -= 1;
        }
    }

    for (edge, balance) in &edges {
        if *balance != 0 {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{ctx}] unmatched edge {edge:?} (balance {balance}), solid is not closed"
                ),
            });
        }
    }
    Ok(())
}
