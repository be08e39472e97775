//! Full-fidelity frame assembly.
//!
//! Lays every feature out per the shared [`FrameLayout`] and returns
//! the bag of closed solids the binary encoder serializes. No boolean
//! union runs; adjacent solids overlap at contact seams.

use nalgebra::Point3;

use moxon_types::{ConvertedDimensions, PrintConfig};

use crate::features::{
    channel_along_x, channel_along_y, corner_block, end_cap, side_bridge, CapDirection,
};
use crate::layout::FrameLayout;
use crate::primitives::box_solid;
use crate::types::{FrameMesh, Solid};

/// Narrowest strip the mounting hole frame may leave on any side.
const MIN_HOLE_RIM: f64 = 0.1;

/// Build the complete frame mesh for one set of dimensions.
pub fn compose_frame(dims: &ConvertedDimensions, cfg: &PrintConfig) -> FrameMesh {
    let layout = FrameLayout::new(dims, cfg);
    let mut mesh = FrameMesh::default();

    // Driven element: bar, two tails, two end caps.
    mesh.extend(channel_along_x(0.0, layout.driver_y, dims.a, cfg));
    for x in [-layout.half_a, layout.half_a] {
        mesh.extend(channel_along_y(x, layout.driver_y, layout.driver_tail_end, cfg));
        mesh.push(end_cap(x, layout.driver_tail_end, CapDirection::Positive, cfg));
    }

    // Reflector: bar, two tails, two end caps.
    mesh.extend(channel_along_x(0.0, layout.reflector_y, dims.a, cfg));
    for x in [-layout.half_a, layout.half_a] {
        mesh.extend(channel_along_y(x, layout.reflector_tail_end, layout.reflector_y, cfg));
        mesh.push(end_cap(x, layout.reflector_tail_end, CapDirection::Negative, cfg));
    }

    // Side bridges across the electrical gap.
    for x in [-layout.half_a, layout.half_a] {
        mesh.push(side_bridge(x, layout.bridge_y0, layout.bridge_length, cfg));
    }

    // Corner blocks at the four bar/tail junctions.
    for (x, y) in layout.corner_centers() {
        mesh.push(corner_block(x, y, cfg));
    }

    // Boom: main span plus mounting tail.
    mesh.push(boom_main(&layout, cfg));
    mesh.extend(boom_tail(&layout, cfg));

    tracing::debug!(
        solids = mesh.solids.len(),
        triangles = mesh.triangle_count(),
        a_mm = dims.a,
        e_mm = dims.e,
        "composed frame mesh"
    );

    mesh
}

fn boom_main(layout: &FrameLayout, cfg: &PrintConfig) -> Solid {
    let half_w = cfg.boom_width / 2.0;
    box_solid(
        Point3::new(-half_w, layout.boom_y0, 0.0),
        Point3::new(half_w, layout.boom_tail_y0, layout.boom_height),
    )
}

/// The boom's tail segment: one solid box, or four boxes framing a
/// square void when a mounting hole is requested.
fn boom_tail(layout: &FrameLayout, cfg: &PrintConfig) -> Vec<Solid> {
    let half_w = cfg.boom_width / 2.0;
    let y0 = layout.boom_tail_y0;
    let y1 = layout.boom_y1;
    let tail_len = y1 - y0;
    let h = layout.boom_height;

    // The hole must leave a rim on every side of the tail footprint.
    let max_side = (cfg.boom_width).min(tail_len) - 2.0 * MIN_HOLE_RIM;
    let hole = cfg.mounting_hole_diameter.min(max_side);
    if cfg.mounting_hole_diameter <= 0.0 || hole <= 0.0 {
        return vec![box_solid(
            Point3::new(-half_w, y0, 0.0),
            Point3::new(half_w, y1, h),
        )];
    }

    let half_hole = hole / 2.0;
    let y_mid = (y0 + y1) / 2.0;

    vec![
        // Strips either side of the void, full tail length.
        box_solid(Point3::new(-half_w, y0, 0.0), Point3::new(-half_hole, y1, h)),
        box_solid(Point3::new(half_hole, y0, 0.0), Point3::new(half_w, y1, h)),
        // Strips before and after the void.
        box_solid(
            Point3::new(-half_hole, y0, 0.0),
            Point3::new(half_hole, y_mid - half_hole, h),
        ),
        box_solid(
            Point3::new(-half_hole, y_mid + half_hole, 0.0),
            Point3::new(half_hole, y1, h),
        ),
    ]
}
