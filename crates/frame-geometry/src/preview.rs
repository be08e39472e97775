//! Low-fidelity preview tier: one axis-aligned box per feature, tagged
//! for viewport coloring. Reads the same [`FrameLayout`] as the
//! triangle composer, so boundaries always agree between the two.

use moxon_types::{ConvertedDimensions, PrintConfig};

use crate::layout::FrameLayout;
use crate::types::{FeatureKind, PreviewBox};

fn bx(center: [f64; 3], size: [f64; 3], feature: FeatureKind) -> PreviewBox {
    PreviewBox {
        center,
        size,
        feature,
    }
}

/// Build the preview box list for one set of dimensions.
pub fn build_preview(dims: &ConvertedDimensions, cfg: &PrintConfig) -> Vec<PreviewBox> {
    let l = FrameLayout::new(dims, cfg);
    let ow = l.outer_width;
    let th = l.total_height;
    let half_th = th / 2.0;
    let wall = cfg.wall_thickness;

    let mut boxes = Vec::with_capacity(17);

    // Driven element: bar, tails, end caps.
    boxes.push(bx(
        [0.0, l.driver_y, half_th],
        [dims.a, ow, th],
        FeatureKind::Driver,
    ));
    for x in [-l.half_a, l.half_a] {
        boxes.push(bx(
            [x, (l.driver_y + l.driver_tail_end) / 2.0, half_th],
            [ow, dims.b, th],
            FeatureKind::Driver,
        ));
        boxes.push(bx(
            [x, l.driver_tail_end + wall / 2.0, half_th],
            [ow, wall, th],
            FeatureKind::EndCap,
        ));
    }

    // Reflector: bar, tails, end caps.
    boxes.push(bx(
        [0.0, l.reflector_y, half_th],
        [dims.a, ow, th],
        FeatureKind::Reflector,
    ));
    for x in [-l.half_a, l.half_a] {
        boxes.push(bx(
            [x, (l.reflector_tail_end + l.reflector_y) / 2.0, half_th],
            [ow, dims.d, th],
            FeatureKind::Reflector,
        ));
        boxes.push(bx(
            [x, l.reflector_tail_end - wall / 2.0, half_th],
            [ow, wall, th],
            FeatureKind::EndCap,
        ));
    }

    // Bridges across the gap.
    for x in [-l.half_a, l.half_a] {
        boxes.push(bx(
            [x, l.bridge_y0 + l.bridge_length / 2.0, cfg.floor_thickness / 2.0],
            [2.0 * wall, l.bridge_length, cfg.floor_thickness],
            FeatureKind::Bridge,
        ));
    }

    // Corner regions.
    for (x, y) in l.corner_centers() {
        boxes.push(bx([x, y, half_th], [ow, ow, th], FeatureKind::Corner));
    }

    // Boom spine, mounting tail included.
    boxes.push(bx(
        [0.0, (l.boom_y0 + l.boom_y1) / 2.0, l.boom_height / 2.0],
        [cfg.boom_width, l.boom_y1 - l.boom_y0, l.boom_height],
        FeatureKind::Boom,
    ));

    tracing::debug!(boxes = boxes.len(), "built preview geometry");
    boxes
}
