//! Property tests: uniform scaling and deterministic output.

use frame_geometry::primitives::extrude_polygon;
use frame_geometry::{compose_frame, FrameMesh};
use moxon_types::{ConvertedDimensions, LengthUnit, PrintConfig};
use nalgebra::Point2;
use proptest::prelude::*;

fn reference_dims() -> ConvertedDimensions {
    ConvertedDimensions {
        a: 123.4,
        b: 15.4,
        c: 6.7,
        d: 23.9,
        e: 46.0,
        driven_cut_length: 154.2,
        reflector_cut_length: 171.2,
        wavelength: 344.8,
        wire_diameter: 1.38,
        unit: LengthUnit::Millimeters,
    }
}

fn flatten(mesh: &FrameMesh) -> Vec<f64> {
    mesh.triangles()
        .flat_map(|t| t.vertices.iter())
        .flat_map(|v| [v.x, v.y, v.z])
        .collect()
}

proptest! {
    /// Extruding a scaled polygon through a scaled z-range scales every
    /// vertex and changes no triangle count.
    #[test]
    fn extrusion_scales_linearly(
        w in 0.5f64..200.0,
        h in 0.5f64..200.0,
        depth in 0.5f64..50.0,
        k in 0.1f64..10.0,
    ) {
        let base: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ];
        let scaled: Vec<Point2<f64>> = base.iter().map(|p| Point2::new(p.x * k, p.y * k)).collect();

        let a = extrude_polygon(&base, 0.0, depth);
        let b = extrude_polygon(&scaled, 0.0, depth * k);

        prop_assert_eq!(a.triangles.len(), b.triangles.len());
        for (ta, tb) in a.triangles.iter().zip(b.triangles.iter()) {
            for (va, vb) in ta.vertices.iter().zip(tb.vertices.iter()) {
                prop_assert!((va.x * k - vb.x).abs() < 1e-6 * k.max(1.0));
                prop_assert!((va.y * k - vb.y).abs() < 1e-6 * k.max(1.0));
                prop_assert!((va.z * k - vb.z).abs() < 1e-6 * k.max(1.0));
            }
        }
    }

    /// Triangle count is independent of the rectangle's scale.
    #[test]
    fn frame_triangle_count_is_scale_free(k in 0.2f64..8.0) {
        let dims = reference_dims();
        let scaled = ConvertedDimensions {
            a: dims.a * k,
            b: dims.b * k,
            c: dims.c * k,
            d: dims.d * k,
            e: dims.e * k,
            driven_cut_length: dims.driven_cut_length * k,
            reflector_cut_length: dims.reflector_cut_length * k,
            wavelength: dims.wavelength * k,
            wire_diameter: dims.wire_diameter * k,
            unit: dims.unit,
        };
        let cfg = PrintConfig::default();
        let scaled_cfg = PrintConfig {
            wire_diameter_mm: cfg.wire_diameter_mm * k,
            tolerance: cfg.tolerance * k,
            wall_thickness: cfg.wall_thickness * k,
            floor_thickness: cfg.floor_thickness * k,
            channel_height: cfg.channel_height * k,
            boom_width: cfg.boom_width * k,
            mounting_tail_length: cfg.mounting_tail_length * k,
            mounting_hole_diameter: cfg.mounting_hole_diameter * k,
            corner_chamfer: cfg.corner_chamfer * k,
        };

        let base = compose_frame(&dims, &cfg);
        let big = compose_frame(&scaled, &scaled_cfg);
        prop_assert_eq!(base.triangle_count(), big.triangle_count());
    }
}

#[test]
fn identical_inputs_give_identical_byte_for_byte_output() {
    let dims = reference_dims();
    let cfg = PrintConfig::default();
    let first = flatten(&compose_frame(&dims, &cfg));
    let second = flatten(&compose_frame(&dims, &cfg));
    assert_eq!(first, second);
}
