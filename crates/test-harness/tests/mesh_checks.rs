//! Structural checks over every solid the composer emits.

use frame_geometry::{build_preview, compose_frame};
use moxon_types::{ConvertedDimensions, LengthUnit, PrintConfig};
use test_harness::assertions::{assert_closed_solid, assert_outward_unit_normals};
use test_harness::helpers::solids_bounding_box;

fn dims() -> ConvertedDimensions {
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

#[test]
fn every_solid_is_independently_closed() {
    let mesh = compose_frame(&dims(), &PrintConfig::default());
    for (i, solid) in mesh.solids.iter().enumerate() {
        assert_closed_solid(solid, &format!("solid {i}")).unwrap();
        assert_outward_unit_normals(solid, &format!("solid {i}")).unwrap();
    }
}

#[test]
fn closed_even_at_degenerate_inputs() {
    // Tiny gap, oversized chamfer: the clamps must keep every solid
    // well-formed.
    let mut d = dims();
    d.c = 0.05;
    d.e = d.b + d.c + d.d;
    let cfg = PrintConfig {
        corner_chamfer: 50.0,
        ..PrintConfig::default()
    };
    let mesh = compose_frame(&d, &cfg);
    for (i, solid) in mesh.solids.iter().enumerate() {
        assert_closed_solid(solid, &format!("solid {i}")).unwrap();
    }
}

#[test]
fn frame_sits_on_the_build_plate() {
    let mesh = compose_frame(&dims(), &PrintConfig::default());
    let (min, max) = solids_bounding_box(&mesh.solids);
    assert!(min.z.abs() < 1e-9, "lowest point at z = {}", min.z);
    assert!((max.z - PrintConfig::default().total_height()).abs() < 1e-9);
}

#[test]
fn preview_and_mesh_share_the_footprint() {
    let d = dims();
    let cfg = PrintConfig::default();
    let mesh = compose_frame(&d, &cfg);
    let (min, max) = solids_bounding_box(&mesh.solids);

    let boxes = build_preview(&d, &cfg);
    let px_min = boxes
        .iter()
        .map(|b| b.center[0] - b.size[0] / 2.0)
        .fold(f64::MAX, f64::min);
    let px_max = boxes
        .iter()
        .map(|b| b.center[0] + b.size[0] / 2.0)
        .fold(f64::MIN, f64::max);

    assert!((min.x - px_min).abs() < 1e-9);
    assert!((max.x - px_max).abs() < 1e-9);
}
