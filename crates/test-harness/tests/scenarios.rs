//! End-to-end scenarios: frequency in, printable binary mesh out.

use file_format::{generate_frame, suggested_file_name};
use moxon_calc::{calculate, DesignInput};
use moxon_types::{ConvertedDimensions, DiameterUnit, LengthUnit, PrintConfig, WireCovering};
use test_harness::parse_binary_stl;

fn ism_868_input() -> DesignInput {
    DesignInput {
        frequency_mhz: 869.525,
        wire_diameter: 1.38,
        diameter_unit: DiameterUnit::Millimeters,
        covering: WireCovering::Bare,
        display_unit: LengthUnit::Millimeters,
    }
}

fn ism_868_dims() -> ConvertedDimensions {
    calculate(&ism_868_input()).unwrap()
}

#[test]
fn ism_868_frame_exports_a_wellformed_file() {
    let dims = ism_868_dims();

    // The rectangle lands in the expected band for a 34.5 cm wavelength.
    assert!(dims.a > 100.0 && dims.a < 160.0, "a = {} mm", dims.a);
    assert!(dims.e > 30.0 && dims.e < 60.0, "e = {} mm", dims.e);

    let bytes = generate_frame(&dims, &PrintConfig::default()).unwrap();
    let parsed = parse_binary_stl(&bytes).unwrap();
    assert!(!parsed.triangles.is_empty());
    assert_eq!(bytes.len(), 84 + 50 * parsed.triangles.len());

    // Every stored normal survives the f32 round trip as unit length.
    for tri in &parsed.triangles {
        let [x, y, z] = tri.normal;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-5, "normal length {len}");
        assert_eq!(tri.attribute, 0);
    }

    let name = suggested_file_name(869.525);
    assert_eq!(name, "moxon-frame-869.525MHz.stl");
}

#[test]
fn mounting_hole_changes_the_count_by_thirty_six() {
    let dims = ism_868_dims();
    let solid_tail = PrintConfig {
        mounting_hole_diameter: 0.0,
        ..PrintConfig::default()
    };
    let without = parse_binary_stl(&generate_frame(&dims, &solid_tail).unwrap()).unwrap();
    let with = parse_binary_stl(&generate_frame(&dims, &PrintConfig::default()).unwrap()).unwrap();
    assert_eq!(with.triangles.len() - without.triangles.len(), 36);
}

#[test]
fn chamfer_changes_each_corner_block_by_sixteen() {
    let dims = ism_868_dims();
    let sharp = PrintConfig {
        corner_chamfer: 0.0,
        ..PrintConfig::default()
    };
    let boxy = parse_binary_stl(&generate_frame(&dims, &sharp).unwrap()).unwrap();
    let beveled =
        parse_binary_stl(&generate_frame(&dims, &PrintConfig::default()).unwrap()).unwrap();
    // Four corner blocks go from 12-triangle boxes to 28-triangle
    // octagonal prisms.
    assert_eq!(beveled.triangles.len() - boxy.triangles.len(), 4 * 16);
}

#[test]
fn encoder_output_round_trips_through_the_parser() {
    let dims = ism_868_dims();
    let mesh = frame_geometry::compose_frame(&dims, &PrintConfig::default());
    let bytes = file_format::encode_binary_stl(&mesh, "round trip").unwrap();
    let parsed = parse_binary_stl(&bytes).unwrap();

    assert_eq!(parsed.header, "round trip");
    assert_eq!(parsed.triangles.len(), mesh.triangle_count());
    for (raw, tri) in parsed.triangles.iter().zip(mesh.triangles()) {
        for (got, want) in raw.vertices.iter().zip(tri.vertices.iter()) {
            assert_eq!(got[0], want.x as f32);
            assert_eq!(got[1], want.y as f32);
            assert_eq!(got[2], want.z as f32);
        }
    }
}
