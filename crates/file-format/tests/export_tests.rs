//! End-to-end export: dimensions in, valid binary file out.

use file_format::{generate_frame, suggested_file_name};
use moxon_types::{ConvertedDimensions, LengthUnit, PrintConfig};

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
fn file_size_follows_the_triangle_count() {
    let bytes = generate_frame(&dims(), &PrintConfig::default()).unwrap();
    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
    assert!(count > 0);
    assert_eq!(bytes.len(), 84 + 50 * count);
}

#[test]
fn hole_variant_adds_a_fixed_triangle_delta() {
    let solid_tail = PrintConfig {
        mounting_hole_diameter: 0.0,
        ..PrintConfig::default()
    };
    let without = generate_frame(&dims(), &solid_tail).unwrap();
    let with = generate_frame(&dims(), &PrintConfig::default()).unwrap();

    let n_without = u32::from_le_bytes(without[80..84].try_into().unwrap());
    let n_with = u32::from_le_bytes(with[80..84].try_into().unwrap());
    // Four framing boxes replace one solid box: 48 − 12 triangles.
    assert_eq!(n_with - n_without, 36);
}

#[test]
fn export_is_deterministic() {
    let cfg = PrintConfig::default();
    assert_eq!(
        generate_frame(&dims(), &cfg).unwrap(),
        generate_frame(&dims(), &cfg).unwrap()
    );
}

#[test]
fn suggested_name_is_stl() {
    let name = suggested_file_name(869.525);
    assert!(name.contains("869.525"));
    assert!(name.ends_with(".stl"));
}
