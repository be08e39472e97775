//! Moxon rectangle dimension calculator.
//!
//! Maps (frequency, wire diameter, diameter unit, covering) to the
//! converted element lengths the frame generator consumes. Pure and
//! stateless; every call builds a fresh [`ConvertedDimensions`].

pub mod elements;
pub mod types;
pub mod wire;

pub use types::{CalcError, DesignInput};

use moxon_types::{ConvertedDimensions, LengthUnit};

/// Speed of light in m·MHz, so `SPEED_OF_LIGHT / f_mhz` is the
/// wavelength in meters.
pub const SPEED_OF_LIGHT: f64 = 299.7925;

/// Compute the Moxon rectangle for one design input.
///
/// Fails for non-positive frequency or wire diameter; the geometry
/// layer never sees an out-of-domain input.
pub fn calculate(input: &DesignInput) -> Result<ConvertedDimensions, CalcError> {
    if input.frequency_mhz <= 0.0 {
        return Err(CalcError::NonPositiveFrequency {
            value: input.frequency_mhz,
        });
    }
    if input.wire_diameter <= 0.0 {
        return Err(CalcError::NonPositiveDiameter {
            value: input.wire_diameter,
        });
    }

    let wavelength_m = SPEED_OF_LIGHT / input.frequency_mhz;
    let dia_wl = wire::diameter_in_wavelengths(input.wire_diameter, input.diameter_unit, wavelength_m);
    let lengths = elements::element_lengths(dia_wl);

    let vf = input.covering.velocity_factor();
    let wavelength_mm = wavelength_m * 1000.0;
    let scale = wavelength_mm * vf;

    let a = lengths.a * scale;
    let b = lengths.b * scale;
    let c = lengths.c * scale;
    let d = lengths.d * scale;
    let e = lengths.e * scale;

    let mm = ConvertedDimensions {
        a,
        b,
        c,
        d,
        e,
        driven_cut_length: a + 2.0 * b,
        reflector_cut_length: a + 2.0 * d,
        wavelength: wavelength_mm,
        wire_diameter: dia_wl * wavelength_mm,
        unit: LengthUnit::Millimeters,
    };

    tracing::debug!(
        frequency_mhz = input.frequency_mhz,
        a_mm = mm.a,
        e_mm = mm.e,
        "computed moxon rectangle"
    );

    Ok(mm.in_unit(input.display_unit))
}
