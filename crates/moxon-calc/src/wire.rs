//! Wire diameter unit conversion.

use moxon_types::DiameterUnit;

const MM_PER_INCH: f64 = 25.4;

/// AWG gauge number to diameter in inches: `0.005 · 92^((36 − n) / 39)`.
pub fn awg_to_inches(gauge: f64) -> f64 {
    0.005 * 92.0_f64.powf((36.0 - gauge) / 39.0)
}

/// Express a wire diameter as a fraction of the operating wavelength.
///
/// `wavelength_m` is in meters; `diameter` is in `unit`.
pub fn diameter_in_wavelengths(diameter: f64, unit: DiameterUnit, wavelength_m: f64) -> f64 {
    let meters = match unit {
        DiameterUnit::Millimeters => diameter / 1000.0,
        DiameterUnit::Inches => diameter * MM_PER_INCH / 1000.0,
        DiameterUnit::Awg => awg_to_inches(diameter) * MM_PER_INCH / 1000.0,
        DiameterUnit::WavelengthFraction => return diameter,
    };
    meters / wavelength_m
}
