use serde::{Deserialize, Serialize};

use crate::units::LengthUnit;

/// Converted physical dimensions for one Moxon rectangle.
///
/// All lengths share one unit. `a` is the overall width, `b` the driven
/// element tail, `c` the coupling gap, `d` the reflector tail and `e`
/// the overall depth. The producer guarantees `e == b + c + d`; the
/// geometry layer assumes it.
///
/// Never mutated after construction — each generation call receives a
/// fresh value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedDimensions {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    /// Wire to cut for the driven element before bending: `a + 2b`.
    pub driven_cut_length: f64,
    /// Wire to cut for the reflector before bending: `a + 2d`.
    pub reflector_cut_length: f64,
    /// Operating wavelength, same unit as the element lengths.
    pub wavelength: f64,
    /// Wire diameter, same unit as the element lengths.
    pub wire_diameter: f64,
    /// Unit every length field above is expressed in.
    pub unit: LengthUnit,
}

impl ConvertedDimensions {
    /// Re-express every length field in another unit.
    pub fn in_unit(&self, unit: LengthUnit) -> ConvertedDimensions {
        let k = self.unit.millimeters_per_unit() / unit.millimeters_per_unit();
        ConvertedDimensions {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
            d: self.d * k,
            e: self.e * k,
            driven_cut_length: self.driven_cut_length * k,
            reflector_cut_length: self.reflector_cut_length * k,
            wavelength: self.wavelength * k,
            wire_diameter: self.wire_diameter * k,
            unit,
        }
    }
}
