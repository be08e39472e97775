use serde::{Deserialize, Serialize};

/// Unit a wire diameter is given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DiameterUnit {
    Millimeters,
    Inches,
    /// American Wire Gauge number (1.0 = AWG 1, 14.0 = AWG 14, ...).
    Awg,
    /// Diameter expressed directly as a fraction of the operating wavelength.
    WavelengthFraction,
}

/// Display unit for computed element lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Inches,
}

impl LengthUnit {
    /// Millimeters per one of this unit.
    pub fn millimeters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Centimeters => 10.0,
            LengthUnit::Inches => 25.4,
        }
    }
}

/// Wire covering, as it affects the electrical length of the elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireCovering {
    Bare,
    Insulated,
}

impl WireCovering {
    /// Velocity factor applied uniformly to all element lengths.
    pub fn velocity_factor(self) -> f64 {
        match self {
            WireCovering::Bare => 1.0,
            WireCovering::Insulated => 0.97,
        }
    }
}
