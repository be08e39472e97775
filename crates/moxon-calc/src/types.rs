use serde::{Deserialize, Serialize};

use moxon_types::{DiameterUnit, LengthUnit, WireCovering};

/// One design request, as gathered from the caller's form inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Operating frequency in MHz. Must be > 0.
    pub frequency_mhz: f64,
    /// Wire diameter in `diameter_unit`. Must be > 0.
    pub wire_diameter: f64,
    pub diameter_unit: DiameterUnit,
    pub covering: WireCovering,
    /// Unit the returned lengths are expressed in.
    pub display_unit: LengthUnit,
}

/// Errors from the dimension calculator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalcError {
    #[error("frequency must be positive, got {value} MHz")]
    NonPositiveFrequency { value: f64 },

    #[error("wire diameter must be positive, got {value}")]
    NonPositiveDiameter { value: f64 },
}
