use serde::{Deserialize, Serialize};

/// Print tolerances and frame proportions, all in millimeters.
///
/// Immutable per generation call. Callers override individual fields by
/// constructing a modified copy; there is no shared mutable default.
/// Every field must be ≥ 0; the caller validates before handing the
/// value to the geometry layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Diameter of the wire the channels must hold.
    pub wire_diameter_mm: f64,
    /// Extra slot width so the wire press-fits despite printer slop.
    pub tolerance: f64,
    /// Thickness of each channel side wall.
    pub wall_thickness: f64,
    /// Thickness of the channel floor.
    pub floor_thickness: f64,
    /// Height of the open slot above the floor.
    pub channel_height: f64,
    /// Width of the central boom spine.
    pub boom_width: f64,
    /// How far the boom extends past the reflector for mounting hardware.
    pub mounting_tail_length: f64,
    /// Side length of the square mounting hole; 0 disables the hole.
    pub mounting_hole_diameter: f64,
    /// Bevel cut on the corner blocks. Clamped at use-time below half
    /// the outer channel width.
    pub corner_chamfer: f64,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            wire_diameter_mm: 1.38,
            tolerance: 0.4,
            wall_thickness: 2.0,
            floor_thickness: 2.0,
            channel_height: 3.5,
            boom_width: 10.0,
            mounting_tail_length: 35.0,
            mounting_hole_diameter: 4.0,
            corner_chamfer: 1.5,
        }
    }
}

impl PrintConfig {
    /// Outer width of a channel: slot plus both side walls.
    pub fn outer_width(&self) -> f64 {
        self.wire_diameter_mm + self.tolerance + 2.0 * self.wall_thickness
    }

    /// Total channel height: floor plus open slot.
    pub fn total_height(&self) -> f64 {
        self.floor_thickness + self.channel_height
    }

    /// Width of the open wire slot between the side walls.
    pub fn slot_width(&self) -> f64 {
        self.wire_diameter_mm + self.tolerance
    }
}
