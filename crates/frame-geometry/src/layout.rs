//! Shared placement arithmetic for the frame.
//!
//! Both the triangle composer and the preview builder read feature
//! boundaries from here, so the two fidelity tiers cannot silently
//! diverge.

use moxon_types::{ConvertedDimensions, PrintConfig};

/// Extra height the boom carries above the channel floors, keeping it
/// under the wire slots.
pub const BOOM_RAISE: f64 = 1.5;

/// Shortest bridge the composer will emit, in millimeters.
pub const MIN_BRIDGE_LENGTH: f64 = 0.1;

/// Resolved feature boundaries in model coordinates: X is overall
/// width, Y is depth, Z is print height, with the rectangle centered
/// on the origin in X/Y and sitting on z = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub outer_width: f64,
    pub total_height: f64,
    pub half_a: f64,
    /// Driven element bar centerline, `-e / 2`.
    pub driver_y: f64,
    /// Reflector bar centerline, `+e / 2`.
    pub reflector_y: f64,
    /// Open end of the driver tails, `driver_y + b`.
    pub driver_tail_end: f64,
    /// Open end of the reflector tails, `reflector_y - d`.
    pub reflector_tail_end: f64,
    /// Near edge of the side bridges, past the driver end caps.
    pub bridge_y0: f64,
    /// Bridge run along Y, floored at [`MIN_BRIDGE_LENGTH`].
    pub bridge_length: f64,
    /// Near end of the boom, just behind the driver bar.
    pub boom_y0: f64,
    /// Where the boom main span ends and the mounting tail begins,
    /// just behind the reflector bar.
    pub boom_tail_y0: f64,
    /// Far end of the mounting tail.
    pub boom_y1: f64,
    pub boom_height: f64,
}

impl FrameLayout {
    pub fn new(dims: &ConvertedDimensions, cfg: &PrintConfig) -> FrameLayout {
        let outer_width = cfg.outer_width();
        let half_outer = outer_width / 2.0;
        let driver_y = -dims.e / 2.0;
        let reflector_y = dims.e / 2.0;
        let driver_tail_end = driver_y + dims.b;
        let reflector_tail_end = reflector_y - dims.d;

        let bridge_y0 = driver_tail_end + cfg.wall_thickness;
        let bridge_length =
            (reflector_tail_end - cfg.wall_thickness - bridge_y0).max(MIN_BRIDGE_LENGTH);

        let boom_y0 = driver_y - half_outer;
        let boom_tail_y0 = reflector_y + half_outer;

        FrameLayout {
            outer_width,
            total_height: cfg.total_height(),
            half_a: dims.a / 2.0,
            driver_y,
            reflector_y,
            driver_tail_end,
            reflector_tail_end,
            bridge_y0,
            bridge_length,
            boom_y0,
            boom_tail_y0,
            boom_y1: boom_tail_y0 + cfg.mounting_tail_length,
            boom_height: cfg.floor_thickness + BOOM_RAISE,
        }
    }

    /// Centers of the four tail/bar junction corner blocks.
    pub fn corner_centers(&self) -> [(f64, f64); 4] {
        [
            (-self.half_a, self.driver_y),
            (self.half_a, self.driver_y),
            (-self.half_a, self.reflector_y),
            (self.half_a, self.reflector_y),
        ]
    }
}
