//! Antenna-specific feature assemblers built from the primitives:
//! U-channels, end caps, side bridges, corner blocks.

use nalgebra::Point3;

use moxon_types::PrintConfig;

use crate::primitives::{box_solid, chamfered_block};
use crate::types::Solid;

/// Which way an end cap faces along Y relative to its channel opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapDirection {
    /// Cap sits on the +Y side of the open face.
    Positive,
    /// Cap sits on the −Y side of the open face.
    Negative,
}

/// U-channel run along X: floor plus two side walls, open on top.
///
/// Centered at `(x_center, y_center)`, spanning `length` along X. The
/// wire slot between the walls is left unfilled. Three closed solids.
pub fn channel_along_x(x_center: f64, y_center: f64, length: f64, cfg: &PrintConfig) -> Vec<Solid> {
    let half_len = length / 2.0;
    let half_outer = cfg.outer_width() / 2.0;
    let x0 = x_center - half_len;
    let x1 = x_center + half_len;

    let floor = box_solid(
        Point3::new(x0, y_center - half_outer, 0.0),
        Point3::new(x1, y_center + half_outer, cfg.floor_thickness),
    );
    let near_wall = box_solid(
        Point3::new(x0, y_center - half_outer, cfg.floor_thickness),
        Point3::new(x1, y_center - half_outer + cfg.wall_thickness, cfg.total_height()),
    );
    let far_wall = box_solid(
        Point3::new(x0, y_center + half_outer - cfg.wall_thickness, cfg.floor_thickness),
        Point3::new(x1, y_center + half_outer, cfg.total_height()),
    );

    vec![floor, near_wall, far_wall]
}

/// U-channel run along Y between `y0` and `y1`, centered on `x_center`.
pub fn channel_along_y(x_center: f64, y0: f64, y1: f64, cfg: &PrintConfig) -> Vec<Solid> {
    let half_outer = cfg.outer_width() / 2.0;

    let floor = box_solid(
        Point3::new(x_center - half_outer, y0, 0.0),
        Point3::new(x_center + half_outer, y1, cfg.floor_thickness),
    );
    let left_wall = box_solid(
        Point3::new(x_center - half_outer, y0, cfg.floor_thickness),
        Point3::new(x_center - half_outer + cfg.wall_thickness, y1, cfg.total_height()),
    );
    let right_wall = box_solid(
        Point3::new(x_center + half_outer - cfg.wall_thickness, y0, cfg.floor_thickness),
        Point3::new(x_center + half_outer, y1, cfg.total_height()),
    );

    vec![floor, left_wall, right_wall]
}

/// Plate sealing the open end of a tail channel at `y_edge`, flush
/// against the open face without entering the channel body.
pub fn end_cap(x_center: f64, y_edge: f64, direction: CapDirection, cfg: &PrintConfig) -> Solid {
    let half_outer = cfg.outer_width() / 2.0;
    let (y0, y1) = match direction {
        CapDirection::Positive => (y_edge, y_edge + cfg.wall_thickness),
        CapDirection::Negative => (y_edge - cfg.wall_thickness, y_edge),
    };
    box_solid(
        Point3::new(x_center - half_outer, y0, 0.0),
        Point3::new(x_center + half_outer, y1, cfg.total_height()),
    )
}

/// Thin floor-height plate closing the electrical gap between the two
/// end caps without touching either conductor.
pub fn side_bridge(x_center: f64, y0: f64, length: f64, cfg: &PrintConfig) -> Solid {
    box_solid(
        Point3::new(x_center - cfg.wall_thickness, y0, 0.0),
        Point3::new(x_center + cfg.wall_thickness, y0 + length, cfg.floor_thickness),
    )
}

/// Chamfered reinforcement block at a bar/tail T-junction.
pub fn corner_block(x_center: f64, y_center: f64, cfg: &PrintConfig) -> Solid {
    chamfered_block(
        x_center,
        y_center,
        cfg.outer_width(),
        cfg.corner_chamfer,
        0.0,
        cfg.total_height(),
    )
}
