//! Primitive solid builders: convex polygon extrusion, axis-aligned
//! boxes, chamfered blocks. Every builder returns one closed solid.

use nalgebra::{Point2, Point3, Vector3};

use crate::types::{Solid, Triangle};

/// Margin kept between a clamped chamfer and the degenerate half-size
/// limit, in millimeters.
const CHAMFER_MARGIN: f64 = 1e-3;

/// Extrude a convex, counter-clockwise 2D boundary through `[z0, z1]`.
///
/// Emits a fan-triangulated cap at each end (−Z at `z0`, +Z at `z1`)
/// and two triangles per boundary edge for the side wall. Fewer than
/// three points yields an empty solid.
pub fn extrude_polygon(points: &[Point2<f64>], z0: f64, z1: f64) -> Solid {
    let n = points.len();
    if n < 3 {
        return Solid::default();
    }

    let mut triangles = Vec::with_capacity(2 * (n - 2) + 2 * n);

    let at = |p: &Point2<f64>, z: f64| Point3::new(p.x, p.y, z);

    // Caps: fan from the first boundary point. Bottom winds clockwise
    // viewed from above so its normal faces −Z.
    for i in 1..n - 1 {
        triangles.push(Triangle {
            normal: -Vector3::z(),
            vertices: [at(&points[0], z0), at(&points[i + 1], z0), at(&points[i], z0)],
        });
        triangles.push(Triangle {
            normal: Vector3::z(),
            vertices: [at(&points[0], z1), at(&points[i], z1), at(&points[i + 1], z1)],
        });
    }

    // Side wall: one quad per edge, split into two triangles with a
    // shared outward normal from the edge cross product.
    for i in 0..n {
        let j = (i + 1) % n;
        let v0 = at(&points[i], z0);
        let v1 = at(&points[j], z0);
        let v2 = at(&points[j], z1);
        let v3 = at(&points[i], z1);
        let normal = face_normal(&v0, &v1, &v2);
        triangles.push(Triangle {
            normal,
            vertices: [v0, v1, v2],
        });
        triangles.push(Triangle {
            normal,
            vertices: [v0, v2, v3],
        });
    }

    Solid { triangles }
}

/// Unit normal of the triangle (a, b, c) from the edge cross product,
/// falling back to +Z for a degenerate triangle.
pub fn face_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len > 1e-12 {
        n / len
    } else {
        Vector3::z()
    }
}

/// Axis-aligned box between two opposite corners. 12 triangles.
pub fn box_solid(min: Point3<f64>, max: Point3<f64>) -> Solid {
    let boundary = [
        Point2::new(min.x, min.y),
        Point2::new(max.x, min.y),
        Point2::new(max.x, max.y),
        Point2::new(min.x, max.y),
    ];
    extrude_polygon(&boundary, min.z, max.z)
}

/// Square block of side `size` centered at `(cx, cy)`, with each corner
/// cut back by `chamfer`, extruded through `[z0, z1]`.
///
/// The chamfer is clamped strictly below `size / 2` so the octagon
/// never self-intersects; `chamfer <= 0` degrades to a plain box.
pub fn chamfered_block(cx: f64, cy: f64, size: f64, chamfer: f64, z0: f64, z1: f64) -> Solid {
    let half = size / 2.0;
    if chamfer <= 0.0 {
        return box_solid(
            Point3::new(cx - half, cy - half, z0),
            Point3::new(cx + half, cy + half, z1),
        );
    }
    let ch = chamfer.min(half - CHAMFER_MARGIN);

    let boundary = [
        Point2::new(cx - half + ch, cy - half),
        Point2::new(cx + half - ch, cy - half),
        Point2::new(cx + half, cy - half + ch),
        Point2::new(cx + half, cy + half - ch),
        Point2::new(cx + half - ch, cy + half),
        Point2::new(cx - half + ch, cy + half),
        Point2::new(cx - half, cy + half - ch),
        Point2::new(cx - half, cy - half + ch),
    ];
    extrude_polygon(&boundary, z0, z1)
}
