use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// One mesh triangle: outward unit normal plus three vertices wound
/// counter-clockwise when viewed along the normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

/// One independently closed convex solid.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    pub triangles: Vec<Triangle>,
}

impl Solid {
    /// Mean of all triangle vertices. Good enough as an interior point
    /// for convex solids, which is all this crate builds.
    pub fn centroid(&self) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        let mut count = 0;
        for tri in &self.triangles {
            for v in &tri.vertices {
                sum += v.coords;
                count += 1;
            }
        }
        if count == 0 {
            return Point3::origin();
        }
        Point3::from(sum / count as f64)
    }
}

/// The assembled frame: a bag of independently closed solids.
///
/// Deliberately NOT a merged manifold body. Adjacent solids overlap at
/// contact seams and no boolean union runs; slicers re-slice per layer
/// and tolerate this. Solid order is stable, so the flattened triangle
/// sequence is deterministic for identical inputs.
#[derive(Debug, Clone, Default)]
pub struct FrameMesh {
    pub solids: Vec<Solid>,
}

impl FrameMesh {
    pub fn triangle_count(&self) -> usize {
        self.solids.iter().map(|s| s.triangles.len()).sum()
    }

    /// All triangles in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.solids.iter().flat_map(|s| s.triangles.iter())
    }

    pub fn push(&mut self, solid: Solid) {
        self.solids.push(solid);
    }

    pub fn extend(&mut self, solids: impl IntoIterator<Item = Solid>) {
        self.solids.extend(solids);
    }
}

/// Which antenna feature a preview box belongs to. Drives viewport
/// coloring only; carries no geometric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Driver,
    Reflector,
    Boom,
    Corner,
    Bridge,
    EndCap,
}

/// Axis-aligned box descriptor for the low-fidelity preview tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewBox {
    /// Box center in model coordinates (X width, Y depth, Z print height).
    pub center: [f64; 3],
    /// Full extents along each axis.
    pub size: [f64; 3],
    pub feature: FeatureKind,
}

impl PreviewBox {
    /// Remap to the display convention: print height becomes the up
    /// axis and depth is negated. Presentation only — relative
    /// proportions are untouched.
    pub fn to_display_coords(&self) -> PreviewBox {
        PreviewBox {
            center: [self.center[0], self.center[2], -self.center[1]],
            size: [self.size[0], self.size[2], self.size[1]],
            feature: self.feature,
        }
    }
}
