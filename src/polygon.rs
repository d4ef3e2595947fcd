//! The immutable input polygon and its planar projections.

use crate::math::{Mat3, Real, Vec2, Vec3};

/// Rotational direction of a polygon's vertex ring, as seen in its
/// projected 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Negative shoelace area. This is the orientation in which a convex
    /// vertex yields a negative determinant in the reflex test.
    Clockwise,
    /// Positive shoelace area.
    CounterClockwise,
}

impl Winding {
    /// Classifies a signed area. Zero and non-finite areas have no winding.
    pub fn of_area(area: Real) -> Option<Winding> {
        if !area.is_finite() || area == 0.0 {
            None
        } else if area < 0.0 {
            Some(Winding::Clockwise)
        } else {
            Some(Winding::CounterClockwise)
        }
    }

    /// The winding of the same ring traversed backwards.
    pub fn reversed(self) -> Winding {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }

    /// Factor that turns a determinant measured in this winding into one
    /// measured in the clockwise convention.
    #[inline(always)]
    pub(crate) fn sign(self) -> Real {
        match self {
            Winding::Clockwise => 1.0,
            Winding::CounterClockwise => -1.0,
        }
    }
}

/// Which two coordinates of a [`Vec3`] take part in triangulation.
///
/// The remaining coordinate is carried through unchanged; triangulation
/// only ever reads the projected points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Uses `(x, y)`; `z` is assumed constant.
    XY,
    /// Uses `(x, z)`; `y` is assumed constant.
    XZ,
    /// Uses `(y, z)`; `x` is assumed constant.
    YZ,
    /// Fits a plane through the polygon, rotates its normal onto +Y and uses
    /// the rotated `(x, z)`. Handles polygons lying in arbitrary planes.
    BestFit,
}

impl Default for Projection {
    fn default() -> Self {
        Projection::XZ
    }
}

impl Projection {
    /// Projects the given positions, keeping their order.
    pub fn project(&self, positions: &[Vec3]) -> Vec<Vec2> {
        match self {
            Projection::XY => positions.iter().map(|p| Vec2::new(p.x, p.y)).collect(),
            Projection::XZ => positions.iter().map(|p| Vec2::new(p.x, p.z)).collect(),
            Projection::YZ => positions.iter().map(|p| Vec2::new(p.y, p.z)).collect(),
            Projection::BestFit => {
                let tf = flatten_transform(positions);
                positions
                    .iter()
                    .map(|p| {
                        let Vec3 { x, z: y, .. } = &tf * *p;
                        Vec2 { x, y }
                    })
                    .collect()
            }
        }
    }
}

/// Rotation that flattens the polygon's best fit plane onto the XZ plane.
fn flatten_transform(positions: &[Vec3]) -> Mat3 {
    let normal = fit_plane_normal(positions);
    if normal == Vec3::ZERO {
        return Mat3::IDENTITY;
    }
    Vec3::unit_align(&normal, &Vec3::UNIT_Y)
}

/// Calculates the surface normal of the "best fit" plane for the given
/// positions using Newell's method. Returns the zero vector for degenerate
/// input.
pub(crate) fn fit_plane_normal(positions: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    let mut prev = match positions.last() {
        Some(&last) => last,
        None => return normal,
    };

    for &curr in positions {
        normal.x += (prev.z + curr.z) * (prev.y - curr.y);
        normal.y += (prev.x + curr.x) * (prev.z - curr.z);
        normal.z += (prev.y + curr.y) * (prev.x - curr.x);
        prev = curr;
    }
    normal.normalize();

    normal
}

/// Signed area of a closed 2D ring (shoelace formula). Negative for
/// clockwise rings.
pub fn signed_area(points: &[Vec2]) -> Real {
    let mut prev = match points.last() {
        Some(&last) => last,
        None => return 0.0,
    };

    let mut twice_area = 0.0;
    for &curr in points {
        twice_area += prev.det(&curr);
        prev = curr;
    }
    twice_area * 0.5
}

/// An ordered ring of vertex positions. The last vertex connects back to the
/// first; a vertex is identified by its index, which never changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    positions: Vec<Vec3>,
}

impl Polygon {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    #[inline(always)]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The 2D points triangulation operates on.
    pub fn project(&self, projection: Projection) -> Vec<Vec2> {
        projection.project(&self.positions)
    }

    /// Signed area of the projected ring.
    pub fn signed_area(&self, projection: Projection) -> Real {
        signed_area(&self.project(projection))
    }

    /// Winding of the projected ring, or `None` if its area is zero.
    pub fn winding(&self, projection: Projection) -> Option<Winding> {
        Winding::of_area(self.signed_area(projection))
    }

    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }
}

impl From<Vec<Vec3>> for Polygon {
    fn from(positions: Vec<Vec3>) -> Self {
        Self::new(positions)
    }
}

impl From<&[[Real; 3]]> for Polygon {
    fn from(positions: &[[Real; 3]]) -> Self {
        positions.iter().map(|&p| Vec3::from(p)).collect()
    }
}

impl std::iter::FromIterator<Vec3> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
