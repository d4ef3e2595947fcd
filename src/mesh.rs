//! Renderable surfaces built from a triangulated polygon.

use crate::math::{Real, Vec2, Vec3};
use crate::polygon::Polygon;
use crate::triangulate::{self, Config, Tri};

/// Axis-aligned bounding box of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Bounding box encapsulating every point, or `None` for no points.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds {
            min: *first,
            max: *first,
        };
        for p in rest {
            bounds.encapsulate(*p);
        }
        Some(bounds)
    }

    /// Grows the box so it contains `p`.
    pub fn encapsulate(&mut self, p: Vec3) {
        self.min = Vec3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Vec3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }
}

/// Axis-aligned rectangle in projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let rect = rest.iter().fold(
            Rect {
                min: *first,
                max: *first,
            },
            |rect, p| Rect {
                min: Vec2::new(rect.min.x.min(p.x), rect.min.y.min(p.y)),
                max: Vec2::new(rect.max.x.max(p.x), rect.max.y.max(p.y)),
            },
        );
        Some(rect)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// One texture coordinate per point: the point's position inside the
/// bounding rectangle of all points, remapped to `[0, 1]` on each axis.
/// An axis without extent maps to 0.
pub fn generate_uvs(points: &[Vec2]) -> Vec<Vec2> {
    let rect = match Rect::from_points(points) {
        Some(rect) => rect,
        None => return Vec::new(),
    };
    let size = rect.size();
    let remap = |value: Real, min: Real, extent: Real| {
        if extent > 0.0 {
            (value - min) / extent
        } else {
            0.0
        }
    };

    points
        .iter()
        .map(|p| {
            Vec2::new(
                remap(p.x, rect.min.x, size.x),
                remap(p.y, rect.min.y, size.y),
            )
        })
        .collect()
}

/// Area-weighted vertex normals: every triangle adds its (unnormalized)
/// face normal to its three corners.
pub fn vertex_normals(positions: &[Vec3], triangles: &[Tri]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for &[a, b, c] in triangles {
        let face = (positions[b] - positions[a]).cross(&(positions[c] - positions[a]));
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    for normal in normals.iter_mut() {
        normal.normalize();
    }
    normals
}

/// Flattens triangles into a 32-bit index buffer, three entries per triangle.
///
/// Fails with [`triangulate::Error::IndexOverflow`] on the first index above
/// `u32::MAX`.
pub fn index_buffer(triangles: &[Tri]) -> triangulate::Result<Vec<u32>> {
    triangles
        .iter()
        .flatten()
        .map(|&idx| u32::try_from(idx).map_err(|_| triangulate::Error::IndexOverflow(idx)))
        .collect()
}

/// Indexed triangle surface of a single polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    /// Three entries per triangle. Polygons with more than `u32::MAX + 1`
    /// vertices cannot be meshed.
    pub indices: Vec<u32>,
    pub bounds: Bounds,
}

impl Mesh {
    /// Triangulates the polygon and builds its mesh. UVs are generated in
    /// the same projection the triangulation used.
    pub fn from_polygon(polygon: &Polygon, config: &Config) -> triangulate::Result<Self> {
        let triangles = triangulate::triangulate(polygon, config)?;
        let uvs = generate_uvs(&polygon.project(config.projection));
        Self::build(polygon.positions().to_vec(), &triangles, uvs)
    }

    fn build(
        positions: Vec<Vec3>,
        triangles: &[Tri],
        uvs: Vec<Vec2>,
    ) -> triangulate::Result<Self> {
        let indices = index_buffer(triangles)?;
        let normals = vertex_normals(&positions, triangles);
        let bounds = Bounds::from_points(&positions).unwrap_or(Bounds {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        });

        Ok(Mesh {
            positions,
            normals,
            uvs,
            indices,
            bounds,
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}
