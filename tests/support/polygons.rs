#![allow(dead_code)]

use earclip::polygon::signed_area;
use earclip::{Polygon, Projection, Real, Tri, Vec2, Vec3};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Builds a polygon in the XZ plane at height `y = 0`.
pub fn xz_polygon(coords: &[[Real; 2]]) -> Polygon {
    coords.iter().map(|&[x, z]| Vec3::new(x, 0.0, z)).collect()
}

/// The eight vertex demo outline.
pub fn fixture_octagon() -> Polygon {
    xz_polygon(&[
        [-4.0, 2.0],
        [-1.0, 4.0],
        [0.0, -1.0],
        [2.0, 2.0],
        [4.0, -1.0],
        [2.0, -3.0],
        [-3.0, 0.0],
        [-2.0, 1.0],
    ])
}

/// The demo outline with an extra notch vertex; vertices 6, 2 and 8 lie on
/// one line.
pub fn fixture_collinear() -> Polygon {
    xz_polygon(&[
        [-4.0, 2.0],
        [-1.0, 4.0],
        [0.0, -1.0],
        [2.0, 2.0],
        [2.0, 1.0],
        [4.0, -1.0],
        [2.0, -3.0],
        [-3.0, 0.0],
        [-2.0, 1.0],
    ])
}

/// Triangles of the hand-made triangulation shipped with the demo outline.
pub const FIXTURE_OCTAGON_TRIANGLES: [Tri; 6] = [
    [0, 1, 7],
    [1, 2, 7],
    [2, 6, 7],
    [3, 4, 2],
    [4, 5, 2],
    [5, 6, 2],
];

/// A comb with `teeth` spikes pointing towards +z. Every notch between two
/// teeth is a reflex vertex.
pub fn comb(teeth: usize) -> Polygon {
    let mut coords = vec![[0.0, 0.0], [2.0 * teeth as Real, 0.0]];
    for i in (1..=teeth).rev() {
        coords.push([2.0 * i as Real, 3.0]);
        coords.push([2.0 * i as Real - 1.0, 1.0]);
    }
    coords.push([0.0, 3.0]);
    xz_polygon(&coords)
}

/// Regular convex polygon with `n` vertices, counter-clockwise in XZ.
pub fn regular_polygon(n: usize, radius: Real) -> Polygon {
    (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as Real / n as Real;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// Random star-shaped polygon around the origin. Each vertex lives in its
/// own angular sector, which keeps the ring simple. The y coordinate is
/// constant and random.
pub fn random_star_polygon(n: usize, seed: u64) -> Polygon {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_star_polygon_with_rng(n, &mut rng)
}

pub fn random_star_polygon_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Polygon {
    let y: Real = rng.gen_range(-10.0..10.0);
    let clockwise: bool = rng.gen();
    let mut positions: Vec<Vec3> = (0..n)
        .map(|i| {
            let theta = 2.0 * PI * (i as Real + rng.gen_range(0.05..0.95)) / n as Real;
            let radius: Real = rng.gen_range(0.1..1.0);
            Vec3::new(radius * theta.cos(), y, radius * theta.sin())
        })
        .collect();
    if clockwise {
        positions.reverse();
    }
    Polygon::new(positions)
}

pub fn reversed(polygon: &Polygon) -> Polygon {
    polygon.positions().iter().rev().copied().collect()
}

/// Signed area of one output triangle in the given projection.
pub fn triangle_area(points: &[Vec2], [a, b, c]: Tri) -> Real {
    signed_area(&[points[a], points[b], points[c]])
}

/// Whether `p` lies strictly inside the triangle `abc`.
pub fn strictly_inside(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).det(&(p - a));
    let d2 = (c - b).det(&(p - b));
    let d3 = (a - c).det(&(p - c));
    (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
}

/// Rotates a triangle so its smallest index comes first, keeping its winding.
pub fn canonical(tri: Tri) -> Tri {
    let [a, b, c] = tri;
    if a <= b && a <= c {
        [a, b, c]
    } else if b <= a && b <= c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}

pub fn project_xz(polygon: &Polygon) -> Vec<Vec2> {
    polygon.project(Projection::XZ)
}
