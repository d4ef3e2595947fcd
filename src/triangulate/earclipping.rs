//! Everything related to triangulation using ear clipping.

use log::{debug, trace, warn};

use super::ring::ActiveRing;
use super::{Config, Tri, Triangulation, WindingPolicy};
use crate::math::Vec2;
use crate::polygon::{signed_area, Polygon, Winding};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Errors related to triangulation using ear clipping.
pub enum Error {
    #[error("polygon has {0} vertices, at least 3 are required")]
    TooFewVertices(usize),
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
    #[error("polygon winding cannot be determined: its projected area is zero")]
    InvalidWinding,
    #[error("no ear found in a full pass over the {remaining} remaining vertices")]
    NoEarFound { remaining: usize },
    #[error("vertex index {0} does not fit a 32-bit index buffer")]
    IndexOverflow(usize),
}

struct Triangle([Vec2; 3]);

impl Triangle {
    /// Checks whether the given point lies inside the triangle or on its
    /// boundary.
    fn contains(&self, p: Vec2) -> bool {
        let Triangle([a, b, c]) = *self;

        let d1 = (b - a).det(&(p - a));
        let d2 = (c - b).det(&(p - b));
        let d3 = (a - c).det(&(p - c));

        (d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0) || (d1 <= 0.0 && d2 <= 0.0 && d3 <= 0.0)
    }
}

/// Determines whether `cur` is a reflex vertex of the ring `prev → cur → next`.
///
/// Collinear vertices count as reflex, so they are never clipped until one
/// of their neighbors goes away.
#[inline(always)]
pub fn is_reflex(prev: Vec2, cur: Vec2, next: Vec2, winding: Winding) -> bool {
    (next - cur).det(&(prev - cur)) * winding.sign() >= 0.0
}

/// Checks whether any of the `reflex` vertices lies inside or on the
/// candidate ear `(cur, next, prev)`.
///
/// Only reflex vertices need testing: a convex vertex of the remaining
/// boundary can never lie inside one of its ears.
pub fn is_ear_blocked<I>(cur: usize, next: usize, prev: usize, reflex: I, points: &[Vec2]) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let tri = Triangle([points[cur], points[next], points[prev]]);
    reflex
        .into_iter()
        .filter(|&r| r != cur && r != next && r != prev)
        .any(|r| tri.contains(points[r]))
}

/// Iterator clipping one ear of a [`Polygon`] per step.
///
/// Every item is a triangle `[cursor, next, previous]` of polygon indices,
/// in the polygon's own winding. On malformed input a single `Err` is
/// yielded, after which the iterator is exhausted.
///
/// The scan starts at vertex 0. After a clip it resumes at the clipped ear's
/// successor, so the same polygon always yields the same triangles.
#[derive(Debug, Clone)]
pub struct EarClipper {
    points: Vec<Vec2>,
    ring: ActiveRing,
    winding: Winding,
    cursor: usize,
    /// Ring positions visited since the last clip.
    stalled: usize,
    failed: bool,
}

impl EarClipper {
    /// Constructs an `EarClipper` for the given polygon.
    ///
    /// Fails with [`Error::TooFewVertices`] or [`Error::NonFiniteVertex`] for
    /// unusable input, and with [`Error::InvalidWinding`] if the winding has
    /// to be detected but the projected polygon has no area.
    pub fn new(polygon: &Polygon, config: &Config) -> Result<Self> {
        let n = polygon.len();
        if n < 3 {
            return Err(Error::TooFewVertices(n));
        }
        if let Some(idx) = polygon.positions().iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteVertex(idx));
        }

        let points = polygon.project(config.projection);
        let winding = match config.winding {
            WindingPolicy::Detect => {
                Winding::of_area(signed_area(&points)).ok_or(Error::InvalidWinding)?
            }
            WindingPolicy::Assume(winding) => winding,
        };
        debug!(
            "triangulating {} vertices, projection {:?}, winding {:?}",
            n, config.projection, winding
        );

        let mut ring = ActiveRing::new(n);
        for idx in 0..n {
            let reflex = is_reflex(
                points[ring.previous(idx)],
                points[idx],
                points[ring.next(idx)],
                winding,
            );
            ring.set_reflex(idx, reflex);
        }

        Ok(EarClipper {
            points,
            ring,
            winding,
            cursor: n - 1,
            stalled: 0,
            failed: false,
        })
    }

    /// The winding the reflex test runs with.
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Number of vertices still on the boundary.
    pub fn remaining(&self) -> usize {
        self.ring.count()
    }

    /// Number of remaining vertices currently classified as reflex.
    pub fn reflex_count(&self) -> usize {
        self.ring.reflex_indices().count()
    }

    fn classify(&self, idx: usize) -> bool {
        is_reflex(
            self.points[self.ring.previous(idx)],
            self.points[idx],
            self.points[self.ring.next(idx)],
            self.winding,
        )
    }

    /// Re-classifies `idx` after one of its neighbors was clipped. Only reflex
    /// vertices can change: removing a neighbor never makes a convex vertex
    /// reflex.
    fn update_reflex(&mut self, idx: usize) {
        if !self.ring.is_reflex(idx) || self.classify(idx) {
            return;
        }
        trace!("vertex {} became convex", idx);
        self.ring.set_reflex(idx, false);
    }

    fn clip_next(&mut self) -> Result<Tri> {
        loop {
            let remaining = self.ring.count();
            if self.stalled >= remaining {
                warn!(
                    "no ear found after visiting all {} remaining vertices",
                    remaining
                );
                return Err(Error::NoEarFound { remaining });
            }

            self.cursor = self.ring.next(self.cursor);
            self.stalled += 1;

            let cur = self.cursor;
            let next = self.ring.next(cur);
            let prev = self.ring.previous(cur);

            if self.ring.is_reflex(cur)
                || is_ear_blocked(cur, next, prev, self.ring.reflex_indices(), &self.points)
            {
                continue;
            }

            trace!("clipping ear {} between {} and {}", cur, prev, next);
            self.ring.remove(cur);
            self.update_reflex(next);
            self.update_reflex(prev);

            // The next step advances to `next`, whose neighborhood just changed.
            self.cursor = prev;
            self.stalled = 0;

            return Ok([cur, next, prev]);
        }
    }
}

impl Iterator for EarClipper {
    type Item = Result<Tri>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.ring.count() < 3 {
            return None;
        }

        let tri = self.clip_next();
        self.failed = tri.is_err();
        Some(tri)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let count = self.ring.count().saturating_sub(2);
        (count.min(1), Some(count))
    }
}

impl std::iter::FusedIterator for EarClipper {}

/// Triangulates the given polygon.
///
/// Returns exactly `polygon.len() - 2` triangles for a simple polygon, or the
/// first error encountered. No partial triangulation is ever returned.
pub fn triangulate(polygon: &Polygon, config: &Config) -> Result<Triangulation> {
    EarClipper::new(polygon, config)?.collect()
}
