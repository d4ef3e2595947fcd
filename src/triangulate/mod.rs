//! Everything related to triangulation.

pub mod earclipping;
mod ring;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use earclipping::{is_ear_blocked, is_reflex, triangulate, EarClipper, Error, Result};

use crate::polygon::{Polygon, Projection, Winding};

/// One output triangle: polygon indices `[tip, next, previous]` of the
/// clipped ear.
pub type Tri = [usize; 3];
pub type Triangulation = Vec<Tri>;

/// How the winding of the input ring is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindingPolicy {
    /// Derive the winding from the sign of the projected area.
    Detect,
    /// Trust the caller. A wrong guess makes every convex vertex look reflex,
    /// which ends in [`Error::NoEarFound`].
    Assume(Winding),
}

impl Default for WindingPolicy {
    fn default() -> Self {
        WindingPolicy::Detect
    }
}

/// Options for a triangulation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
    pub projection: Projection,
    pub winding: WindingPolicy,
}

impl Config {
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_winding(mut self, winding: WindingPolicy) -> Self {
        self.winding = winding;
        self
    }
}

/// Triangulates every polygon on its own, keeping the input order.
///
/// With the `parallel` feature the polygons are spread over the rayon
/// thread pool; each call still owns its working state.
pub fn triangulate_all(polygons: &[Polygon], config: &Config) -> Vec<Result<Triangulation>> {
    #[cfg(feature = "parallel")]
    let results = polygons
        .par_iter()
        .map(|polygon| triangulate(polygon, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = polygons
        .iter()
        .map(|polygon| triangulate(polygon, config))
        .collect();

    results
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn triangulate_all_keeps_order_and_errors() {
        let triangle: Polygon = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ]
        .into();
        let square: Polygon = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ]
        .into();
        let line: Polygon = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)].into();

        let results = triangulate_all(&[square, line, triangle], &Config::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(Vec::len), Ok(2));
        assert_eq!(results[1], Err(Error::TooFewVertices(2)));
        assert_eq!(results[2].as_ref().map(Vec::len), Ok(1));
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn parallel_batch_matches_sequential_calls() {
        let polygons: Vec<Polygon> = (3..200)
            .map(|n| {
                (0..n)
                    .map(|i| {
                        let theta = std::f64::consts::TAU * i as f64 / n as f64;
                        let radius = if i % 2 == 0 { 1.0 } else { 0.6 };
                        Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
                    })
                    .collect()
            })
            .collect();

        let config = Config::default();
        let results = triangulate_all(&polygons, &config);
        assert_eq!(results.len(), polygons.len());
        for (polygon, result) in polygons.iter().zip(&results) {
            assert_eq!(*result, triangulate(polygon, &config));
            assert_eq!(result.as_ref().map(Vec::len), Ok(polygon.len() - 2));
        }
    }

    #[test]
    fn config_builders() {
        let config = Config::default()
            .with_projection(Projection::XY)
            .with_winding(WindingPolicy::Assume(Winding::Clockwise));
        assert_eq!(config.projection, Projection::XY);
        assert_eq!(config.winding, WindingPolicy::Assume(Winding::Clockwise));
        assert_eq!(Config::default().projection, Projection::XZ);
        assert_eq!(Config::default().winding, WindingPolicy::Detect);
    }
}
