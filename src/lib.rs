//! Ear clipping triangulation of simple planar polygons.
//!
//! A [`Polygon`] is an ordered ring of 3D positions. Two of the three axes,
//! chosen by a [`Projection`], form the plane the ring is triangulated in.
//! The result is a list of index triples into the polygon, `n - 2` of them
//! for a simple polygon of `n` vertices, each wound like the input.
//!
//! ```
//! use earclip::{triangulate, Config, Polygon, Vec3};
//!
//! let square: Polygon = vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 1.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! ]
//! .into();
//!
//! let triangles = triangulate(&square, &Config::default()).unwrap();
//! assert_eq!(triangles, vec![[0, 1, 3], [1, 2, 3]]);
//! ```
//!
//! With the `parallel` feature, [`triangulate_all`] spreads a batch of
//! polygons over the rayon thread pool. Its tests only run when the feature
//! is enabled: `cargo test --features parallel`.

pub mod math;
pub mod mesh;
pub mod polygon;
pub mod triangulate;

pub use math::{Real, Vec2, Vec3};
pub use mesh::{Bounds, Mesh};
pub use polygon::{Polygon, Projection, Winding};
pub use triangulate::{
    triangulate, triangulate_all, Config, EarClipper, Error, Tri, Triangulation, WindingPolicy,
};
