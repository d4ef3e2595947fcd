//! Math-related constructs used by the other modules.

mod mat3;
mod vec2;
mod vec3;

pub(crate) use mat3::Mat3;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Scalar type used for every coordinate in the crate.
pub type Real = f64;
