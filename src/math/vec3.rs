use super::{Mat3, Real};

/// A basic 3-dimensional vector.
/// Used by [`Polygon`] to represent vertex positions, and by [`Mesh`] for
/// normals.
///
/// [`Polygon`]: crate::polygon::Polygon
/// [`Mesh`]: crate::mesh::Mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const UNIT_X: Vec3 = Vec3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    pub const UNIT_Y: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Constructs a new 3-dimensional vector using the provided values.
    #[inline(always)]
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Calculates the dot product between two 3-dimensional vectors.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the squared magnitude of the vector.
    #[inline(always)]
    pub fn squared_magnitude(&self) -> Real {
        self.dot(self)
    }

    /// Normalizes the vector. The zero vector is left untouched.
    #[inline(always)]
    pub fn normalize(&mut self) {
        let mag = self.squared_magnitude();
        if mag == 0.0 {
            return;
        }
        let mag = mag.sqrt();
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
    }

    /// Calculates the cross product between two 3-dimensional vectors.
    pub fn cross(&self, other: &Vec3) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Rotation matrix taking the unit vector `u1` onto the unit vector `u2`.
    pub(crate) fn unit_align(u1: &Self, u2: &Self) -> Mat3 {
        if u1.dot(u2) < 0.0 {
            // Go through -u2 so the rotation below never divides by ~0.
            return &Self::half_turn(u2) * &Self::rotate_onto(u1, &-*u2);
        }
        Self::rotate_onto(u1, u2)
    }

    /// Rodrigues rotation of `u1` onto `u2`, well conditioned for `u1 · u2 >= 0`.
    fn rotate_onto(u1: &Self, u2: &Self) -> Mat3 {
        let Vec3 { x, y, z } = u1.cross(u2);

        let c = u1.dot(u2);
        let k = 1.0 / (1.0 + c);

        Mat3::new([
            (x * x * k) + c,
            (y * x * k) - z,
            (z * x * k) + y,
            (x * y * k) + z,
            (y * y * k) + c,
            (z * y * k) - x,
            (x * z * k) - y,
            (y * z * k) + x,
            (z * z * k) + c,
        ])
    }

    /// Half turn about an axis perpendicular to `u`, mapping `u` onto `-u`.
    fn half_turn(u: &Self) -> Mat3 {
        let helper = if u.x.abs() < 0.9 { Vec3::UNIT_X } else { Vec3::UNIT_Y };
        let mut a = u.cross(&helper);
        a.normalize();
        let Vec3 { x, y, z } = a;

        Mat3::new([
            2.0 * x * x - 1.0,
            2.0 * x * y,
            2.0 * x * z,
            2.0 * y * x,
            2.0 * y * y - 1.0,
            2.0 * y * z,
            2.0 * z * x,
            2.0 * z * y,
            2.0 * z * z - 1.0,
        ])
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    #[inline(always)]
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl From<[Real; 3]> for Vec3 {
    #[inline(always)]
    fn from([x, y, z]: [Real; 3]) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "⟨{}, {}, {}⟩", self.x, self.y, self.z)
    }
}
