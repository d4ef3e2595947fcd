use super::Real;

/// A basic 2-dimensional vector.
/// Used for projected polygon points and texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: Real,
    pub y: Real,
}

impl Vec2 {
    /// Constructs a new 2-dimensional vector using the provided values.
    #[inline(always)]
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// The 2D cross product (determinant) `self.x * other.y - self.y * other.x`.
    ///
    /// Its sign tells on which side of `self` the vector `other` lies.
    #[inline(always)]
    pub fn det(&self, other: &Self) -> Real {
        self.x * other.y - self.y * other.x
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl From<[Real; 2]> for Vec2 {
    #[inline(always)]
    fn from([x, y]: [Real; 2]) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "⟨{}, {}⟩", self.x, self.y)
    }
}
