use super::{Real, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Mat3([Real; 3 * 3]);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    pub fn new(data: [Real; 3 * 3]) -> Self {
        Self(data)
    }
}

impl std::ops::Mul<Vec3> for &Mat3 {
    type Output = Vec3;

    fn mul(self, Vec3 { x, y, z }: Vec3) -> Vec3 {
        Vec3 {
            x: x * self.0[0] + y * self.0[1] + z * self.0[2],
            y: x * self.0[3] + y * self.0[4] + z * self.0[5],
            z: x * self.0[6] + y * self.0[7] + z * self.0[8],
        }
    }
}

impl std::ops::Mul<&Mat3> for &Mat3 {
    type Output = Mat3;

    fn mul(self, other: &Mat3) -> Mat3 {
        let mut data: [Real; 3 * 3] = [0.0; 3 * 3];
        for row in 0..3 {
            for col in 0..3 {
                data[row * 3 + col] = (0..3)
                    .map(|k| self.0[row * 3 + k] * other.0[k * 3 + col])
                    .sum::<Real>();
            }
        }
        Mat3(data)
    }
}
