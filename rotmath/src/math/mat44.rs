use crate::math::*;
use bytemuck::{Pod, Zeroable};

/// 4x4 matrix, row-major, used with row vectors: `v' = v * M`, translation in the last row.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat44(pub [f32; 16]);

impl Mat44 {
    pub fn identity() -> Mat44 {
        Mat44([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn translate(t: Vec3) -> Mat44 {
        Mat44([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            t.x, t.y, t.z, 1.0,
        ])
    }

    /// Rotation matrix of a unit quaternion. For non-unit input the 3x3 block is scaled by the
    /// squared norm, matching what `Quat::rotate_vector` does with the same input.
    pub fn rotate(q: Quat) -> Mat44 {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Mat44([
            ww + xx - yy - zz,
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0, //
            2.0 * (xy - wz),
            ww - xx + yy - zz,
            2.0 * (yz + wx),
            0.0, //
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            ww - xx - yy + zz,
            0.0, //
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn transposed(&self) -> Mat44 {
        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                result[4 * j + i] = self.0[4 * i + j];
            }
        }
        Mat44(result)
    }

    pub fn rows(&self) -> [[f32; 4]; 4] {
        bytemuck::cast(self.0)
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[4 * row + col]
    }
}

pub fn make_rotate_matrix(q: Quat) -> Mat44 {
    Mat44::rotate(q)
}

// Mat44 = Mat44 * Mat44, `a` is applied first
impl std::ops::Mul for Mat44 {
    type Output = Mat44;

    fn mul(self, other: Mat44) -> Mat44 {
        &self * &other
    }
}

// Mat44 = &Mat44 * &Mat44
impl std::ops::Mul<&Mat44> for &Mat44 {
    type Output = Mat44;

    fn mul(self, other: &Mat44) -> Mat44 {
        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[4 * i + j] += self.0[4 * i + k] * other.0[4 * k + j];
                }
            }
        }
        Mat44(result)
    }
}
