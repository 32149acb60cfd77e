use super::error::QuatError;
use super::vec3::*;
use bytemuck::{Pod, Zeroable};

/// Quaternion with vector part `(x, y, z)` and scalar part `w`.
///
/// Only unit quaternions represent rotations. Products and interpolations drift away from unit
/// norm over many steps; call [`Quat::normalized`] every so often when chaining them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Quat {
        Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 }
    }

    /// Rotation by `angle` radians about `axis`. The axis is normalized first; a zero axis
    /// yields `(0, 0, 0, cos(angle / 2))`, which is not a rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
        let axis = axis.normalized();
        let half = angle * 0.5;
        let sin = half.sin();
        let cos = half.cos();

        Self { x: axis.x * sin, y: axis.y * sin, z: axis.z * sin, w: cos }
    }

    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn vector(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    pub fn conjugate(self) -> Quat {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    pub fn norm_squared(self) -> f32 {
        super::dot(self, self)
    }

    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    // Divides by the largest component magnitude so squaring cannot overflow or underflow.
    fn rescaled(self) -> Result<(Quat, f32), QuatError> {
        if !self.as_array().iter().all(|c| c.is_finite()) {
            return Err(QuatError::NonFiniteNorm);
        }
        let scale = self.as_array().iter().fold(0.0f32, |m, c| m.max(c.abs()));
        if scale == 0.0 {
            return Err(QuatError::ZeroNorm);
        }
        Ok((self / scale, scale))
    }

    pub fn normalized(self) -> Result<Quat, QuatError> {
        let (unit_max, _) = self.rescaled()?;
        Ok(unit_max / unit_max.norm())
    }

    /// `conjugate / |q|²`. For unit quaternions this equals the conjugate.
    pub fn inverse(self) -> Result<Quat, QuatError> {
        let (unit_max, scale) = self.rescaled()?;
        let inverse = unit_max.conjugate() / unit_max.norm_squared() / scale;
        if !inverse.as_array().iter().all(|c| c.is_finite()) {
            return Err(QuatError::NonFiniteNorm);
        }
        Ok(inverse)
    }

    /// `q * (v, 0) * conj(q)`. Expects a unit quaternion; otherwise the result is also scaled by |q|².
    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        let p = Quat { x: v.x, y: v.y, z: v.z, w: 0.0 };
        (self * p * self.conjugate()).vector()
    }
}

pub fn rotate_vector(v: Vec3, q: Quat) -> Vec3 {
    q.rotate_vector(v)
}

// Component-wise lerp, not renormalized.
pub fn lerp_quat(q0: Quat, q1: Quat, t: f32) -> Quat {
    q0 * (1.0 - t) + q1 * t
}

// Hamilton product: lhs * rhs
impl std::ops::Mul for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

// Quat * f32
impl std::ops::Mul<f32> for Quat {
    type Output = Quat;
    fn mul(self, scalar: f32) -> Quat {
        Quat { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar, w: self.w * scalar }
    }
}

// Quat / f32
impl std::ops::Div<f32> for Quat {
    type Output = Quat;
    fn div(self, scalar: f32) -> Quat {
        Quat { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar, w: self.w / scalar }
    }
}

// f32 * Quat
impl std::ops::Mul<Quat> for f32 {
    type Output = Quat;
    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

// Quat + Quat
impl std::ops::Add for Quat {
    type Output = Quat;
    fn add(self, other: Quat) -> Quat {
        Quat { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

// Quat - Quat
impl std::ops::Sub for Quat {
    type Output = Quat;
    fn sub(self, other: Quat) -> Quat {
        Quat { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

// -Quat, same rotation
impl std::ops::Neg for Quat {
    type Output = Quat;
    fn neg(self) -> Quat {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}
