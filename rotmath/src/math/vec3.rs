use super::mat44::Mat44;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    pub fn length(self) -> f32 {
        super::dot(self, self).sqrt()
    }

    /// Unit-length copy of the vector. A zero vector stays zero instead of turning into NaNs.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            return Vec3::zero();
        }
        self / len
    }
}

// a x b
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

// lerp(a, b, t)
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

/// Row vector `[x y z 1]` times `m`, i.e. the 3x3 block applied first and the last row added
/// as translation. Projective results are divided by `w`; a zero `w` is left undivided.
pub fn transform(v: Vec3, m: &Mat44) -> Vec3 {
    let r = m.rows();
    let x = v.x * r[0][0] + v.y * r[1][0] + v.z * r[2][0] + r[3][0];
    let y = v.x * r[0][1] + v.y * r[1][1] + v.z * r[2][1] + r[3][1];
    let z = v.x * r[0][2] + v.y * r[1][2] + v.z * r[2][2] + r[3][2];
    let w = v.x * r[0][3] + v.y * r[1][3] + v.z * r[2][3] + r[3][3];
    if w == 0.0 || w == 1.0 {
        Vec3 { x, y, z }
    } else {
        Vec3 { x: x / w, y: y / w, z: z / w }
    }
}

// -Vec3
impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

// Vec3 + Vec3
impl std::ops::Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

// Vec3 - Vec3
impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

// Vec3 * f32
impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, scalar: f32) -> Vec3 {
        Vec3 { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

// f32 * Vec3
impl std::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, vec: Vec3) -> Vec3 {
        vec * self
    }
}

// Vec3 / f32
impl std::ops::Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, scalar: f32) -> Vec3 {
        Vec3 { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}
