use super::quat::Quat;
use super::vec3::Vec3;

/// Component-wise inner product.
pub trait Dot {
    fn dot(self, rhs: Self) -> f32;
}

pub fn dot<V: Dot>(v1: V, v2: V) -> f32 {
    v1.dot(v2)
}

fn dot_components<const N: usize>(a: &[f32; N], b: &[f32; N]) -> f32 {
    a.iter().zip(b.iter()).map(|(a, b)| a * b).sum()
}

// a · b
impl Dot for Vec3 {
    fn dot(self, rhs: Vec3) -> f32 {
        dot_components(self.as_array(), rhs.as_array())
    }
}

// a · b, all four components
impl Dot for Quat {
    fn dot(self, rhs: Quat) -> f32 {
        dot_components(self.as_array(), rhs.as_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        // 4 + 10 + 18
        assert_eq!(dot(a, b), 32.0);
        assert_eq!(dot(a, b), dot(b, a));
    }

    #[test]
    fn test_quat_dot() {
        let a = Quat::new(2.0, 3.0, 4.0, 1.0);
        let b = Quat::new(1.0, 3.0, 5.0, 2.0);
        // 2 + 9 + 20 + 2
        assert_eq!(dot(a, b), 33.0);
        assert_eq!(dot(Quat::identity(), Quat::identity()), 1.0);
    }

    #[test]
    fn test_orthogonal_dot_is_zero() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(dot(x, y), 0.0);
    }
}
