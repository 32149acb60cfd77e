use super::dot::dot;
use super::quat::*;

/// Below this `sin(theta)` the two inputs are treated as the same orientation and blended linearly.
pub const SLERP_EPSILON: f32 = 1e-6;

/// Spherical linear interpolation from `q0` (t = 0) to `q1` (t = 1) along the shorter arc.
///
/// When `q0 · q1 < 0` the interpolation heads for `-q1`, which is the same rotation, so
/// `slerp(q0, q1, 1.0)` may come back as `-q1`. The result is not renormalized.
pub fn slerp(q0: Quat, q1: Quat, t: f32) -> Quat {
    let mut dot = dot(q0, q1);
    let mut q1 = q1;
    if dot < 0.0 {
        q1 = -q1;
        dot = -dot;
    }

    // dot can land slightly above 1 after rounding
    let theta = dot.clamp(-1.0, 1.0).acos();
    let sin_theta = theta.sin();
    if sin_theta < SLERP_EPSILON {
        return lerp_quat(q0, q1, t);
    }

    let scale0 = ((1.0 - t) * theta).sin() / sin_theta;
    let scale1 = (t * theta).sin() / sin_theta;
    scale0 * q0 + scale1 * q1
}
