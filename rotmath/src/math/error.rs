use thiserror::Error;

/// Invalid input passed to a quaternion operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuatError {
    /// Normalize and Inverse divide by the norm, which must not be zero.
    #[error("quaternion has zero norm")]
    ZeroNorm,
    /// A component is NaN or infinite, or the result does not fit in `f32`.
    #[error("quaternion norm is not finite")]
    NonFiniteNorm,
}
