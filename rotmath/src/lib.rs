//! Rotation math: 3D vectors, quaternions and 4x4 rotation matrices.
//!
//! Everything lives in [`math`] as plain value types and free functions.

pub mod math;
