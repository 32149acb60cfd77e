pub mod dot;
pub mod error;
pub mod mat44;
pub mod quat;
pub mod slerp;
pub mod vec3;

pub use dot::*;
pub use error::*;
pub use mat44::*;
pub use quat::*;
pub use slerp::*;
pub use vec3::*;
