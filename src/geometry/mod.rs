//! Vectors for relativistic kinematics

mod four_vector;
pub use four_vector::*;

mod three_vector;
pub use three_vector::*;
