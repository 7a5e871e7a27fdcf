//! The core of the geometry layer: value types and the operations
//! every other renderer component relies on.

pub mod error;
pub mod geometry;
pub mod pbrt;
pub mod quaternion;
pub mod shape;
pub mod transform;
