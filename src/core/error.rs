//! Conditions the geometry layer signals explicitly instead of
//! letting Inf/NaN propagate.

use thiserror::Error;

// pbrt
use crate::core::geometry::Vector3f;

/// Configuration errors raised while building transforms or shapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// No non-zero pivot was found while inverting a matrix.
    #[error("singular matrix in matrix inversion")]
    SingularMatrix,

    /// The "up" vector passed to a look-at construction is parallel
    /// to the viewing direction.
    #[error(
        "\"up\" vector ({}, {}, {}) and viewing direction ({}, {}, {}) passed to LookAt are pointing in the same direction",
        .up.x, .up.y, .up.z, .dir.x, .dir.y, .dir.z
    )]
    DegenerateLookAt { up: Vector3f, dir: Vector3f },

    /// A shape that can not be intersected directly has no refinement.
    #[error("unimplemented Shape::refine() called")]
    NotRefinable,
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
