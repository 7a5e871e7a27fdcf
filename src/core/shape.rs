//! Careful abstraction of geometric shapes in a ray tracer is a key
//! component of a clean system design, and shapes are the ideal
//! candidate for an object-oriented approach. All geometric
//! primitives implement a common interface, and the rest of the
//! renderer can use this interface without needing any details about
//! the underlying shape.
//!
//! Shapes are shared between many owners (the scene, acceleration
//! structures, area lights) through a **ShapeRef**. Shapes which can
//! not be intersected directly (for example a mesh description)
//! return **false** from **can_intersect()** and split themselves up
//! with **refine()**.

// std
use std::sync::Arc;
// others
use log::error;
// pbrt
use crate::core::error::{GeometryError, Result};
use crate::core::geometry::{Bounds3f, Ray};
use crate::core::pbrt::Float;
use crate::core::transform::Transform;

// see shape.h

/// Shared ownership handle for shapes.
pub type ShapeRef = Arc<dyn Shape>;

pub trait Shape: Send + Sync {
    /// Bounding box in the shape's object space.
    fn object_bound(&self) -> Bounds3f;
    fn object_to_world(&self) -> &Transform;
    fn world_bound(&self) -> Bounds3f {
        self.object_to_world().transform_bounds(&self.object_bound())
    }
    fn can_intersect(&self) -> bool {
        true
    }
    fn refine(&self) -> Result<Vec<ShapeRef>> {
        Err(GeometryError::NotRefinable)
    }
    /// On a hit closer than *ray.t_max* the ray's *t_max* is narrowed
    /// to the hit parameter, which is also returned.
    fn intersect(&self, _ray: &mut Ray) -> Option<Float> {
        error!("unimplemented Shape::intersect() method called (shape must be refined first)");
        None
    }
    fn intersect_p(&self, ray: &Ray) -> bool {
        let mut r: Ray = *ray;
        self.intersect(&mut r).is_some()
    }
    /// Whether surface normals are flipped to point inside.
    fn reverse_orientation(&self) -> bool;
    fn transform_swaps_handedness(&self) -> bool {
        self.object_to_world().swaps_handedness()
    }
}
