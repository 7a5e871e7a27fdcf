//! # rs_pbrt_geometry
//!
//! [Rust][rust] crate with the geometric foundation of a physically
//! based renderer in the spirit of the [PBRT book][book]: points,
//! vectors, normals, rays (with differentials), axis-aligned bounding
//! boxes, 4x4 transformations, quaternions, and animated transforms.
//!
//! Everything else a renderer needs (shapes, acceleration
//! structures, cameras, samplers, integrators) is built on top of
//! these types and lives elsewhere. The [Shape][shape] trait
//! describes the minimal contract such shapes have to fulfil.
//!
//! [rust]: https://www.rust-lang.org
//! [book]: http://www.pbrt.org
//! [shape]: core/shape/trait.Shape.html

#[macro_use]
extern crate impl_ops;

pub mod core;
