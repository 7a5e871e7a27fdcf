//! Almost all nontrivial graphics programs are built on a foundation
//! of geometric classes. These classes represent mathematical
//! constructs like points, vectors, and rays.
//!
//! # Points
//!
//! A **point** is a zero-dimensional location in 3D space. The
//! **Point3f** struct represents it using x, y, z coordinates with
//! respect to a coordinate system. Although the same representation
//! is used for vectors, the fact that a point represents a position
//! whereas a vector represents a direction leads to a number of
//! important differences in how they are treated: subtracting two
//! points gives a vector, adding a vector to a point gives a point,
//! and a point can not be normalized.
//!
//! ```rust
//! use rs_pbrt_geometry::core::geometry::{Point3f, Vector3f};
//!
//! let p = Point3f::new(1.0, 2.0, 3.0);
//! let v = Vector3f::new(0.5, 0.5, 0.5);
//! assert_eq!((p + v) - v, p);
//! ```
//!
//! # Vectors
//!
//! A **Vector3f** is a free direction without a fixed location.
//!
//! ```rust
//! use rs_pbrt_geometry::core::geometry::{vec3_cross_vec3, Vector3f};
//!
//! let x = Vector3f::new(1.0, 0.0, 0.0);
//! let y = Vector3f::new(0.0, 1.0, 0.0);
//! assert_eq!(vec3_cross_vec3(&x, &y), Vector3f::new(0.0, 0.0, 1.0));
//! ```
//!
//! # Normals
//!
//! A surface **normal** (or just normal) is a vector that is
//! perpendicular to a surface at a particular position. Although
//! normals are superficially similar to vectors, it is important to
//! distinguish between the two of them: because normals are defined
//! in terms of their relationship to a particular surface, they
//! behave differently than vectors in some situations, particularly
//! when applying transformations. There is no implicit conversion
//! between **Normal3f** and **Vector3f**, only explicit **From**
//! implementations.
//!
//! # Rays
//!
//! A **ray** is a semi-infinite line specified by its origin and
//! direction, limited to the parametric segment *[t_min, t_max]*.
//!
//! ## RayDifferentials
//!
//! **RayDifferential** contains additional information about two
//! auxiliary rays. These extra rays represent camera rays offset by
//! one sample in the *x* and *y* direction from the main ray on the
//! film plane. By determining the area that these three rays project
//! on an object being shaded, a texture can estimate an area to
//! average over for proper antialiasing. A **Ray** carries them as an
//! **`Option<RayDifferential>`**.
//!
//! # Bounding Boxes
//!
//! The bounding volume hierarchy and other parts of a renderer use
//! axis-aligned 3D boxes (**Bounds3f**) to bound geometric
//! primitives. The default box is empty (*p_min* at plus infinity,
//! *p_max* at minus infinity), which makes it the identity for the
//! union operations.
//!
//! ```rust
//! use rs_pbrt_geometry::core::geometry::{bnd3_union_pnt3f, Bounds3f, Point3f};
//!
//! let b = bnd3_union_pnt3f(&Bounds3f::default(), &Point3f::new(1.0, 2.0, 3.0));
//! assert_eq!(b.p_min, b.p_max);
//! ```

// std
use std::f32::consts::PI;
use std::ops;
use std::ops::{Index, IndexMut};
// others
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
// pbrt
use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, lerp};

// see geometry.h

#[derive(EnumIter, Debug, Copy, Clone)]
#[repr(u8)]
pub enum MinMaxEnum {
    Min = 0,
    Max = 1,
}

#[derive(EnumIter, Debug, Copy, Clone, PartialEq)]
#[repr(u8)]
pub enum XYZEnum {
    X = 0,
    Y = 1,
    Z = 2,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
    pub fn abs(&self) -> Vector3f {
        Vector3f {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new vector pointing in the same direction but with unit
    /// length. A zero-length vector results in NaN components.
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
}

impl Index<XYZEnum> for Vector3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl Index<usize> for Vector3f {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3f index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Vector3f {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3f index {} out of range", index),
        }
    }
}

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Vector3f {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Normal3f> for Vector3f {
    fn from(n: Normal3f) -> Self {
        Vector3f {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: Float, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a * b.x,
        y: a * b.y,
        z: a * b.z,
    }
});

impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    let inv: Float = 1.0 as Float / b;
    Vector3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op_ex!(-|a: &Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op!(+= |a: &mut Vector3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op!(-= |a: &mut Vector3f, b: Vector3f| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_op!(*= |a: &mut Vector3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_op!(/= |a: &mut Vector3f, b: Float| {
    let inv: Float = 1.0 as Float / b;
    a.x *= inv;
    a.y *= inv;
    a.z *= inv;
});

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them. A return value of zero means
/// both vectors are orthogonal, a value if one means they are
/// codirectional.
pub fn vec3_dot_vec3f(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Product of the Euclidean magnitudes of a vector (and a normal) and
/// the cosine of the angle between them.
pub fn vec3_dot_nrmf(v1: &Vector3f, n2: &Normal3f) -> Float {
    v1.x * n2.x + v1.y * n2.y + v1.z * n2.z
}

/// Computes the absolute value of the dot product.
pub fn vec3_abs_dot_vec3f(v1: &Vector3f, v2: &Vector3f) -> Float {
    vec3_dot_vec3f(v1, v2).abs()
}

/// Computes the absolute value of the dot product.
pub fn vec3_abs_dot_nrmf(v1: &Vector3f, n2: &Normal3f) -> Float {
    vec3_dot_nrmf(v1, n2).abs()
}

/// Given two vectors in 3D, the cross product is a vector that is
/// perpendicular to both of them.
pub fn vec3_cross_vec3(v1: &Vector3f, v2: &Vector3f) -> Vector3f {
    let v1x: f64 = v1.x as f64;
    let v1y: f64 = v1.y as f64;
    let v1z: f64 = v1.z as f64;
    let v2x: f64 = v2.x as f64;
    let v2y: f64 = v2.y as f64;
    let v2z: f64 = v2.z as f64;
    Vector3f {
        x: ((v1y * v2z) - (v1z * v2y)) as Float,
        y: ((v1z * v2x) - (v1x * v2z)) as Float,
        z: ((v1x * v2y) - (v1y * v2x)) as Float,
    }
}

/// Given a vectors and a normal in 3D, the cross product is a vector
/// that is perpendicular to both of them.
pub fn vec3_cross_nrm(v1: &Vector3f, n2: &Normal3f) -> Vector3f {
    vec3_cross_vec3(v1, &Vector3f::from(*n2))
}

/// Flip a vector so that it lies in the same hemisphere as another
/// vector.
pub fn vec3_faceforward_vec3(v: &Vector3f, v2: &Vector3f) -> Vector3f {
    if vec3_dot_vec3f(v, v2) < 0.0 as Float {
        -(*v)
    } else {
        *v
    }
}

/// Flip a vector so that it lies in the same hemisphere as a given
/// normal.
pub fn vec3_faceforward_nrm(v: &Vector3f, n2: &Normal3f) -> Vector3f {
    if vec3_dot_nrmf(v, n2) < 0.0 as Float {
        -(*v)
    } else {
        *v
    }
}

/// Return the largest coordinate value.
pub fn vec3_max_componentf(v: &Vector3f) -> Float {
    v.x.max(v.y.max(v.z))
}

/// Return the index of the component with the largest value.
pub fn vec3_max_dimensionf(v: &Vector3f) -> usize {
    if v.x > v.y {
        if v.x > v.z {
            0_usize
        } else {
            2_usize
        }
    } else if v.y > v.z {
        1_usize
    } else {
        2_usize
    }
}

/// Permute the coordinate values according to the povided
/// permutation.
pub fn vec3_permutef(v: &Vector3f, x: usize, y: usize, z: usize) -> Vector3f {
    Vector3f {
        x: v[x],
        y: v[y],
        z: v[z],
    }
}

/// Construct a local coordinate system given only a single 3D vector
/// (expected to be normalized).
pub fn vec3_coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2: Vector3f = if v1.x.abs() > v1.y.abs() {
        Vector3f {
            x: -v1.z,
            y: 0.0 as Float,
            z: v1.x,
        } / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f {
            x: 0.0 as Float,
            y: v1.z,
            z: -v1.y,
        } / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3: Vector3f = vec3_cross_vec3(v1, &v2);
    (v2, v3)
}

/// Direction for the given spherical coordinates with respect to the
/// standard basis.
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f {
        x: clamp_t(sin_theta, -1.0, 1.0) * phi.cos(),
        y: clamp_t(sin_theta, -1.0, 1.0) * phi.sin(),
        z: clamp_t(cos_theta, -1.0, 1.0),
    }
}

/// Direction for the given spherical coordinates with respect to the
/// coordinate frame *x*, *y*, *z*.
pub fn spherical_direction_vec3(
    sin_theta: Float,
    cos_theta: Float,
    phi: Float,
    x: &Vector3f,
    y: &Vector3f,
    z: &Vector3f,
) -> Vector3f {
    *x * (sin_theta * phi.cos()) + *y * (sin_theta * phi.sin()) + *z * cos_theta
}

/// Polar angle of a normalized direction.
pub fn spherical_theta(v: &Vector3f) -> Float {
    clamp_t(v.z, -1.0, 1.0).acos()
}

/// Azimuthal angle of a direction, in *[0, 2π)*.
pub fn spherical_phi(v: &Vector3f) -> Float {
    let p: Float = v.y.atan2(v.x);
    if p < 0.0 as Float {
        p + 2.0 as Float * PI
    } else {
        p
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
    pub fn abs(&self) -> Point3f {
        Point3f {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
}

impl From<Vector3f> for Point3f {
    fn from(v: Vector3f) -> Self {
        Point3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl_op_ex!(+|a: &Point3f, b: &Point3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(*|a: &Point3f, b: Float| -> Point3f {
    Point3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: Float, b: &Point3f| -> Point3f {
    Point3f {
        x: a * b.x,
        y: a * b.y,
        z: a * b.z,
    }
});

impl_op_ex!(/|a: &Point3f, b: Float| -> Point3f {
    let inv: Float = 1.0 as Float / b;
    Point3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op!(+= |a: &mut Point3f, b: Point3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op!(+= |a: &mut Point3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op!(-= |a: &mut Point3f, b: Vector3f| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_op!(*= |a: &mut Point3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_op!(/= |a: &mut Point3f, b: Float| {
    let inv: Float = 1.0 as Float / b;
    a.x *= inv;
    a.y *= inv;
    a.z *= inv;
});

impl Index<XYZEnum> for Point3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl IndexMut<XYZEnum> for Point3f {
    fn index_mut(&mut self, index: XYZEnum) -> &mut Float {
        match index {
            XYZEnum::X => &mut self.x,
            XYZEnum::Y => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl Index<usize> for Point3f {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3f index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Point3f {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3f index {} out of range", index),
        }
    }
}

/// Interpolate linearly between two points.
pub fn pnt3_lerp(t: Float, p0: &Point3f, p1: &Point3f) -> Point3f {
    *p0 * (1.0 as Float - t) + *p1 * t
}

/// The distance between two points is the length of the vector
/// between them.
pub fn pnt3_distancef(p1: &Point3f, p2: &Point3f) -> Float {
    (*p1 - *p2).length()
}

/// The distance squared between two points is the length of the
/// vector between them squared.
pub fn pnt3_distance_squaredf(p1: &Point3f, p2: &Point3f) -> Float {
    (*p1 - *p2).length_squared()
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Normal3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Normal3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Normal3f { x, y, z }
    }
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
    pub fn abs(&self) -> Normal3f {
        Normal3f {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    pub fn normalize(&self) -> Normal3f {
        *self / self.length()
    }
}

impl From<Vector3f> for Normal3f {
    fn from(v: Vector3f) -> Self {
        Normal3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl_op_ex!(+|a: &Normal3f, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Normal3f, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(*|a: &Normal3f, b: Float| -> Normal3f {
    Normal3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: Float, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a * b.x,
        y: a * b.y,
        z: a * b.z,
    }
});

impl_op_ex!(/|a: &Normal3f, b: Float| -> Normal3f {
    let inv: Float = 1.0 as Float / b;
    Normal3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op_ex!(-|a: &Normal3f| -> Normal3f {
    Normal3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op!(+= |a: &mut Normal3f, b: Normal3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op!(*= |a: &mut Normal3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_op!(/= |a: &mut Normal3f, b: Float| {
    let inv: Float = 1.0 as Float / b;
    a.x *= inv;
    a.y *= inv;
    a.z *= inv;
});

impl Index<XYZEnum> for Normal3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl Index<usize> for Normal3f {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Normal3f index {} out of range", index),
        }
    }
}

impl IndexMut<usize> for Normal3f {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Normal3f index {} out of range", index),
        }
    }
}

/// Given a normal and a vector in 3D, the cross product is a vector
/// that is perpendicular to both of them.
pub fn nrm_cross_vec3(n1: &Normal3f, v2: &Vector3f) -> Vector3f {
    vec3_cross_vec3(&Vector3f::from(*n1), v2)
}

/// Product of the Euclidean magnitudes of two normals and the cosine
/// of the angle between them.
pub fn nrm_dot_nrmf(n1: &Normal3f, n2: &Normal3f) -> Float {
    n1.x * n2.x + n1.y * n2.y + n1.z * n2.z
}

/// Product of the Euclidean magnitudes of a normal (and a vector) and
/// the cosine of the angle between them.
pub fn nrm_dot_vec3f(n1: &Normal3f, v2: &Vector3f) -> Float {
    n1.x * v2.x + n1.y * v2.y + n1.z * v2.z
}

/// Computes the absolute value of the dot product.
pub fn nrm_abs_dot_nrmf(n1: &Normal3f, n2: &Normal3f) -> Float {
    nrm_dot_nrmf(n1, n2).abs()
}

/// Computes the absolute value of the dot product.
pub fn nrm_abs_dot_vec3f(n1: &Normal3f, v2: &Vector3f) -> Float {
    nrm_dot_vec3f(n1, v2).abs()
}

/// Flip a surface normal so that it lies in the same hemisphere as a
/// given vector.
pub fn nrm_faceforward_vec3(n: &Normal3f, v: &Vector3f) -> Normal3f {
    if nrm_dot_vec3f(n, v) < 0.0 as Float {
        -(*n)
    } else {
        *n
    }
}

/// Flip a surface normal so that it lies in the same hemisphere as a
/// given normal.
pub fn nrm_faceforward_nrm(n: &Normal3f, n2: &Normal3f) -> Normal3f {
    if nrm_dot_nrmf(n, n2) < 0.0 as Float {
        -(*n)
    } else {
        *n
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds3f {
    pub p_min: Point3f,
    pub p_max: Point3f,
}

impl Default for Bounds3f {
    fn default() -> Bounds3f {
        let inf: Float = std::f32::INFINITY;
        Bounds3f {
            p_min: Point3f {
                x: inf,
                y: inf,
                z: inf,
            },
            p_max: Point3f {
                x: -inf,
                y: -inf,
                z: -inf,
            },
        }
    }
}

impl Bounds3f {
    pub fn new(p1: Point3f, p2: Point3f) -> Self {
        let p_min: Point3f = Point3f {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            z: p1.z.min(p2.z),
        };
        let p_max: Point3f = Point3f {
            x: p1.x.max(p2.x),
            y: p1.y.max(p2.y),
            z: p1.z.max(p2.z),
        };
        Bounds3f { p_min, p_max }
    }
    /// A box consisting of a single point.
    pub fn from_point(p: Point3f) -> Self {
        Bounds3f { p_min: p, p_max: p }
    }
    pub fn corner(&self, corner: u8) -> Point3f {
        assert!(corner < 8_u8);
        let x: Float = if corner & 1 == 0 {
            self.p_min.x
        } else {
            self.p_max.x
        };
        let y: Float = if corner & 2 == 0 {
            self.p_min.y
        } else {
            self.p_max.y
        };
        let z: Float = if corner & 4 == 0 {
            self.p_min.z
        } else {
            self.p_max.z
        };
        Point3f { x, y, z }
    }
    /// True if the box is inverted along any axis (for example the
    /// default box, or a box shrunk past zero by **expand()**).
    pub fn is_empty(&self) -> bool {
        self.p_min.x > self.p_max.x || self.p_min.y > self.p_max.y || self.p_min.z > self.p_max.z
    }
    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }
    pub fn surface_area(&self) -> Float {
        let d: Vector3f = self.diagonal();
        // 2 * (d.x * d.y + d.x * d.z + d.y * d.z)
        let r: Float = d.x * d.y + d.x * d.z + d.y * d.z;
        r + r // avoid '2 *'
    }
    pub fn volume(&self) -> Float {
        let d: Vector3f = self.diagonal();
        d.x * d.y * d.z
    }
    /// Index of the axis with the largest extent; on ties the earlier
    /// axis wins.
    pub fn maximum_extent(&self) -> usize {
        let d: Vector3f = self.diagonal();
        if d.x >= d.y && d.x >= d.z {
            0_usize
        } else if d.y >= d.z {
            1_usize
        } else {
            2_usize
        }
    }
    /// Do two boxes share at least one point (bounds are inclusive)?
    pub fn overlaps(&self, b: &Bounds3f) -> bool {
        let x: bool = self.p_max.x >= b.p_min.x && self.p_min.x <= b.p_max.x;
        let y: bool = self.p_max.y >= b.p_min.y && self.p_min.y <= b.p_max.y;
        let z: bool = self.p_max.z >= b.p_min.z && self.p_min.z <= b.p_max.z;
        x && y && z
    }
    pub fn inside(&self, p: &Point3f) -> bool {
        pnt3_inside_bnd3(p, self)
    }
    /// Grow the box by *delta* on every side. A negative *delta*
    /// shrinks it; shrinking past zero leaves an inverted box.
    pub fn expand(&mut self, delta: Float) {
        *self = bnd3_expand(self, delta);
    }
    /// Linear interpolation between the corners, one parameter per
    /// axis.
    pub fn lerp(&self, tx: Float, ty: Float, tz: Float) -> Point3f {
        Point3f {
            x: lerp(tx, self.p_min.x, self.p_max.x),
            y: lerp(ty, self.p_min.y, self.p_max.y),
            z: lerp(tz, self.p_min.z, self.p_max.z),
        }
    }
    /// Position of a point relative to the corners of the box: zero
    /// at *p_min*, one at *p_max*.
    pub fn offset(&self, p: &Point3f) -> Vector3f {
        let mut o: Vector3f = *p - self.p_min;
        if self.p_max.x > self.p_min.x {
            o.x /= self.p_max.x - self.p_min.x;
        }
        if self.p_max.y > self.p_min.y {
            o.y /= self.p_max.y - self.p_min.y;
        }
        if self.p_max.z > self.p_min.z {
            o.z /= self.p_max.z - self.p_min.z;
        }
        o
    }
    /// Center and radius of a sphere enclosing the box. Degenerate or
    /// inverted boxes get a radius of zero.
    pub fn bounding_sphere(&self) -> (Point3f, Float) {
        let center: Point3f = (self.p_min + self.p_max) / 2.0;
        let radius: Float = if pnt3_inside_bnd3(&center, self) {
            pnt3_distancef(&center, &self.p_max)
        } else {
            0.0
        };
        (center, radius)
    }
    /// Slab test of a ray against the box. Returns the parametric
    /// range *(t0, t1)* of the ray inside the box, clipped to
    /// *[ray.t_min, ray.t_max]*.
    pub fn intersect_b(&self, ray: &Ray) -> Option<(Float, Float)> {
        let mut t0: Float = ray.t_min;
        let mut t1: Float = ray.t_max;
        for i in XYZEnum::iter() {
            // update interval for _i_th bounding box slab
            let inv_ray_dir: Float = 1.0 as Float / ray.d[i];
            let mut t_near: Float = (self.p_min[i] - ray.o[i]) * inv_ray_dir;
            let mut t_far: Float = (self.p_max[i] - ray.o[i]) * inv_ray_dir;
            // update parametric interval from slab intersection $t$ values
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            if t_near > t0 {
                t0 = t_near;
            }
            if t_far < t1 {
                t1 = t_far;
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
    /// Faster slab test for traversal code which precomputes the
    /// reciprocal of the ray direction and its signs.
    pub fn intersect_p(&self, ray: &Ray, inv_dir: &Vector3f, dir_is_neg: &[u8; 3]) -> bool {
        let near = |neg: u8| -> MinMaxEnum {
            match neg {
                0 => MinMaxEnum::Min,
                _ => MinMaxEnum::Max,
            }
        };
        let far = |neg: u8| -> MinMaxEnum {
            match neg {
                0 => MinMaxEnum::Max,
                _ => MinMaxEnum::Min,
            }
        };
        // check for ray intersection against $x$ and $y$ slabs
        let mut t_min: Float = (self[near(dir_is_neg[0])].x - ray.o.x) * inv_dir.x;
        let mut t_max: Float = (self[far(dir_is_neg[0])].x - ray.o.x) * inv_dir.x;
        let ty_min: Float = (self[near(dir_is_neg[1])].y - ray.o.y) * inv_dir.y;
        let ty_max: Float = (self[far(dir_is_neg[1])].y - ray.o.y) * inv_dir.y;
        if t_min > ty_max || ty_min > t_max {
            return false;
        }
        if ty_min > t_min {
            t_min = ty_min;
        }
        if ty_max < t_max {
            t_max = ty_max;
        }
        // check for ray intersection against $z$ slab
        let tz_min: Float = (self[near(dir_is_neg[2])].z - ray.o.z) * inv_dir.z;
        let tz_max: Float = (self[far(dir_is_neg[2])].z - ray.o.z) * inv_dir.z;
        if t_min > tz_max || tz_min > t_max {
            return false;
        }
        if tz_min > t_min {
            t_min = tz_min;
        }
        if tz_max < t_max {
            t_max = tz_max;
        }
        (t_min < ray.t_max) && (t_max > ray.t_min)
    }
}

impl Index<MinMaxEnum> for Bounds3f {
    type Output = Point3f;
    fn index(&self, i: MinMaxEnum) -> &Point3f {
        match i {
            MinMaxEnum::Min => &self.p_min,
            _ => &self.p_max,
        }
    }
}

impl Index<usize> for Bounds3f {
    type Output = Point3f;
    fn index(&self, i: usize) -> &Point3f {
        match i {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => panic!("Bounds3f index {} out of range", i),
        }
    }
}

impl IndexMut<usize> for Bounds3f {
    fn index_mut(&mut self, i: usize) -> &mut Point3f {
        match i {
            0 => &mut self.p_min,
            1 => &mut self.p_max,
            _ => panic!("Bounds3f index {} out of range", i),
        }
    }
}

/// Given a bounding box and a point, the **bnd3_union_pnt3f()**
/// function returns a new bounding box that encompasses that point as
/// well as the original box.
pub fn bnd3_union_pnt3f(b: &Bounds3f, p: &Point3f) -> Bounds3f {
    let p_min: Point3f = Point3f {
        x: b.p_min.x.min(p.x),
        y: b.p_min.y.min(p.y),
        z: b.p_min.z.min(p.z),
    };
    let p_max: Point3f = Point3f {
        x: b.p_max.x.max(p.x),
        y: b.p_max.y.max(p.y),
        z: b.p_max.z.max(p.z),
    };
    Bounds3f { p_min, p_max }
}

/// Construct a new box that bounds the space encompassed by two other
/// bounding boxes.
pub fn bnd3_union_bnd3f(b1: &Bounds3f, b2: &Bounds3f) -> Bounds3f {
    let p_min: Point3f = Point3f {
        x: b1.p_min.x.min(b2.p_min.x),
        y: b1.p_min.y.min(b2.p_min.y),
        z: b1.p_min.z.min(b2.p_min.z),
    };
    let p_max: Point3f = Point3f {
        x: b1.p_max.x.max(b2.p_max.x),
        y: b1.p_max.y.max(b2.p_max.y),
        z: b1.p_max.z.max(b2.p_max.z),
    };
    Bounds3f { p_min, p_max }
}

/// Determine if a given point is inside the bounding box.
pub fn pnt3_inside_bnd3(p: &Point3f, b: &Bounds3f) -> bool {
    p.x >= b.p_min.x
        && p.x <= b.p_max.x
        && p.y >= b.p_min.y
        && p.y <= b.p_max.y
        && p.z >= b.p_min.z
        && p.z <= b.p_max.z
}

/// Is a 3D point inside a 3D bound (upper bounds excluded)?
pub fn pnt3_inside_exclusive(p: &Point3f, b: &Bounds3f) -> bool {
    p.x >= b.p_min.x
        && p.x < b.p_max.x
        && p.y >= b.p_min.y
        && p.y < b.p_max.y
        && p.z >= b.p_min.z
        && p.z < b.p_max.z
}

/// Pads the bounding box by a constant factor in all dimensions. The
/// corners are not reordered, so a negative delta larger than half
/// an extent inverts the box.
pub fn bnd3_expand(b: &Bounds3f, delta: Float) -> Bounds3f {
    let pad: Vector3f = Vector3f {
        x: delta,
        y: delta,
        z: delta,
    };
    Bounds3f {
        p_min: b.p_min - pad,
        p_max: b.p_max + pad,
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// origin
    pub o: Point3f,
    /// direction
    pub d: Vector3f,
    /// start of the valid segment along the ray
    pub t_min: Float,
    /// end of the valid segment, narrowed when closer hits are found
    pub t_max: Float,
    /// used for animations
    pub time: Float,
    /// recursion depth of the path this ray belongs to
    pub depth: i32,
    /// in C++: 'class RayDifferential : public Ray'
    pub differential: Option<RayDifferential>,
}

impl Default for Ray {
    fn default() -> Self {
        Ray {
            o: Point3f::default(),
            d: Vector3f::default(),
            t_min: 0.0,
            t_max: std::f32::INFINITY,
            time: 0.0,
            depth: 0,
            differential: None,
        }
    }
}

impl Ray {
    pub fn new(o: Point3f, d: Vector3f, t_min: Float, t_max: Float, time: Float, depth: i32) -> Self {
        let ray = Ray {
            o,
            d,
            t_min,
            t_max,
            time,
            depth,
            differential: None,
        };
        debug_assert!(!ray.has_nans(), "ray with NaN values: {:?}", ray);
        ray
    }
    /// Attach the two auxiliary rays to a main ray.
    pub fn with_differentials(ray: Ray, diff: RayDifferential) -> Ray {
        Ray {
            differential: Some(diff),
            ..ray
        }
    }
    /// A secondary ray starting at *o* which keeps the time of its
    /// parent and is one level deeper. Offsetting *o* off the surface
    /// is left to the caller.
    pub fn spawn_child(&self, o: Point3f, d: Vector3f) -> Ray {
        Ray::new(o, d, 0.0, std::f32::INFINITY, self.time, self.depth + 1)
    }
    // Point3f operator()(Float t) const { return o + d * t; }
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_min.is_nan() || self.t_max.is_nan()
    }
    pub fn has_differentials(&self) -> bool {
        self.differential.is_some()
    }
    // from class RayDifferential
    pub fn scale_differentials(&mut self, s: Float) {
        let o: Point3f = self.o;
        let d: Vector3f = self.d;
        if let Some(diff) = self.differential.as_mut() {
            diff.rx_origin = o + (diff.rx_origin - o) * s;
            diff.ry_origin = o + (diff.ry_origin - o) * s;
            diff.rx_direction = d + (diff.rx_direction - d) * s;
            diff.ry_direction = d + (diff.ry_direction - d) * s;
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RayDifferential {
    pub rx_origin: Point3f,
    pub ry_origin: Point3f,
    pub rx_direction: Vector3f,
    pub ry_direction: Vector3f,
}
