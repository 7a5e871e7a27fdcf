//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class.
//!
//! ## Transformations
//!
//! In general a transformation is a mapping from points to points and
//! from vectors to vectors. When a new **Transform** is created, it
//! defaults to the *identity transformation* - the transformation
//! that maps each point and each vector to itself. A transform always
//! carries its inverse, which is computed once on construction.
//!
//! ```rust
//! use rs_pbrt_geometry::core::geometry::{Point3f, Vector3f};
//! use rs_pbrt_geometry::core::transform::Transform;
//!
//! let t = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0)) * Transform::scale(2.0, 2.0, 2.0);
//! let p = t.transform_point(&Point3f::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Point3f::new(3.0, 4.0, 5.0));
//! assert_eq!(Transform::inverse(&t).transform_point(&p), Point3f::new(1.0, 1.0, 1.0));
//! ```
//!
//! ### Translations
//!
//! One of the simplest transformations is the translation
//! transformation. Translations only affect points, leaving vectors
//! unchanged.
//!
//! ### Scaling
//!
//! Another basic transformations is the scale transformation. We can
//! differentiate between **uniform** scaling, where all three scale
//! factors have the same value, and **nonuniform** scaling, where
//! they may have different values.
//!
//! ### X, Y, And Z Axis Rotations
//!
//! Another useful type of transformation is the rotation
//! transformation. Angles are given in degrees.
//!
//! ### Rotation Around an Arbitrary Axis
//!
//! We also provide a routine to compute the transformation that
//! represents rotation around an arbitrary axis.
//!
//! ### The Look-At Transformation
//!
//! The *look-at* transformation is particularly useful for placing a
//! camera in the scene. The caller specifies the desired position of
//! the camera, a point the camera is looking at, and an "up" vector
//! that orients the camera along the viewing direction implied by the
//! first two parameters. All of these values are given in world space
//! coordinates. The look-at construction then gives a transformation
//! between camera space and world space.
//!
//! ## Normals
//!
//! Normals are not transformed like vectors: they are multiplied by
//! the transpose of the inverse matrix, which keeps them
//! perpendicular to the surface under non-uniform scaling.
//!
//! ## Animated Transformations
//!
//! An **AnimatedTransform** interpolates between two keyframe
//! transforms. Each keyframe is decomposed into translation, rotation
//! (a **Quaternion**) and scale, which are interpolated independently
//! and recombined.

// std
use std::fmt;
use std::ops::Mul;
use std::sync::Arc;
// others
use log::{debug, warn};
// pbrt
use crate::core::error::{GeometryError, Result};
use crate::core::geometry::{bnd3_union_bnd3f, bnd3_union_pnt3f, vec3_cross_vec3};
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray, RayDifferential, Vector3f};
use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, lerp, radians};
use crate::core::quaternion::Quaternion;
use crate::core::quaternion::{quat_dot_quat, quat_slerp};

// see transform.h

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }
    pub fn transpose(m: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4 {
            m: [
                [m.m[0][0], m.m[1][0], m.m[2][0], m.m[3][0]],
                [m.m[0][1], m.m[1][1], m.m[2][1], m.m[3][1]],
                [m.m[0][2], m.m[1][2], m.m[2][2], m.m[3][2]],
                [m.m[0][3], m.m[1][3], m.m[2][3], m.m[3][3]],
            ],
        }
    }
    /// Numerically stable Gauss-Jordan elimination with full
    /// pivoting. Fails with **GeometryError::SingularMatrix** if no
    /// usable pivot is left.
    pub fn inverse(m: &Matrix4x4) -> Result<Matrix4x4> {
        let mut indxc: [usize; 4] = [0; 4];
        let mut indxr: [usize; 4] = [0; 4];
        let mut ipiv: [u8; 4] = [0; 4];
        let mut minv: Matrix4x4 = *m;
        for i in 0..4 {
            let mut irow: usize = 0;
            let mut icol: usize = 0;
            let mut big: Float = 0.0;
            // choose pivot
            for j in 0..4 {
                if ipiv[j] != 1 {
                    for (k, item) in ipiv.iter().enumerate() {
                        if *item == 0 {
                            let abs: Float = (minv.m[j][k]).abs();
                            if abs >= big {
                                big = abs;
                                irow = j;
                                icol = k;
                            }
                        } else if *item > 1 {
                            return Err(GeometryError::SingularMatrix);
                        }
                    }
                }
            }
            ipiv[icol] += 1;
            // swap rows _irow_ and _icol_ for pivot
            if irow != icol {
                minv.m.swap(irow, icol);
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv.m[icol][icol] == 0.0 {
                return Err(GeometryError::SingularMatrix);
            }
            // set $m[icol][icol]$ to one by scaling row _icol_ appropriately
            let pivinv: Float = 1.0 / minv.m[icol][icol];
            minv.m[icol][icol] = 1.0;
            for j in 0..4 {
                minv.m[icol][j] *= pivinv;
            }
            // subtract this row from others to zero out their columns
            for j in 0..4 {
                if j != icol {
                    let save: Float = minv.m[j][icol];
                    minv.m[j][icol] = 0.0;
                    for k in 0..4 {
                        minv.m[j][k] -= minv.m[icol][k] * save;
                    }
                }
            }
        }
        // swap columns to reflect permutation
        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv.m[k].swap(indxr[j], indxc[j])
                }
            }
        }
        Ok(minv)
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if self.m[i][j] != rhs.m[i][j] {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ ")?;
        for row in self.m.iter() {
            write!(f, "[ {}, {}, {}, {} ] ", row[0], row[1], row[2], row[3])?;
        }
        write!(f, "]")
    }
}

// see transform.cpp

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Transform {
    /// Build a transform from sixteen matrix entries (row-major). The
    /// inverse is computed once and cached.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Result<Self> {
        Transform::from_matrix(Matrix4x4::new(
            t00, t01, t02, t03, t10, t11, t12, t13, t20, t21, t22, t23, t30, t31, t32, t33,
        ))
    }
    pub fn from_matrix(m: Matrix4x4) -> Result<Self> {
        debug_assert!(!m.has_nans(), "matrix with NaN values: {}", m);
        let m_inv: Matrix4x4 = Matrix4x4::inverse(&m)?;
        Ok(Transform { m, m_inv })
    }
    /// The caller guarantees that *m_inv* is the inverse of *m*.
    pub fn with_inverse(m: Matrix4x4, m_inv: Matrix4x4) -> Self {
        Transform { m, m_inv }
    }
    pub fn inverse(t: &Transform) -> Transform {
        Transform {
            m: t.m_inv,
            m_inv: t.m,
        }
    }
    pub fn is_identity(&self) -> bool {
        self.m == Matrix4x4::default()
    }
    pub fn has_scale(&self) -> bool {
        let la2: Float = self
            .transform_vector(&Vector3f::new(1.0, 0.0, 0.0))
            .length_squared();
        let lb2: Float = self
            .transform_vector(&Vector3f::new(0.0, 1.0, 0.0))
            .length_squared();
        let lc2: Float = self
            .transform_vector(&Vector3f::new(0.0, 0.0, 1.0))
            .length_squared();
        let not_one = |x: Float| x < 0.999 as Float || x > 1.001 as Float;
        not_one(la2) || not_one(lb2) || not_one(lc2)
    }
    pub fn swaps_handedness(&self) -> bool {
        let det: Float = self.m.m[0][0]
            * (self.m.m[1][1] * self.m.m[2][2] - self.m.m[1][2] * self.m.m[2][1])
            - self.m.m[0][1] * (self.m.m[1][0] * self.m.m[2][2] - self.m.m[1][2] * self.m.m[2][0])
            + self.m.m[0][2] * (self.m.m[1][0] * self.m.m[2][1] - self.m.m[1][1] * self.m.m[2][0]);
        det < 0.0 as Float
    }
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: Matrix4x4::new(
                1.0, 0.0, 0.0, delta.x, 0.0, 1.0, 0.0, delta.y, 0.0, 0.0, 1.0, delta.z, 0.0, 0.0,
                0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0, 0.0, 0.0, -delta.x, 0.0, 1.0, 0.0, -delta.y, 0.0, 0.0, 1.0, -delta.z, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }
    /// A zero scale factor leaves infinite entries in the inverse, use
    /// **Transform::checked_scale()** for factors which might be zero.
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        Transform {
            m: Matrix4x4::new(
                x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0 / x,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / y,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / z,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ),
        }
    }
    /// Like **Transform::scale()**, but fails with
    /// **GeometryError::SingularMatrix** if a factor is zero.
    pub fn checked_scale(x: Float, y: Float, z: Float) -> Result<Transform> {
        if x == 0.0 || y == 0.0 || z == 0.0 {
            return Err(GeometryError::SingularMatrix);
        }
        Ok(Transform::scale(x, y, z))
    }
    pub fn rotate_x(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform::with_inverse(m, Matrix4x4::transpose(&m))
    }
    pub fn rotate_y(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            cos_theta, 0.0, sin_theta, 0.0, 0.0, 1.0, 0.0, 0.0, -sin_theta, 0.0, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform::with_inverse(m, Matrix4x4::transpose(&m))
    }
    pub fn rotate_z(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform::with_inverse(m, Matrix4x4::transpose(&m))
    }
    /// Rotation by *theta* degrees around an arbitrary (not
    /// necessarily normalized) axis.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Transform {
        let a: Vector3f = axis.normalize();
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let mut m = Matrix4x4::default();
        // compute rotation of first basis vector
        m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;
        m.m[0][3] = 0.0;
        // compute rotations of second basis vectors
        m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;
        m.m[1][3] = 0.0;
        // compute rotations of third basis vectors
        m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        m.m[2][3] = 0.0;
        Transform::with_inverse(m, Matrix4x4::transpose(&m))
    }
    /// World-to-camera transformation for a camera at *pos* looking
    /// at *look*.
    pub fn look_at(pos: &Point3f, look: &Point3f, up: &Vector3f) -> Result<Transform> {
        let mut camera_to_world = Matrix4x4::default();
        // initialize fourth column of viewing matrix
        camera_to_world.m[0][3] = pos.x;
        camera_to_world.m[1][3] = pos.y;
        camera_to_world.m[2][3] = pos.z;
        camera_to_world.m[3][3] = 1.0;
        // initialize first three columns of viewing matrix
        let dir: Vector3f = (*look - *pos).normalize();
        let up_cross_dir: Vector3f = vec3_cross_vec3(&up.normalize(), &dir);
        let up_cross_dir_length: Float = up_cross_dir.length();
        if up_cross_dir_length == 0.0 || up_cross_dir_length.is_nan() {
            warn!(
                "\"up\" vector ({}, {}, {}) and viewing direction ({}, {}, {}) passed to LookAt \
                 are pointing in the same direction",
                up.x, up.y, up.z, dir.x, dir.y, dir.z
            );
            return Err(GeometryError::DegenerateLookAt { up: *up, dir });
        }
        let left: Vector3f = up_cross_dir.normalize();
        let new_up: Vector3f = vec3_cross_vec3(&dir, &left);
        camera_to_world.m[0][0] = left.x;
        camera_to_world.m[1][0] = left.y;
        camera_to_world.m[2][0] = left.z;
        camera_to_world.m[3][0] = 0.0;
        camera_to_world.m[0][1] = new_up.x;
        camera_to_world.m[1][1] = new_up.y;
        camera_to_world.m[2][1] = new_up.z;
        camera_to_world.m[3][1] = 0.0;
        camera_to_world.m[0][2] = dir.x;
        camera_to_world.m[1][2] = dir.y;
        camera_to_world.m[2][2] = dir.z;
        camera_to_world.m[3][2] = 0.0;
        Ok(Transform {
            m: Matrix4x4::inverse(&camera_to_world)?,
            m_inv: camera_to_world,
        })
    }
    /// Maps *z* in *[z_near, z_far]* to *[0, 1]*, leaving *x* and *y*
    /// unchanged.
    pub fn orthographic(z_near: Float, z_far: Float) -> Transform {
        let translate: Transform = Transform::translate(&Vector3f {
            x: 0.0,
            y: 0.0,
            z: -z_near,
        });
        let scale: Transform = Transform::scale(1.0, 1.0, 1.0 / (z_far - z_near));
        scale * translate
    }
    /// Perspective projection with a field of view of *fov* degrees,
    /// mapping *z* in *[n, f]* to *[0, 1]*.
    pub fn perspective(fov: Float, n: Float, f: Float) -> Result<Transform> {
        if f == n {
            return Err(GeometryError::SingularMatrix);
        }
        // perform projective divide for perspective projection
        let persp = Matrix4x4::new(
            1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            f / (f - n),
            -f * n / (f - n),
            0.0,
            0.0,
            1.0,
            0.0,
        );
        // scale canonical perspective view to specified field of view
        let inv_tan_ang: Float = 1.0 / (radians(fov) / 2.0).tan();
        let scale: Transform = Transform::scale(inv_tan_ang, inv_tan_ang, 1.0);
        let persp_trans: Transform = Transform::from_matrix(persp)?;
        Ok(scale * persp_trans)
    }
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let x: Float = n.x;
        let y: Float = n.y;
        let z: Float = n.z;
        Normal3f {
            x: self.m_inv.m[0][0] * x + self.m_inv.m[1][0] * y + self.m_inv.m[2][0] * z,
            y: self.m_inv.m[0][1] * x + self.m_inv.m[1][1] * y + self.m_inv.m[2][1] * z,
            z: self.m_inv.m[0][2] * x + self.m_inv.m[1][2] * y + self.m_inv.m[2][2] * z,
        }
    }
    /// Origin, direction and the auxiliary rays are transformed, the
    /// parametric range, time and depth are kept.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        let differential: Option<RayDifferential> = r.differential.map(|rd| RayDifferential {
            rx_origin: self.transform_point(&rd.rx_origin),
            ry_origin: self.transform_point(&rd.ry_origin),
            rx_direction: self.transform_vector(&rd.rx_direction),
            ry_direction: self.transform_vector(&rd.ry_direction),
        });
        Ray {
            o: self.transform_point(&r.o),
            d: self.transform_vector(&r.d),
            differential,
            ..*r
        }
    }
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        let mut ret: Bounds3f = Bounds3f::default();
        for corner in 0..8_u8 {
            ret = bnd3_union_pnt3f(&ret, &self.transform_point(&b.corner(corner)));
        }
        ret
    }
}

impl PartialEq for Transform {
    fn eq(&self, rhs: &Transform) -> bool {
        rhs.m == self.m && rhs.m_inv == self.m_inv
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}

/// Number of time steps used to bound the motion of a rotating
/// transform.
const MOTION_BOUNDS_STEPS: usize = 128;

#[derive(Debug, Clone)]
pub struct AnimatedTransform {
    start_transform: Arc<Transform>,
    end_transform: Arc<Transform>,
    start_time: Float,
    end_time: Float,
    actually_animated: bool,
    t: [Vector3f; 2],
    r: [Quaternion; 2],
    s: [Matrix4x4; 2],
    has_rotation: bool,
}

impl AnimatedTransform {
    /// The keyframe transforms are shared, usually with a scene-wide
    /// table of named transforms.
    pub fn new(
        start_transform: Arc<Transform>,
        start_time: Float,
        end_transform: Arc<Transform>,
        end_time: Float,
    ) -> Result<Self> {
        let actually_animated: bool = *start_transform != *end_transform;
        if !actually_animated {
            debug!("static transform [{}, {}]", start_time, end_time);
            return Ok(AnimatedTransform {
                start_transform,
                end_transform,
                start_time,
                end_time,
                actually_animated,
                t: [Vector3f::default(); 2],
                r: [Quaternion::default(); 2],
                s: [Matrix4x4::default(); 2],
                has_rotation: false,
            });
        }
        let (t0, r0, s0) = AnimatedTransform::decompose(&start_transform.m)?;
        let (t1, mut r1, s1) = AnimatedTransform::decompose(&end_transform.m)?;
        // flip _r[1]_ if needed to select shortest path
        if quat_dot_quat(&r0, &r1) < 0.0 {
            r1 = -r1;
        }
        let has_rotation: bool = quat_dot_quat(&r0, &r1) < 0.9995;
        debug!(
            "animated transform [{}, {}]: animated = {}, rotation = {}",
            start_time, end_time, actually_animated, has_rotation
        );
        Ok(AnimatedTransform {
            start_transform,
            end_transform,
            start_time,
            end_time,
            actually_animated,
            t: [t0, t1],
            r: [r0, r1],
            s: [s0, s1],
            has_rotation,
        })
    }
    pub fn is_animated(&self) -> bool {
        self.actually_animated
    }
    pub fn has_scale(&self) -> bool {
        self.start_transform.has_scale() || self.end_transform.has_scale()
    }
    /// Split a matrix into translation *T*, rotation *R* and scale *S*
    /// so that *M = T R S*. The rotation is found by polar
    /// decomposition.
    pub fn decompose(m: &Matrix4x4) -> Result<(Vector3f, Quaternion, Matrix4x4)> {
        // extract translation from transformation matrix
        let t: Vector3f = Vector3f {
            x: m.m[0][3],
            y: m.m[1][3],
            z: m.m[2][3],
        };
        // compute new transformation matrix _m_ without translation
        let mut matrix: Matrix4x4 = *m;
        for i in 0..3 {
            matrix.m[i][3] = 0.0;
            matrix.m[3][i] = 0.0;
        }
        matrix.m[3][3] = 1.0;
        // extract rotation _r_ from transformation matrix
        let mut count: u8 = 0;
        let mut r: Matrix4x4 = matrix;
        loop {
            // compute next matrix _rnext_ in series
            let mut rnext: Matrix4x4 = Matrix4x4::default();
            let rit: Matrix4x4 = Matrix4x4::inverse(&Matrix4x4::transpose(&r))?;
            for i in 0..4 {
                for j in 0..4 {
                    rnext.m[i][j] = 0.5 * (r.m[i][j] + rit.m[i][j]);
                }
            }
            // compute norm of difference between _r_ and _rnext_
            let mut norm: Float = 0.0;
            for i in 0..3 {
                let n: Float = (r.m[i][0] - rnext.m[i][0]).abs()
                    + (r.m[i][1] - rnext.m[i][1]).abs()
                    + (r.m[i][2] - rnext.m[i][2]).abs();
                norm = norm.max(n);
            }
            r = rnext;
            count += 1;
            if count >= 100 || norm <= 0.0001 {
                break;
            }
        }
        let rquat: Quaternion =
            Quaternion::from(&Transform::with_inverse(r, Matrix4x4::transpose(&r)));
        // compute scale _S_ using rotation and original matrix
        let s: Matrix4x4 = mtx_mul(&Matrix4x4::inverse(&r)?, &matrix);
        Ok((t, rquat, s))
    }
    /// The transform at *time*, clamped to the keyframes outside of
    /// *[start_time, end_time]*.
    pub fn interpolate(&self, time: Float) -> Transform {
        // handle boundary conditions for matrix interpolation
        if !self.actually_animated || time <= self.start_time {
            return *self.start_transform;
        }
        if time >= self.end_time {
            return *self.end_transform;
        }
        let dt: Float = (time - self.start_time) / (self.end_time - self.start_time);
        // interpolate translation at _dt_
        let trans: Vector3f = self.t[0] * (1.0 as Float - dt) + self.t[1] * dt;
        // interpolate rotation at _dt_
        let rotate: Quaternion = quat_slerp(dt, &self.r[0], &self.r[1]);
        // interpolate scale at _dt_
        let mut scale: Matrix4x4 = Matrix4x4::default();
        for i in 0..3 {
            for j in 0..3 {
                scale.m[i][j] = lerp(dt, self.s[0].m[i][j], self.s[1].m[i][j]);
            }
        }
        let scale: Transform = match Transform::from_matrix(scale) {
            Ok(scale) => scale,
            Err(err) => {
                warn!("{} while interpolating scale at time {}", err, time);
                return if dt < 0.5 {
                    *self.start_transform
                } else {
                    *self.end_transform
                };
            }
        };
        // compute interpolated matrix as product of interpolated components
        Transform::translate(&trans) * rotate.to_transform() * scale
    }
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        self.interpolate(r.time).transform_ray(r)
    }
    pub fn transform_point(&self, time: Float, p: &Point3f) -> Point3f {
        self.interpolate(time).transform_point(p)
    }
    pub fn transform_vector(&self, time: Float, v: &Vector3f) -> Vector3f {
        self.interpolate(time).transform_vector(v)
    }
    /// Bound the region swept by *b* over the whole time range.
    pub fn motion_bounds(&self, b: &Bounds3f) -> Bounds3f {
        if !self.actually_animated {
            return self.start_transform.transform_bounds(b);
        }
        if !self.has_rotation {
            return bnd3_union_bnd3f(
                &self.start_transform.transform_bounds(b),
                &self.end_transform.transform_bounds(b),
            );
        }
        // sample the rotating transform at evenly spaced times
        let mut bounds: Bounds3f = Bounds3f::default();
        for i in 0..MOTION_BOUNDS_STEPS {
            let t: Float = lerp(
                i as Float / (MOTION_BOUNDS_STEPS - 1) as Float,
                self.start_time,
                self.end_time,
            );
            bounds = bnd3_union_bnd3f(&bounds, &self.interpolate(t).transform_bounds(b));
        }
        // corner paths may bulge out of the samples' box between two steps
        let pad: Float = (0..8_u8)
            .map(|corner| self.sample_gap(&b.corner(corner)))
            .fold(0.0 as Float, Float::max);
        bounds.expand(pad);
        bounds
    }
    /// Upper bound for the distance between the path of *p* and the
    /// chord connecting two consecutive motion samples. The path
    /// *T(u) + R(u) S(u) p* has a second derivative of at most
    /// *theta^2 |S(u) p| + 2 theta |(S1 - S0) p|* for a total rotation
    /// angle *theta*, and a chord over a step *h* deviates by at most
    /// *h^2 / 8* times that.
    fn sample_gap(&self, p: &Point3f) -> Float {
        let v: Vector3f = Vector3f::from(*p);
        let s0p: Vector3f = mtx3_mul_vec3(&self.s[0], &v);
        let s1p: Vector3f = mtx3_mul_vec3(&self.s[1], &v);
        let reach: Float = s0p.length().max(s1p.length());
        let cos_half: Float = clamp_t(quat_dot_quat(&self.r[0], &self.r[1]), -1.0, 1.0);
        let theta: Float = 2.0 as Float * cos_half.acos();
        let curvature: Float = theta * theta * reach + 2.0 as Float * theta * (s1p - s0p).length();
        let h: Float = 1.0 as Float / (MOTION_BOUNDS_STEPS - 1) as Float;
        // rounding in the interpolated matrices
        let translation: Float = self.t[0].length().max(self.t[1].length());
        curvature * h * h / 8.0 as Float + 8.0 as Float * Float::EPSILON * (reach + translation)
    }
}

/// Upper left 3 x 3 block of *m* applied to *v*.
fn mtx3_mul_vec3(m: &Matrix4x4, v: &Vector3f) -> Vector3f {
    Vector3f {
        x: m.m[0][0] * v.x + m.m[0][1] * v.y + m.m[0][2] * v.z,
        y: m.m[1][0] * v.x + m.m[1][1] * v.y + m.m[1][2] * v.z,
        z: m.m[2][0] * v.x + m.m[2][1] * v.y + m.m[2][2] * v.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{nrm_dot_vec3f, pnt3_distancef, vec3_dot_vec3f};
    use float_cmp::approx_eq;
    use rayon::prelude::*;

    fn assert_point_near(a: &Point3f, b: &Point3f, epsilon: Float) {
        assert!(
            pnt3_distancef(a, b) <= epsilon,
            "{:?} != {:?} (epsilon = {})",
            a,
            b,
            epsilon
        );
    }

    fn assert_vector_near(a: &Vector3f, b: &Vector3f, epsilon: Float) {
        assert!((*a - *b).length() <= epsilon, "{:?} != {:?}", a, b);
    }

    fn assert_matrix_near(a: &Matrix4x4, b: &Matrix4x4, epsilon: Float) {
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    approx_eq!(Float, a.m[i][j], b.m[i][j], epsilon = epsilon),
                    "{} != {}",
                    a,
                    b
                );
            }
        }
    }

    fn sample_transforms() -> Vec<Transform> {
        vec![
            Transform::translate(&Vector3f::new(1.0, -2.0, 3.5)),
            Transform::scale(2.0, 0.5, -3.0),
            Transform::rotate_x(30.0),
            Transform::rotate(73.0, &Vector3f::new(1.0, 1.0, -0.5)),
            Transform::translate(&Vector3f::new(0.5, 0.0, -1.0))
                * Transform::rotate_y(-45.0)
                * Transform::scale(1.5, 1.5, 0.25),
            Transform::from_matrix(Matrix4x4::new(
                1.0, 0.5, 0.0, 2.0, 0.0, 2.0, 0.25, -1.0, 0.3, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ))
            .expect("invertible"),
        ]
    }

    #[test]
    fn identity_is_neutral_for_mtx_mul() {
        let m = Matrix4x4::new(
            1.0, 2.0, 3.0, 4.0, -5.0, 6.0, 7.0, 8.0, 9.0, -10.0, 11.0, 12.0, 0.5, 0.25, -0.125,
            1.0,
        );
        assert_eq!(mtx_mul(&Matrix4x4::default(), &m), m);
        assert_eq!(mtx_mul(&m, &Matrix4x4::default()), m);
    }

    #[test]
    fn mtx_mul_sums_over_inner_index() {
        let a = Matrix4x4::new(
            1.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let b = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let ab = mtx_mul(&a, &b);
        assert_eq!(ab.m[0][0], 7.0);
        assert_eq!(ab.m[0][1], 2.0);
        assert_eq!(ab.m[1][0], 3.0);
    }

    #[test]
    fn matrix_inverse() {
        let m = Matrix4x4::new(
            2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let m_inv = Matrix4x4::inverse(&m).expect("invertible");
        assert_matrix_near(&mtx_mul(&m, &m_inv), &Matrix4x4::default(), 1e-6);
        assert_matrix_near(&mtx_mul(&m_inv, &m), &Matrix4x4::default(), 1e-6);
    }

    #[test]
    fn singular_matrix_is_an_error() {
        let zero_column = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(
            Matrix4x4::inverse(&zero_column),
            Err(GeometryError::SingularMatrix)
        );
        assert!(Transform::from_matrix(zero_column).is_err());
        assert!(Transform::new(
            1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 6.0, 8.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0
        )
        .is_err());
    }

    #[test]
    fn matrix_display() {
        assert_eq!(
            format!("{}", Matrix4x4::default()),
            "[ [ 1, 0, 0, 0 ] [ 0, 1, 0, 0 ] [ 0, 0, 1, 0 ] [ 0, 0, 0, 1 ] ]"
        );
    }

    #[test]
    fn inverse_round_trip() {
        let v = Vector3f::new(0.3, -1.7, 2.2);
        let p = Point3f::new(-4.0, 0.5, 9.0);
        for t in sample_transforms().iter() {
            let t_inv = Transform::inverse(t);
            assert_eq!(Transform::inverse(&t_inv), *t);
            assert_vector_near(&t_inv.transform_vector(&t.transform_vector(&v)), &v, 1e-4);
            assert_point_near(&t_inv.transform_point(&t.transform_point(&p)), &p, 1e-4);
        }
    }

    #[test]
    fn composition_is_associative() {
        let ts = sample_transforms();
        let p = Point3f::new(1.0, 2.0, -3.0);
        for a in ts.iter() {
            for b in ts.iter() {
                for c in ts.iter() {
                    let left = ((*a * *b) * *c).transform_point(&p);
                    let right = (*a * (*b * *c)).transform_point(&p);
                    let scale: Float = 1.0 + Vector3f::from(left).length();
                    assert_point_near(&left, &right, 1e-4 * scale);
                }
            }
        }
    }

    #[test]
    fn composition_applies_right_to_left() {
        let t = Transform::translate(&Vector3f::new(1.0, 0.0, 0.0));
        let r = Transform::rotate_z(90.0);
        let p = Point3f::new(1.0, 0.0, 0.0);
        // rotate first, then translate
        assert_point_near(&(t * r).transform_point(&p), &Point3f::new(1.0, 1.0, 0.0), 1e-6);
        // translate first, then rotate
        assert_point_near(&(r * t).transform_point(&p), &Point3f::new(0.0, 2.0, 0.0), 1e-6);
        let inv = Transform::inverse(&(t * r));
        assert_point_near(&inv.transform_point(&Point3f::new(1.0, 1.0, 0.0)), &p, 1e-6);
    }

    #[test]
    fn translation_leaves_vectors_alone() {
        let t = Transform::translate(&Vector3f::new(5.0, 6.0, 7.0));
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(t.transform_vector(&v), v);
        assert_eq!(
            t.transform_point(&Point3f::new(1.0, 2.0, 3.0)),
            Point3f::new(6.0, 8.0, 10.0)
        );
    }

    #[test]
    fn rotate_about_principal_axes() {
        let axes = [
            (Vector3f::new(1.0, 0.0, 0.0), Transform::rotate_x(37.0)),
            (Vector3f::new(0.0, 1.0, 0.0), Transform::rotate_y(37.0)),
            (Vector3f::new(0.0, 0.0, 1.0), Transform::rotate_z(37.0)),
        ];
        for (axis, expected) in axes.iter() {
            let r = Transform::rotate(37.0, axis);
            assert_matrix_near(&r.m, &expected.m, 1e-6);
            assert_matrix_near(&r.m_inv, &expected.m_inv, 1e-6);
        }
    }

    #[test]
    fn rotation_treats_normals_like_vectors() {
        let r = Transform::rotate(-120.0, &Vector3f::new(0.2, 1.0, 0.7));
        let v = Vector3f::new(0.5, -0.25, 1.0);
        let n = Normal3f::from(v);
        let rn = Vector3f::from(r.transform_normal(&n));
        assert_vector_near(&rn, &r.transform_vector(&v), 1e-5);
        assert!(!r.has_scale());
        assert!(!r.swaps_handedness());
    }

    #[test]
    fn normals_stay_perpendicular_under_nonuniform_scale() {
        let t = Transform::rotate_z(30.0) * Transform::scale(4.0, 1.0, 0.5);
        // tangent and normal of the plane x + y = 1
        let tangent = Vector3f::new(1.0, -1.0, 0.0);
        let n = Normal3f::new(1.0, 1.0, 0.0);
        let tt = t.transform_vector(&tangent);
        let tn = t.transform_normal(&n);
        assert!(approx_eq!(Float, nrm_dot_vec3f(&tn, &tt), 0.0, epsilon = 1e-5));
        // transforming the normal as a vector would break this
        let wrong = t.transform_vector(&Vector3f::from(n));
        assert!(vec3_dot_vec3f(&wrong, &tt).abs() > 1.0);
    }

    #[test]
    fn handedness_and_scale() {
        assert!(Transform::scale(-1.0, 1.0, 1.0).swaps_handedness());
        assert!(!Transform::scale(-1.0, -1.0, 1.0).swaps_handedness());
        assert!(Transform::scale(1.0, 1.0, 2.0).has_scale());
        assert!(!Transform::translate(&Vector3f::new(3.0, 0.0, 0.0)).has_scale());
        assert!(Transform::default().is_identity());
        assert!(!Transform::rotate_x(1.0).is_identity());
    }

    #[test]
    fn look_at() {
        let pos = Point3f::new(0.0, 0.0, -5.0);
        let look = Point3f::new(0.0, 0.0, 0.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        let world_to_camera = Transform::look_at(&pos, &look, &up).expect("valid look-at");
        assert_point_near(
            &world_to_camera.transform_point(&pos),
            &Point3f::new(0.0, 0.0, 0.0),
            1e-6,
        );
        assert_point_near(
            &world_to_camera.transform_point(&look),
            &Point3f::new(0.0, 0.0, 5.0),
            1e-6,
        );
        let camera_up = world_to_camera.transform_vector(&up);
        assert_vector_near(&camera_up, &Vector3f::new(0.0, 1.0, 0.0), 1e-6);
    }

    #[test]
    fn degenerate_look_at_is_an_error() {
        let pos = Point3f::new(0.0, 0.0, 0.0);
        let look = Point3f::new(0.0, 3.0, 0.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        match Transform::look_at(&pos, &look, &up) {
            Err(GeometryError::DegenerateLookAt { up: u, dir }) => {
                assert_eq!(u, up);
                assert_eq!(dir, Vector3f::new(0.0, 1.0, 0.0));
            }
            other => panic!("expected a degenerate look-at, got {:?}", other),
        }
    }

    #[test]
    fn orthographic_maps_depth_range() {
        let t = Transform::orthographic(1.0, 11.0);
        assert_point_near(
            &t.transform_point(&Point3f::new(2.0, 3.0, 1.0)),
            &Point3f::new(2.0, 3.0, 0.0),
            1e-6,
        );
        assert_point_near(
            &t.transform_point(&Point3f::new(2.0, 3.0, 11.0)),
            &Point3f::new(2.0, 3.0, 1.0),
            1e-6,
        );
    }

    #[test]
    fn perspective_divides_by_depth() {
        let t = Transform::perspective(90.0, 1.0, 100.0).expect("valid perspective");
        let near = t.transform_point(&Point3f::new(1.0, 1.0, 1.0));
        assert_point_near(&near, &Point3f::new(1.0, 1.0, 0.0), 1e-5);
        let far = t.transform_point(&Point3f::new(100.0, -50.0, 100.0));
        assert_point_near(&far, &Point3f::new(1.0, -0.5, 1.0), 1e-4);
        assert!(Transform::perspective(90.0, 0.0, 100.0).is_err());
        assert!(Transform::perspective(90.0, 5.0, 5.0).is_err());
    }

    #[test]
    fn transform_bounds_covers_all_corners() {
        let b = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
        let t = Transform::rotate_z(45.0);
        let tb = t.transform_bounds(&b);
        let r: Float = (2.0 as Float).sqrt();
        assert!(approx_eq!(Float, tb.p_max.x, r, epsilon = 1e-5));
        assert!(approx_eq!(Float, tb.p_min.y, -r, epsilon = 1e-5));
        assert!(approx_eq!(Float, tb.p_max.z, 1.0, epsilon = 1e-6));
        for corner in 0..8 {
            assert!(tb.inside(&t.transform_point(&b.corner(corner))));
        }
    }

    #[test]
    fn transform_ray_keeps_parametric_range() {
        let t = Transform::translate(&Vector3f::new(0.0, 1.0, 0.0)) * Transform::scale(2.0, 2.0, 2.0);
        let ray = Ray::with_differentials(
            Ray::new(
                Point3f::new(1.0, 0.0, 0.0),
                Vector3f::new(0.0, 0.0, 1.0),
                0.5,
                10.0,
                0.75,
                3,
            ),
            RayDifferential {
                rx_origin: Point3f::new(1.5, 0.0, 0.0),
                ry_origin: Point3f::new(1.0, 0.5, 0.0),
                rx_direction: Vector3f::new(0.1, 0.0, 1.0),
                ry_direction: Vector3f::new(0.0, 0.1, 1.0),
            },
        );
        let tr = t.transform_ray(&ray);
        assert_eq!(tr.o, Point3f::new(2.0, 1.0, 0.0));
        assert_eq!(tr.d, Vector3f::new(0.0, 0.0, 2.0));
        assert_eq!(tr.t_min, 0.5);
        assert_eq!(tr.t_max, 10.0);
        assert_eq!(tr.time, 0.75);
        assert_eq!(tr.depth, 3);
        let diff = tr.differential.expect("differentials");
        assert_eq!(diff.rx_origin, Point3f::new(3.0, 1.0, 0.0));
        assert_eq!(diff.ry_direction, Vector3f::new(0.0, 0.2, 2.0));
        // same parameter, same place
        assert_point_near(&tr.position(4.0), &t.transform_point(&ray.position(4.0)), 1e-5);
    }

    #[test]
    fn shared_transform_across_threads() {
        let t = Arc::new(
            Transform::translate(&Vector3f::new(1.0, 2.0, 3.0))
                * Transform::rotate(30.0, &Vector3f::new(1.0, 1.0, 1.0)),
        );
        let points: Vec<Point3f> = (0..4096)
            .map(|i| Point3f::new(i as Float, (i % 7) as Float, -(i as Float) * 0.5))
            .collect();
        let sequential: Vec<Point3f> = points.iter().map(|p| t.transform_point(p)).collect();
        let parallel: Vec<Point3f> = points.par_iter().map(|p| t.transform_point(p)).collect();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn decompose_recovers_components() {
        let m: Transform = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0))
            * Transform::rotate_y(60.0)
            * Transform::scale(2.0, 3.0, 4.0);
        let (t, r, s) = AnimatedTransform::decompose(&m.m).expect("decomposable");
        assert_eq!(t, Vector3f::new(1.0, 2.0, 3.0));
        assert_matrix_near(&r.to_transform().m, &Transform::rotate_y(60.0).m, 1e-4);
        assert!(approx_eq!(Float, s.m[0][0], 2.0, epsilon = 1e-4));
        assert!(approx_eq!(Float, s.m[1][1], 3.0, epsilon = 1e-4));
        assert!(approx_eq!(Float, s.m[2][2], 4.0, epsilon = 1e-4));
        assert!(approx_eq!(Float, s.m[0][2], 0.0, epsilon = 1e-4));
    }

    #[test]
    fn static_animated_transform() {
        let t = Arc::new(Transform::rotate_x(20.0));
        let at = AnimatedTransform::new(t.clone(), 0.0, t.clone(), 1.0).expect("animated");
        assert!(!at.is_animated());
        assert_eq!(at.interpolate(0.5), *t);
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        assert_eq!(at.motion_bounds(&b), t.transform_bounds(&b));
    }

    #[test]
    fn static_animated_transform_with_singular_keyframe() {
        let flat = Arc::new(Transform::scale(1.0, 1.0, 0.0));
        assert!(AnimatedTransform::decompose(&flat.m).is_err());
        let at = AnimatedTransform::new(flat.clone(), 0.0, flat.clone(), 1.0).expect("static");
        assert!(!at.is_animated());
        let p = Point3f::new(1.0, 2.0, 3.0);
        assert_eq!(at.transform_point(0.5, &p), Point3f::new(1.0, 2.0, 0.0));
        let other = Arc::new(Transform::default());
        assert_eq!(
            AnimatedTransform::new(flat, 0.0, other, 1.0).err(),
            Some(GeometryError::SingularMatrix)
        );
    }

    #[test]
    fn checked_scale_rejects_zero_factors() {
        assert_eq!(
            Transform::checked_scale(2.0, 0.0, 1.0).err(),
            Some(GeometryError::SingularMatrix)
        );
        let t = Transform::checked_scale(2.0, 4.0, -1.0).expect("invertible");
        assert_eq!(t, Transform::scale(2.0, 4.0, -1.0));
        let identity = mtx_mul(&t.m, &t.m_inv);
        assert_eq!(identity, Matrix4x4::default());
    }

    #[test]
    fn animated_translation() {
        let start = Arc::new(Transform::default());
        let end = Arc::new(Transform::translate(&Vector3f::new(10.0, 0.0, 0.0)));
        let at = AnimatedTransform::new(start.clone(), 0.0, end.clone(), 2.0).expect("animated");
        assert!(at.is_animated());
        assert!(!at.has_scale());
        assert_eq!(at.interpolate(-1.0), *start);
        assert_eq!(at.interpolate(0.0), *start);
        assert_eq!(at.interpolate(2.0), *end);
        assert_eq!(at.interpolate(3.0), *end);
        let origin = Point3f::default();
        assert_point_near(&at.transform_point(1.0, &origin), &Point3f::new(5.0, 0.0, 0.0), 1e-5);
        let v = Vector3f::new(0.0, 1.0, 0.0);
        assert_vector_near(&at.transform_vector(1.0, &v), &v, 1e-6);
        let ray = Ray {
            time: 0.5,
            ..Ray::default()
        };
        assert_point_near(&at.transform_ray(&ray).o, &Point3f::new(2.5, 0.0, 0.0), 1e-5);
        let b = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        let mb = at.motion_bounds(&b);
        assert_eq!(mb.p_min, Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(mb.p_max, Point3f::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn animated_rotation() {
        let start = Arc::new(Transform::default());
        let end = Arc::new(Transform::rotate_z(90.0));
        let at = AnimatedTransform::new(start, 0.0, end, 1.0).expect("animated");
        let p = Point3f::new(1.0, 0.0, 0.0);
        let half: Float = (0.5 as Float).sqrt();
        assert_point_near(&at.transform_point(0.5, &p), &Point3f::new(half, half, 0.0), 1e-4);
        // the swept quarter circle bulges beyond the keyframe corners
        let mb = at.motion_bounds(&Bounds3f::from_point(p));
        assert!(mb.inside(&Point3f::new(half, half, 0.0)));
        assert!(mb.inside(&Point3f::new(0.0, 1.0, 0.0)));
        assert!(mb.inside(&p));
    }

    #[test]
    fn motion_bounds_contain_arc_extremes_between_samples() {
        let start = Arc::new(Transform::default());
        let end = Arc::new(Transform::rotate_z(170.0));
        let at = AnimatedTransform::new(start, 0.0, end, 1.0).expect("animated");
        let p = Point3f::new(1000.0, 0.0, 0.0);
        let mb = at.motion_bounds(&Bounds3f::from_point(p));
        // the topmost point of the arc is reached between two samples
        assert!(mb.p_max.y >= 1000.0);
        assert!(mb.p_max.y < 1001.0);
        for i in 0..=10_000 {
            let time = i as Float / 10_000.0;
            let q = at.transform_point(time, &p);
            assert!(mb.inside(&q), "{:?} at time {} outside {:?}", q, time, mb);
        }
    }

    #[test]
    fn motion_bounds_contain_rotating_and_scaling_box() {
        let start = Arc::new(Transform::translate(&Vector3f::new(0.0, 2.0, 0.0)));
        let end = Arc::new(
            Transform::translate(&Vector3f::new(4.0, 0.0, 1.0))
                * Transform::rotate(120.0, &Vector3f::new(1.0, 1.0, 0.0))
                * Transform::scale(2.0, 0.5, 1.5),
        );
        let at = AnimatedTransform::new(start, 0.0, end, 2.0).expect("animated");
        let b = Bounds3f::new(Point3f::new(-1.0, -2.0, 0.5), Point3f::new(3.0, 1.0, 2.0));
        let mb = at.motion_bounds(&b);
        for i in 0..=4_000 {
            let time = 2.0 * i as Float / 4_000.0;
            let t = at.interpolate(time);
            for corner in 0..8_u8 {
                let q = t.transform_point(&b.corner(corner));
                assert!(mb.inside(&q), "{:?} at time {} outside {:?}", q, time, mb);
            }
        }
    }

    #[test]
    fn animated_scale() {
        let start = Arc::new(Transform::scale(1.0, 1.0, 1.0));
        let end = Arc::new(Transform::scale(3.0, 1.0, 1.0));
        let at = AnimatedTransform::new(start, 0.0, end, 1.0).expect("animated");
        assert!(at.has_scale());
        let p = at.transform_point(0.5, &Point3f::new(1.0, 1.0, 1.0));
        assert_point_near(&p, &Point3f::new(2.0, 1.0, 1.0), 1e-5);
    }
}
