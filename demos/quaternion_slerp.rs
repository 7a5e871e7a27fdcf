use rs_pbrt_geometry::core::geometry::Point3f;
use rs_pbrt_geometry::core::pbrt::Float;
use rs_pbrt_geometry::core::quaternion::{quat_slerp, Quaternion};
use rs_pbrt_geometry::core::transform::Transform;

fn main() {
    let q0: Quaternion = Quaternion::default();
    let q1: Quaternion = Quaternion::from(&Transform::rotate_z(120.0));
    let p: Point3f = Point3f::new(1.0, 0.0, 0.0);
    for i in 0..=8 {
        let t: Float = i as Float / 8.0;
        let q: Quaternion = quat_slerp(t, &q0, &q1);
        println!(
            "t = {:.3}: {:?} -> {:?}",
            t,
            q,
            q.to_transform().transform_point(&p)
        );
    }
}
