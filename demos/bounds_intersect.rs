use rs_pbrt_geometry::core::geometry::{Bounds3f, Point3f, Ray, Vector3f};
use rs_pbrt_geometry::core::pbrt::Float;

fn main() {
    let unit_cube: Bounds3f =
        Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
    let (center, radius) = unit_cube.bounding_sphere();
    println!("{:?}", unit_cube);
    println!("bounding sphere: center = {:?}, radius = {}", center, radius);
    for y in [0.0 as Float, 0.9, 1.5].iter() {
        let ray: Ray = Ray::new(
            Point3f::new(0.0, *y, -5.0),
            Vector3f::new(0.0, 0.0, 1.0),
            0.0,
            std::f32::INFINITY,
            0.0,
            0,
        );
        match unit_cube.intersect_b(&ray) {
            Some((t0, t1)) => println!("y = {}: hit for t in [{}, {}]", y, t0, t1),
            None => println!("y = {}: miss", y),
        }
    }
}
