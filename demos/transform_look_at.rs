use rs_pbrt_geometry::core::geometry::{Point3f, Vector3f};
use rs_pbrt_geometry::core::transform::Transform;

fn main() {
    let pos = Point3f::new(0.0, 2.0, -10.0);
    let look = Point3f::new(0.0, 0.0, 0.0);
    let up = Vector3f::new(0.0, 1.0, 0.0);
    match Transform::look_at(&pos, &look, &up) {
        Ok(world_to_camera) => {
            println!("world_to_camera = {}", world_to_camera.m);
            println!("camera_to_world = {}", world_to_camera.m_inv);
            println!(
                "look at point in camera space: {:?}",
                world_to_camera.transform_point(&look)
            );
        }
        Err(err) => println!("{}", err),
    }
    // looking straight up with "up" pointing up
    let sky = Point3f::new(0.0, 100.0, 0.0);
    if let Err(err) = Transform::look_at(&look, &sky, &up) {
        println!("{}", err);
    }
}
