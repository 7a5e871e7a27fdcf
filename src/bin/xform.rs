//! Build a transformation from the command line and apply it to
//! points, vectors, normals and bounding boxes.
//!
//! ```text
//! xform --translate 1 0 0 --rotate 90 0 0 1 --point 1 0 0 --normal 0 1 0
//! xform --look-at 0 0 -5  0 0 0  0 1 0 --bounds -1 -1 -1 1 1 1
//! ```

// command line options
use clap::{Parser, ValueEnum};
// others
use log::{debug, error, info, LevelFilter};
// pbrt
use rs_pbrt_geometry::core::error::Result;
use rs_pbrt_geometry::core::geometry::{Bounds3f, Normal3f, Point3f, Vector3f};
use rs_pbrt_geometry::core::pbrt::Float;
use rs_pbrt_geometry::core::transform::Transform;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Compose a transformation (translate * rotate * scale, or a
/// look-at) and apply it to geometric values.
#[derive(Parser, Debug)]
#[command(name = "xform", version = VERSION)]
struct Args {
    /// translation vector
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    translate: Option<Vec<Float>>,
    /// rotation angle in degrees followed by the rotation axis
    #[arg(long, num_args = 4, value_names = ["DEGREES", "X", "Y", "Z"], allow_negative_numbers = true)]
    rotate: Option<Vec<Float>>,
    /// scale factors
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    scale: Option<Vec<Float>>,
    /// camera position, target point and up vector (replaces the other transformations)
    #[arg(long, num_args = 9, allow_negative_numbers = true, conflicts_with_all = ["translate", "rotate", "scale"])]
    look_at: Option<Vec<Float>>,
    /// point to transform
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    point: Option<Vec<Float>>,
    /// vector to transform
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    vector: Option<Vec<Float>>,
    /// surface normal to transform
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    normal: Option<Vec<Float>>,
    /// two corners of a bounding box to transform
    #[arg(long, num_args = 6, allow_negative_numbers = true)]
    bounds: Option<Vec<Float>>,
    /// logging level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn vec3(v: &[Float]) -> Vector3f {
    Vector3f::new(v[0], v[1], v[2])
}

fn pnt3(v: &[Float]) -> Point3f {
    Point3f::new(v[0], v[1], v[2])
}

fn build_transform(args: &Args) -> Result<Transform> {
    if let Some(ref look_at) = args.look_at {
        debug!("look-at {:?}", look_at);
        return Transform::look_at(
            &pnt3(&look_at[0..3]),
            &pnt3(&look_at[3..6]),
            &vec3(&look_at[6..9]),
        );
    }
    let mut t: Transform = Transform::default();
    if let Some(ref translate) = args.translate {
        t = t * Transform::translate(&vec3(translate));
    }
    if let Some(ref rotate) = args.rotate {
        t = t * Transform::rotate(rotate[0], &vec3(&rotate[1..4]));
    }
    if let Some(ref scale) = args.scale {
        t = t * Transform::checked_scale(scale[0], scale[1], scale[2])?;
    }
    Ok(t)
}

fn run(args: &Args) -> Result<()> {
    let t: Transform = build_transform(args)?;
    println!("m     = {}", t.m);
    println!("m_inv = {}", t.m_inv);
    println!("swaps handedness: {}", t.swaps_handedness());
    println!("has scale:        {}", t.has_scale());
    if let Some(ref point) = args.point {
        let p: Point3f = pnt3(point);
        println!("point  {:?} -> {:?}", p, t.transform_point(&p));
    }
    if let Some(ref vector) = args.vector {
        let v: Vector3f = vec3(vector);
        println!("vector {:?} -> {:?}", v, t.transform_vector(&v));
    }
    if let Some(ref normal) = args.normal {
        let n: Normal3f = Normal3f::from(vec3(normal));
        println!("normal {:?} -> {:?}", n, t.transform_normal(&n));
    }
    if let Some(ref bounds) = args.bounds {
        let b: Bounds3f = Bounds3f::new(pnt3(&bounds[0..3]), pnt3(&bounds[3..6]));
        println!("bounds {:?} -> {:?}", b, t.transform_bounds(&b));
    }
    Ok(())
}

fn main() {
    let args: Args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();
    info!("xform version {}", VERSION);
    if let Err(err) = run(&args) {
        error!("{}", err);
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
