use argh::FromArgs;

use sightline::{
    triangulate, CameraIntrinsics, HeadingConvention, LogSink, PixelPoint, RangePairing,
    TriangulationParams, TriangulationRequest,
};

#[derive(FromArgs)]
/// Locate a target seen by a horizontal stereo pair and print its range and heading
struct Args {
    /// target column in the left image
    #[argh(option)]
    left_x: f64,

    /// target row in the left image
    #[argh(option, default = "0.0")]
    left_y: f64,

    /// target column in the right image
    #[argh(option)]
    right_x: f64,

    /// target row in the right image
    #[argh(option, default = "0.0")]
    right_y: f64,

    /// image width in pixels
    #[argh(option, default = "640.0")]
    width: f64,

    /// image height in pixels
    #[argh(option, default = "480.0")]
    height: f64,

    /// horizontal field of view in degrees
    #[argh(option, default = "60.0")]
    fov_horiz: f64,

    /// vertical field of view in degrees
    #[argh(option, default = "40.0")]
    fov_vert: f64,

    /// distance between the cameras in meters
    #[argh(option, short = 's')]
    spacing: f64,

    /// reject sight-lines meeting at less than this angle, in degrees
    #[argh(option, default = "0.0")]
    min_convergence_deg: f64,

    /// heading convention: bearing or baseline-tangent
    #[argh(option, default = "HeadingConvention::Bearing")]
    heading: HeadingConvention,

    /// law-of-sines pairing of the camera ranges: opposite or same-side
    #[argh(option, default = "RangePairing::Opposite")]
    range_pairing: RangePairing,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args: Args = argh::from_env();

    let req = TriangulationRequest {
        left: PixelPoint::new(args.left_x, args.left_y),
        right: PixelPoint::new(args.right_x, args.right_y),
        cam: CameraIntrinsics::new(args.width, args.height, args.fov_horiz, args.fov_vert),
        spacing: args.spacing,
    };

    let params = TriangulationParams {
        min_convergence_deg: args.min_convergence_deg,
        heading: args.heading,
        range_pairing: args.range_pairing,
    };

    let res = triangulate(&req, &params, &LogSink);
    println!("{}", serde_json::to_string_pretty(&res)?);

    if res.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}
