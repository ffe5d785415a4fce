mod triangulate;

use argh::FromArgs;
use sightline::{HeadingConvention, RangePairing, TriangulationParams};

#[derive(FromArgs)]
/// Serve stereo triangulation requests over HTTP
struct Args {
    /// the address to bind to
    #[argh(option, default = "String::from(\"0.0.0.0\")")]
    host: String,

    /// the port to listen on
    #[argh(option, short = 'p', default = "3000")]
    port: u16,

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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args: Args = argh::from_env();

    let params = TriangulationParams {
        min_convergence_deg: args.min_convergence_deg,
        heading: args.heading,
        range_pairing: args.range_pairing,
    };

    log::info!("🚀 Starting the triangulation server");
    log::info!("🔥 Listening on: http://{}:{}", args.host, args.port);
    log::info!("🔧 Solver parameters: {:?}", params);
    log::info!("🔧 Press Ctrl+C to stop the server");

    let app = triangulate::router(params);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    log::info!("Received Ctrl+C, shutting down gracefully...");
}
