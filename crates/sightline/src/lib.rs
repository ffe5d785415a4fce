#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Sightline
//!
//! Locates a target in the horizontal plane from its pixel column in two identical,
//! co-planar cameras separated by a known baseline.
//!
//! ## Example
//!
//! ```rust
//! use sightline::{
//!     triangulate, CameraIntrinsics, LogSink, PixelPoint, TriangulationParams,
//!     TriangulationRequest,
//! };
//!
//! let req = TriangulationRequest {
//!     left: PixelPoint::new(416.0, 240.0),
//!     right: PixelPoint::new(224.0, 240.0),
//!     cam: CameraIntrinsics::new(640.0, 480.0, 60.0, 40.0),
//!     spacing: 0.5,
//! };
//!
//! let res = triangulate(&req, &TriangulationParams::default(), &LogSink);
//! assert!(!res.is_failure());
//! assert!(res.heading.abs() < 1e-9);
//! ```

/// Camera model and pixel-to-angle mapping.
pub mod camera;

mod error;
pub use error::TriangulationError;

/// Diagnostic sinks used to report requests and failures.
pub mod sink;

/// Two-camera triangulation of a single target.
pub mod triangulation;

pub use camera::{CameraIntrinsics, PixelPoint};
pub use sink::{DiagnosticSink, LogSink, NullSink};
pub use triangulation::{
    triangulate, try_triangulate, HeadingConvention, RangePairing, StereoFix, TriangulationParams,
    TriangulationRequest, TriangulationResult,
};
