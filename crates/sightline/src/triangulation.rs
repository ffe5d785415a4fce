use serde::{Deserialize, Serialize};

use crate::camera::{cos_deg, sin_deg, CameraIntrinsics, PixelPoint};
use crate::sink::DiagnosticSink;
use crate::TriangulationError;

/// A single triangulation query: the same target seen by the left and the right camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangulationRequest {
    /// Target position in the left camera image.
    pub left: PixelPoint,
    /// Target position in the right camera image.
    pub right: PixelPoint,
    /// Intrinsics shared by both cameras.
    pub cam: CameraIntrinsics,
    /// Distance between the two optical centers, in meters.
    pub spacing: f64,
}

impl TriangulationRequest {
    /// Check that the request can be triangulated at all.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        self.cam.validate()?;

        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(TriangulationError::InvalidSpacing(self.spacing));
        }

        if !(self.left.is_finite() && self.right.is_finite()) {
            return Err(TriangulationError::NonFinitePixel);
        }

        Ok(())
    }
}

/// Distance and heading of the target from the midpoint of the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangulationResult {
    /// Distance from the baseline midpoint, in the units of the spacing.
    pub dist: f64,
    /// Heading of the target in degrees, see [`HeadingConvention`].
    pub heading: f64,
}

impl TriangulationResult {
    /// Returned when the request has no geometric solution.
    pub const FAILURE: Self = Self {
        dist: -1.0,
        heading: -1.0,
    };

    /// Whether this is the failure sentinel.
    pub fn is_failure(&self) -> bool {
        *self == Self::FAILURE
    }
}

/// How the heading is measured in the midpoint frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingConvention {
    /// Angle from straight ahead, `atan2(x, y)`.
    ///
    /// Positive toward the right camera, the same sense as the per-camera pixel angles.
    /// A target dead ahead has heading `0`.
    #[default]
    Bearing,
    /// Angle from the baseline axis, `atan(y / x)`, in `(-90, 90]`.
    ///
    /// `x == 0` maps to `±90` with the sign of `y`. Combine with [`RangePairing::SameSide`]
    /// to get the legacy `{dist, heading}` output.
    BaselineTangent,
}

impl HeadingConvention {
    /// Heading in degrees of the planar point `(x, y)`.
    pub fn heading(&self, x: f64, y: f64) -> f64 {
        match self {
            HeadingConvention::Bearing => x.atan2(y).to_degrees(),
            HeadingConvention::BaselineTangent => {
                if x == 0.0 {
                    90f64.copysign(y)
                } else {
                    (y / x).atan().to_degrees()
                }
            }
        }
    }
}

impl std::str::FromStr for HeadingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bearing" => Ok(HeadingConvention::Bearing),
            "baseline-tangent" => Ok(HeadingConvention::BaselineTangent),
            _ => Err(format!(
                "unknown heading convention '{s}', expected 'bearing' or 'baseline-tangent'"
            )),
        }
    }
}

/// Which interior angle the law of sines pairs with each camera range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePairing {
    /// Each range uses the angle at the other camera, the one opposite to it.
    ///
    /// The target lies on both sight-lines.
    #[default]
    Opposite,
    /// Each range uses the angle at its own camera.
    ///
    /// Matches the corrected ranges only for symmetric geometry. Asymmetric targets land off
    /// the right sight-line and mirroring the images does not negate the heading.
    SameSide,
}

impl std::str::FromStr for RangePairing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opposite" => Ok(RangePairing::Opposite),
            "same-side" => Ok(RangePairing::SameSide),
            _ => Err(format!(
                "unknown range pairing '{s}', expected 'opposite' or 'same-side'"
            )),
        }
    }
}

/// Tuning knobs of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangulationParams {
    /// Minimum vertex angle at the target, in degrees.
    ///
    /// `0.0` only rejects parallel or diverging sight-lines. Larger values also reject
    /// near-parallel rays, whose ranges blow up under small pixel errors.
    pub min_convergence_deg: f64,
    /// Convention of the returned heading.
    pub heading: HeadingConvention,
    /// Law-of-sines pairing used for the camera ranges.
    pub range_pairing: RangePairing,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            min_convergence_deg: 0.0,
            heading: HeadingConvention::Bearing,
            range_pairing: RangePairing::Opposite,
        }
    }
}

/// The full planar solution of a triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StereoFix {
    /// Angle of the left sight-line from straight ahead, in degrees.
    pub angle_left: f64,
    /// Angle of the right sight-line from straight ahead, in degrees.
    pub angle_right: f64,
    /// Range from the left camera to the target.
    pub dist_left: f64,
    /// Range from the right camera to the target.
    pub dist_right: f64,
    /// Position along the baseline, positive toward the right camera.
    pub x: f64,
    /// Position in front of the baseline.
    pub y: f64,
    /// Distance from the baseline midpoint.
    pub dist: f64,
    /// Heading in degrees.
    pub heading: f64,
}

impl StereoFix {
    /// Reduce the solution to the polar result.
    pub fn result(&self) -> TriangulationResult {
        TriangulationResult {
            dist: self.dist,
            heading: self.heading,
        }
    }
}

/// Triangulate the target of a request.
///
/// The target is placed in a frame with its origin at the midpoint of the baseline,
/// `x` along the baseline toward the right camera and `y` straight ahead.
///
/// # Arguments
///
/// * `req` - The pixel observations, camera intrinsics and baseline.
/// * `params` - The solver parameters.
///
/// # Errors
///
/// Returns [`TriangulationError::DivergentGeometry`] when the sight-lines do not cross,
/// [`TriangulationError::BehindBaseline`] when they only cross behind or on the baseline,
/// or a validation error for unusable inputs.
pub fn try_triangulate(
    req: &TriangulationRequest,
    params: &TriangulationParams,
) -> Result<StereoFix, TriangulationError> {
    req.validate()?;

    let angle_left = req.cam.horizontal_angle(req.left.x);
    let angle_right = req.cam.horizontal_angle(req.right.x);

    // the left ray must point further right than the right ray to cross it
    if angle_left <= angle_right {
        return Err(TriangulationError::DivergentGeometry {
            angle_left,
            angle_right,
        });
    }

    // interior angles of the triangle left camera / right camera / target
    let interior_left = 90.0 - angle_left;
    let interior_right = 90.0 + angle_right;
    let interior_target = 180.0 - interior_left - interior_right;

    // rays pointing sideways or backwards never form a triangle in front of the cameras
    let in_triangle = |angle: f64| angle > 0.0 && angle < 180.0;
    if !(in_triangle(interior_left) && in_triangle(interior_right)) {
        return Err(TriangulationError::BehindBaseline {
            angle_left,
            angle_right,
        });
    }

    if params.min_convergence_deg > 0.0 && interior_target < params.min_convergence_deg {
        return Err(TriangulationError::NearParallel {
            vertex_angle: interior_target,
            min: params.min_convergence_deg,
        });
    }

    let base = req.spacing / sin_deg(interior_target);
    let (dist_left, dist_right) = match params.range_pairing {
        RangePairing::Opposite => (
            base * sin_deg(interior_right),
            base * sin_deg(interior_left),
        ),
        RangePairing::SameSide => (
            base * sin_deg(interior_left),
            base * sin_deg(interior_right),
        ),
    };

    // walk from the left camera along its sight-line
    let x = -req.spacing / 2.0 + dist_left * cos_deg(interior_left);
    let y = dist_left * sin_deg(interior_left);

    let dist = x.hypot(y);
    let heading = params.heading.heading(x, y);

    if !(dist.is_finite() && heading.is_finite() && dist_right.is_finite()) {
        return Err(TriangulationError::NonFiniteSolution);
    }

    if y <= 0.0 {
        return Err(TriangulationError::BehindBaseline {
            angle_left,
            angle_right,
        });
    }

    Ok(StereoFix {
        angle_left,
        angle_right,
        dist_left,
        dist_right,
        x,
        y,
        dist,
        heading,
    })
}

/// Triangulate the target of a request, folding every failure into the sentinel.
///
/// The request and the outcome are reported to `sink`. Failures are reported as errors and
/// yield [`TriangulationResult::FAILURE`].
pub fn triangulate<S: DiagnosticSink + ?Sized>(
    req: &TriangulationRequest,
    params: &TriangulationParams,
    sink: &S,
) -> TriangulationResult {
    sink.info(&format!(
        "Request: left={:.2},{:.2}, right={:.2},{:.2}",
        req.left.x, req.left.y, req.right.x, req.right.y
    ));

    match try_triangulate(req, params) {
        Ok(fix) => {
            let res = fix.result();
            sink.info(&format!(
                "Returning response: [dist:{:.2}, heading:{:.2}]",
                res.dist, res.heading
            ));
            res
        }
        Err(err) => {
            sink.error(&err.to_string());
            TriangulationResult::FAILURE
        }
    }
}
