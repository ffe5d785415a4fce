use serde::{Deserialize, Serialize};

use crate::TriangulationError;

/// A pixel coordinate of a detected target in one camera image.
///
/// Values outside the image bounds are accepted and map to angles outside the field of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Column, in pixels.
    pub x: f64,
    /// Row, in pixels.
    pub y: f64,
}

impl PixelPoint {
    /// Create a new pixel point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The intrinsic parameters shared by both cameras of the pair.
///
/// Both cameras are assumed identical and co-planar, separated only horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
    /// Total horizontal field of view in degrees.
    pub fov_horiz: f64,
    /// Total vertical field of view in degrees.
    pub fov_vert: f64,
}

impl CameraIntrinsics {
    /// Create a new set of intrinsics.
    ///
    /// # Arguments
    ///
    /// * `width` - The image width in pixels.
    /// * `height` - The image height in pixels.
    /// * `fov_horiz` - The horizontal field of view in degrees.
    /// * `fov_vert` - The vertical field of view in degrees.
    pub fn new(width: f64, height: f64, fov_horiz: f64, fov_vert: f64) -> Self {
        Self {
            width,
            height,
            fov_horiz,
            fov_vert,
        }
    }

    /// Angle of a pixel column from the optical axis, in degrees.
    ///
    /// The mapping is linear over the field of view: column `0` maps to `-fov_horiz / 2`,
    /// column `width` to `+fov_horiz / 2` and the image center to `0`.
    pub fn horizontal_angle(&self, x: f64) -> f64 {
        ((x / self.width) * 2.0 - 1.0) * self.fov_horiz / 2.0
    }

    /// Check that the intrinsics describe a usable camera.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(TriangulationError::InvalidIntrinsics(format!(
                "width must be positive, got {}",
                self.width
            )));
        }

        if !(self.fov_horiz.is_finite() && self.fov_horiz > 0.0 && self.fov_horiz < 360.0) {
            return Err(TriangulationError::InvalidIntrinsics(format!(
                "horizontal field of view must be in (0, 360) deg, got {}",
                self.fov_horiz
            )));
        }

        // the vertical terms are not used by the planar solver
        if !(self.height.is_finite() && self.fov_vert.is_finite()) {
            return Err(TriangulationError::InvalidIntrinsics(
                "height and vertical field of view must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Sine of an angle given in degrees.
pub fn sin_deg(angle: f64) -> f64 {
    angle.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_deg(angle: f64) -> f64 {
    angle.to_radians().cos()
}
