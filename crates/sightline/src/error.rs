/// An error type for the triangulation module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TriangulationError {
    /// The two sight-lines are parallel or diverge, so they never meet in front of the baseline.
    #[error("Invalid input, angles are diverging (left: {angle_left:.2} deg, right: {angle_right:.2} deg)")]
    DivergentGeometry {
        /// Angle of the left sight-line from straight ahead, in degrees.
        angle_left: f64,
        /// Angle of the right sight-line from straight ahead, in degrees.
        angle_right: f64,
    },

    /// The sight-lines only cross on or behind the baseline.
    #[error("Sight-lines do not meet in front of the cameras (left: {angle_left:.2} deg, right: {angle_right:.2} deg)")]
    BehindBaseline {
        /// Angle of the left sight-line from straight ahead, in degrees.
        angle_left: f64,
        /// Angle of the right sight-line from straight ahead, in degrees.
        angle_right: f64,
    },

    /// The sight-lines converge at a vertex angle below the configured minimum.
    #[error("Sight-lines are nearly parallel ({vertex_angle:.4} deg < {min:.4} deg)")]
    NearParallel {
        /// Vertex angle at the target, in degrees.
        vertex_angle: f64,
        /// Configured minimum vertex angle, in degrees.
        min: f64,
    },

    /// Error when the camera intrinsics cannot describe a real camera.
    #[error("Invalid camera intrinsics: {0}")]
    InvalidIntrinsics(String),

    /// Error when the baseline is not a finite, strictly positive length.
    #[error("Invalid camera spacing ({0})")]
    InvalidSpacing(f64),

    /// Error when a pixel coordinate is NaN or infinite.
    #[error("Pixel coordinates must be finite")]
    NonFinitePixel,

    /// The computation produced a NaN or infinite position.
    #[error("Triangulation produced a non-finite solution")]
    NonFiniteSolution,
}
