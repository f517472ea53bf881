/// Tolerance management for the sampling pipeline.
///
/// The engine clamps out-of-range parameters instead of erroring, so the
/// only numeric decisions left are "is this segment zero-length", "is this
/// direction degenerate", and "is this curvature numerically zero". Each
/// gets its own named epsilon.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Below this, a segment counts as zero-length (no direction defined).
    pub segment: f64,
    /// Below this, a direction vector counts as degenerate before
    /// normalization.
    pub direction: f64,
    /// Below this, curvature counts as zero (infinite radius).
    pub curvature: f64,
}

impl Tolerance {
    pub const DEFAULT_SEGMENT: f64 = 1e-12;
    pub const DEFAULT_DIRECTION: f64 = 1e-10;
    pub const DEFAULT_CURVATURE: f64 = 1e-12;

    pub fn new(segment: f64, direction: f64, curvature: f64) -> Self {
        Self {
            segment,
            direction,
            curvature,
        }
    }

    /// Check if a segment length counts as zero.
    pub fn segment_is_zero(self, len: f64) -> bool {
        len.abs() < self.segment
    }

    /// Check if a squared vector magnitude indicates a degenerate direction.
    pub fn direction_is_degenerate(self, magnitude: f64) -> bool {
        magnitude < self.direction
    }

    /// Check if a curvature value counts as numerically zero.
    pub fn curvature_is_zero(self, k: f64) -> bool {
        k.abs() < self.curvature
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            segment: Self::DEFAULT_SEGMENT,
            direction: Self::DEFAULT_DIRECTION,
            curvature: Self::DEFAULT_CURVATURE,
        }
    }
}
