//! Polyline trajectories and arc-length metrics.

use kin_core::{KinError, Result, Tolerance, Validate};
use kin_math::Point3;
use serde::{Deserialize, Serialize};

/// An immutable polyline trajectory: an ordered sequence of at least two
/// points in 3D space.
///
/// Construction validates the point count; the point list is never mutated
/// afterwards, so derived tables (metrics, direction table, Frenet frame)
/// stay consistent for the lifetime of the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<Point3>,
}

impl Trajectory {
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(KinError::InvalidTrajectory(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of points (always >= 2).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> Point3 {
        self.points[0]
    }

    pub fn last(&self) -> Point3 {
        self.points[self.points.len() - 1]
    }

    /// Largest valid index parameter, `N - 1` as a float.
    pub fn max_index(&self) -> f64 {
        (self.points.len() - 1) as f64
    }
}

impl Validate for Trajectory {
    fn validate(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(KinError::InvalidTrajectory(
                "trajectory lost its points".into(),
            ));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(KinError::InvalidTrajectory(
                "trajectory contains non-finite coordinates".into(),
            ));
        }
        Ok(())
    }
}

/// Arc-length measurements of a trajectory, computed in a single pass.
///
/// `cumulative_lengths` has one entry per point, starts at 0, is
/// non-decreasing, and ends at `total_length`. `segment_lengths` has one
/// entry per segment (N-1). A total length of zero (all points coincident)
/// is valid and must not crash downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylineMetrics {
    segment_lengths: Vec<f64>,
    cumulative_lengths: Vec<f64>,
    total_length: f64,
}

impl PolylineMetrics {
    pub fn of(trajectory: &Trajectory) -> Self {
        let points = trajectory.points();
        let mut segment_lengths = Vec::with_capacity(points.len() - 1);
        let mut cumulative_lengths = Vec::with_capacity(points.len());
        cumulative_lengths.push(0.0);

        let mut running = 0.0;
        for pair in points.windows(2) {
            let len = (pair[1] - pair[0]).length();
            segment_lengths.push(len);
            running += len;
            cumulative_lengths.push(running);
        }

        Self {
            segment_lengths,
            cumulative_lengths,
            total_length: running,
        }
    }

    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative_lengths
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Locate the segment containing arc length `s`, for `0 < s < total`.
    ///
    /// Returns `(segment_index, in_segment_fraction)`. Binary search over
    /// the cumulative lengths; a zero-length segment yields fraction 0 so
    /// callers never divide by a zero segment length.
    pub fn locate(&self, s: f64, tolerance: Tolerance) -> (usize, f64) {
        let n_segments = self.segment_lengths.len();
        // first index with cumulative >= s, then step back to the segment start
        let idx = self
            .cumulative_lengths
            .partition_point(|&c| c < s)
            .saturating_sub(1)
            .min(n_segments - 1);

        let seg_len = self.segment_lengths[idx];
        let frac = if tolerance.segment_is_zero(seg_len) {
            0.0
        } else {
            (s - self.cumulative_lengths[idx]) / seg_len
        };
        (idx, frac)
    }
}
