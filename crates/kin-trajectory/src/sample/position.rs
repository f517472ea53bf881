//! Position interpolation: by vertex index and by arc length.

use kin_core::Tolerance;
use kin_math::{Point3, Vector3};

use crate::trajectory::{PolylineMetrics, Trajectory};

/// Forward-difference step for tangent estimation, in arc-length units.
pub const TANGENT_STEP: f64 = 1e-4;

/// Interpolate a position by fractional vertex index.
///
/// `u` ranges over `[0, N-1]`; values outside are clamped to the first or
/// last point. Between vertices the position is the linear interpolation of
/// the two bounding points by the fractional part of `u`.
pub fn position_by_index(trajectory: &Trajectory, u: f64) -> Point3 {
    let points = trajectory.points();
    if u <= 0.0 {
        return points[0];
    }
    if u >= trajectory.max_index() {
        return points[points.len() - 1];
    }
    let i = u.floor() as usize;
    let frac = u - u.floor();
    points[i] + (points[i + 1] - points[i]) * frac
}

/// Interpolate a position by arc length.
///
/// `s` ranges over `[0, total_length]`; values outside are clamped. Inside
/// the range, the containing segment is found by binary search over the
/// cumulative lengths and the position is interpolated by the fraction of
/// that segment's length covered. Zero-length segments contribute zero
/// displacement (no division by zero).
pub fn position_by_length(
    trajectory: &Trajectory,
    metrics: &PolylineMetrics,
    s: f64,
    tolerance: Tolerance,
) -> Point3 {
    let points = trajectory.points();
    if s <= 0.0 {
        return points[0];
    }
    if s >= metrics.total_length() {
        return points[points.len() - 1];
    }
    let (idx, frac) = metrics.locate(s, tolerance);
    points[idx] + (points[idx + 1] - points[idx]) * frac
}

/// dP/ds: derivative of position with respect to arc length, estimated by a
/// forward finite difference of step `ds`.
///
/// The result is not normalized. At the very end of the trajectory the
/// forward sample clamps onto the last point, so the estimate degrades to a
/// near-zero vector there; callers must treat that as a degenerate
/// direction.
pub fn tangent_velocity(
    trajectory: &Trajectory,
    metrics: &PolylineMetrics,
    s: f64,
    ds: f64,
    tolerance: Tolerance,
) -> Vector3 {
    let p1 = position_by_length(trajectory, metrics, s, tolerance);
    let p2 = position_by_length(trajectory, metrics, s + ds, tolerance);
    (p2 - p1) / ds
}

/// d²P/ds²: second derivative of position with respect to arc length.
pub fn tangent_acceleration(
    trajectory: &Trajectory,
    metrics: &PolylineMetrics,
    s: f64,
    ds: f64,
    tolerance: Tolerance,
) -> Vector3 {
    let v1 = tangent_velocity(trajectory, metrics, s, ds, tolerance);
    let v2 = tangent_velocity(trajectory, metrics, s + ds, ds, tolerance);
    (v2 - v1) / ds
}
