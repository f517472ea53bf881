//! Orientation sampling: per-segment direction table and its interpolants.

use kin_core::Tolerance;
use kin_math::Vector3;

use crate::trajectory::{PolylineMetrics, Trajectory};

/// Per-point unit direction table.
///
/// Entry `i` (for `i < N-1`) is the normalized vector from point `i` to
/// point `i+1`; the last entry repeats the previous one so the table has
/// one entry per trajectory point. A zero-length segment has no defined
/// direction and yields the zero vector.
pub fn direction_table(trajectory: &Trajectory, tolerance: Tolerance) -> Vec<Vector3> {
    let points = trajectory.points();
    let mut table = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let d = pair[1] - pair[0];
        let len = d.length();
        if tolerance.segment_is_zero(len) {
            table.push(Vector3::ZERO);
        } else {
            table.push(d / len);
        }
    }
    // trailing repeat keeps the table length equal to the point count
    let last = table[table.len() - 1];
    table.push(last);
    table
}

/// Discrete direction lookup by fractional vertex index.
///
/// Selects `table[clamp(floor(u), 0, N-1)]`; the direction jumps at each
/// vertex, with no interpolation.
pub fn orientation_by_index(directions: &[Vector3], u: f64) -> Vector3 {
    let idx = (u.floor().max(0.0) as usize).min(directions.len() - 1);
    directions[idx]
}

/// Blended direction lookup by arc length.
///
/// Locates the segment containing `s`, linearly blends the two bounding
/// table entries by the in-segment fraction, then renormalizes. This is a
/// linear blend, not a great-circle interpolation: when the bounding
/// directions are near antiparallel the blend can collapse toward zero
/// before renormalization. In that case the raw near-zero vector is
/// returned so the caller can detect the degenerate direction.
pub fn orientation_by_length(
    metrics: &PolylineMetrics,
    directions: &[Vector3],
    s: f64,
    tolerance: Tolerance,
) -> Vector3 {
    if s <= 0.0 {
        return directions[0];
    }
    if s >= metrics.total_length() {
        return directions[directions.len() - 1];
    }
    let (idx, frac) = metrics.locate(s, tolerance);
    blend(directions[idx], directions[idx + 1], frac, tolerance)
}

/// Linear blend of two direction vectors, renormalized when possible.
pub(crate) fn blend(a: Vector3, b: Vector3, frac: f64, tolerance: Tolerance) -> Vector3 {
    let d = a.lerp(b, frac);
    let len = d.length();
    if tolerance.direction_is_degenerate(len) {
        return d;
    }
    d / len
}
