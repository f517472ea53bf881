//! Discrete Frenet-Serret frame: tangent, normal, binormal, curvature.

use kin_core::Tolerance;
use kin_math::Vector3;
use serde::{Deserialize, Serialize};

use crate::sample::blend;
use crate::trajectory::{PolylineMetrics, Trajectory};

/// Per-point Frenet-Serret frame of a polyline trajectory.
///
/// All five tables share the trajectory's point count. `tangents` is the
/// direction table. `normals[i]` is the normalized discrete derivative of
/// the tangent; where that derivative vanishes (straight runs, the last
/// point) the normal is the zero vector and downstream consumers must
/// supply their own fallback. `binormals[i] = tangents[i] × normals[i]`.
///
/// Curvature uses the `|v1 × v2| / |v1|³` estimate over consecutive
/// displacement vectors and is zero at both endpoints, where no second
/// difference exists. Radius of curvature is the reciprocal, `+∞` where
/// the curvature is numerically zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrenetFrame {
    tangents: Vec<Vector3>,
    normals: Vec<Vector3>,
    binormals: Vec<Vector3>,
    curvature: Vec<f64>,
    radius: Vec<f64>,
}

impl FrenetFrame {
    /// Compute the frame in a single pass over the trajectory.
    ///
    /// `directions` is the precomputed direction table (one entry per
    /// point, trailing repeat).
    pub fn of(trajectory: &Trajectory, directions: &[Vector3], tolerance: Tolerance) -> Self {
        let n = directions.len();
        let tangents = directions.to_vec();

        let mut normals = vec![Vector3::ZERO; n];
        for i in 0..n - 1 {
            let dt = tangents[i + 1] - tangents[i];
            let len = dt.length();
            if !tolerance.direction_is_degenerate(len) {
                normals[i] = dt / len;
            }
        }

        let binormals: Vec<Vector3> = tangents
            .iter()
            .zip(&normals)
            .map(|(t, nrm)| t.cross(*nrm))
            .collect();

        let points = trajectory.points();
        let mut curvature = vec![0.0; n];
        for i in 1..n - 1 {
            let v1 = points[i] - points[i - 1];
            let v2 = points[i + 1] - points[i];
            let den = v1.length().powi(3);
            if !tolerance.segment_is_zero(den) {
                curvature[i] = v1.cross(v2).length() / den;
            }
        }

        let radius = curvature
            .iter()
            .map(|&k| {
                if tolerance.curvature_is_zero(k) {
                    f64::INFINITY
                } else {
                    1.0 / k
                }
            })
            .collect();

        Self {
            tangents,
            normals,
            binormals,
            curvature,
            radius,
        }
    }

    pub fn tangents(&self) -> &[Vector3] {
        &self.tangents
    }

    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    pub fn binormals(&self) -> &[Vector3] {
        &self.binormals
    }

    pub fn curvature(&self) -> &[f64] {
        &self.curvature
    }

    pub fn radius_of_curvature(&self) -> &[f64] {
        &self.radius
    }

    /// Normal vector at a fractional vertex index (discrete lookup).
    pub fn normal_by_index(&self, u: f64) -> Vector3 {
        let idx = (u.floor().max(0.0) as usize).min(self.normals.len() - 1);
        self.normals[idx]
    }

    /// Normal vector at arc length `s`, blending the bounding per-point
    /// normals by the in-segment fraction. May return a near-zero vector
    /// where the normal is undefined.
    pub fn normal_at_length(
        &self,
        metrics: &PolylineMetrics,
        s: f64,
        tolerance: Tolerance,
    ) -> Vector3 {
        if s <= 0.0 {
            return self.normals[0];
        }
        if s >= metrics.total_length() {
            return self.normals[self.normals.len() - 1];
        }
        let (idx, frac) = metrics.locate(s, tolerance);
        blend(self.normals[idx], self.normals[idx + 1], frac, tolerance)
    }
}
