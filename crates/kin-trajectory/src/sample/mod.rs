//! Position and orientation sampling along a polyline trajectory.

mod orientation;
mod position;

use kin_core::Tolerance;
use kin_math::Vector3;

use crate::frenet::FrenetFrame;
use crate::trajectory::{PolylineMetrics, Trajectory};

pub use orientation::{direction_table, orientation_by_index, orientation_by_length};
pub(crate) use orientation::blend;
pub use position::{
    position_by_index, position_by_length, tangent_acceleration, tangent_velocity,
    TANGENT_STEP,
};

/// Precomputed inputs shared by all sampling strategies.
///
/// Every strategy receives the full context and ignores the parts it does
/// not need, so new strategies can be added without changing the registry
/// signature.
pub struct SampleContext<'a> {
    pub trajectory: &'a Trajectory,
    pub metrics: &'a PolylineMetrics,
    /// Per-point unit direction table (trailing entry repeated).
    pub directions: &'a [Vector3],
    pub frame: &'a FrenetFrame,
    pub tolerance: Tolerance,
}
