//! Angle extraction from direction vectors.

use crate::Vector3;

/// Heading angle in the XY plane, in degrees.
///
/// `yaw = atan2(dir.y, dir.x)`; the z component is discarded. This is the
/// planar convention the consuming renderer applies around its Z axis.
pub fn yaw_degrees(direction: Vector3) -> f64 {
    direction.y.atan2(direction.x).to_degrees()
}

/// Elevation angle out of the XY plane, in degrees.
///
/// Positive when the direction points above the plane.
pub fn pitch_degrees(direction: Vector3) -> f64 {
    let planar = (direction.x * direction.x + direction.y * direction.y).sqrt();
    direction.z.atan2(planar).to_degrees()
}
