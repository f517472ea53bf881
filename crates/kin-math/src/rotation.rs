//! Rotations derived from direction vectors.

use crate::{DMat3, DQuat, Point3, Vector3};

/// Build a rotation that aligns the local Z axis with `direction`.
///
/// Constructs an orthonormal basis `(right, up', direction)` from the given
/// up hint. When `direction` is collinear with `up` the right axis is
/// undefined; a fixed X axis is substituted.
pub fn rotation_from_direction(direction: Vector3, up: Vector3) -> DQuat {
    let direction = direction.normalize();

    let mut right = up.cross(direction);
    if right.length() < 1e-6 {
        right = Vector3::X;
    }
    right = right.normalize();
    let up2 = direction.cross(right);

    DQuat::from_mat3(&DMat3::from_cols(right, up2, direction))
}

/// Rotation that "looks" from `position` toward `target`, local Z forward.
pub fn look_at_rotation(position: Point3, target: Point3, up: Vector3) -> DQuat {
    rotation_from_direction(target - position, up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_rotation_aligns_z_with_direction() {
        let dir = dvec3(1.0, 2.0, 0.5).normalize();
        let q = rotation_from_direction(dir, Vector3::Z);
        let forward = q * Vector3::Z;
        assert!((forward - dir).length() < 1e-10);
    }

    #[test]
    fn test_rotation_is_unit() {
        let q = rotation_from_direction(dvec3(0.0, 1.0, 0.0), Vector3::Z);
        assert!((q.length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_collinear_up_fallback() {
        // direction parallel to up: right axis undefined, fallback kicks in
        let q = rotation_from_direction(Vector3::Z, Vector3::Z);
        let forward = q * Vector3::Z;
        assert!((forward - Vector3::Z).length() < 1e-10);
    }

    #[test]
    fn test_look_at() {
        let eye = dvec3(1.0, 1.0, 1.0);
        let target = dvec3(4.0, 5.0, 1.0);
        let q = look_at_rotation(eye, target, Vector3::Z);
        let forward = q * Vector3::Z;
        let expected = (target - eye).normalize();
        assert!((forward - expected).length() < 1e-10);
    }
}
