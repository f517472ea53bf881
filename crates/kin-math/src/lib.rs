pub mod angles;
pub mod ease;
pub mod rotation;

pub use glam::{DQuat, DVec2, DVec3, DVec4, DMat3, DMat4};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
