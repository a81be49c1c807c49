use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::FULL_TURN_DEG;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Rotation taking the body frame to the world frame for a compass heading.
///
/// Heading increases clockwise when viewed from above (+Y up), so the body
/// is turned about +Y by the negated heading.
pub fn heading_rotation(yaw_deg: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -deg_to_rad(yaw_deg))
}

/// World-space (forward, right) unit vectors for a heading.
pub fn heading_basis(yaw_deg: f64) -> (Vector3<f64>, Vector3<f64>) {
    let rotation = heading_rotation(yaw_deg);
    (
        rotation * Vector3::new(0.0, 0.0, -1.0),
        rotation * Vector3::new(1.0, 0.0, 0.0),
    )
}
