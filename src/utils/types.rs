use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Plain `{x, y, z}` triple used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Xyz> for Vector3<f64> {
    fn from(pos: Xyz) -> Self {
        Vector3::new(pos.x, pos.y, pos.z)
    }
}

impl From<Vector3<f64>> for Xyz {
    fn from(vec: Vector3<f64>) -> Self {
        Self {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}
