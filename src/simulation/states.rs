//! Core state types for one collision event.
//!
//! - `Nucleon`         sampled nucleon with its binary-collision counter
//! - `TransversePoint` a location in the transverse (x, y) plane, used for
//!   binary-collision midpoints and wounded nucleons
//!
//! Positions are nalgebra vectors in fm.

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Binary-collision midpoint or wounded-nucleon location
pub type TransversePoint = NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Nucleon {
    pub x: NVec3, // position (z = 0 after Lorentz contraction)
    pub radius: f64, // effective radius from sigma_nn
    pub collisions: u32, // binary collisions experienced so far
}

impl Nucleon {
    pub fn new(x: NVec3, radius: f64) -> Self {
        Self { x, radius, collisions: 0 }
    }

    /// Projection on the transverse plane
    pub fn transverse(&self) -> TransversePoint {
        NVec2::new(self.x.x, self.x.y)
    }

    pub fn is_wounded(&self) -> bool {
        self.collisions > 0
    }
}
