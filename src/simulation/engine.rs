//! Binary-collision engine
//!
//! Places the two nuclei at `-b/2` and `+b/2` on the x axis, tests every
//! nucleon pair with the black-disk criterion `d_perp <= 2 r_N`, records the
//! midpoint of each binary collision and collects wounded nucleons.

use log::{debug, info};

use super::error::{GlauberError, GlauberResult};
use super::nucleus::Nucleus;
use super::states::{NVec2, TransversePoint};

/// Largest tolerated difference between the nucleon radii of both nuclei
pub const RADIUS_TOLERANCE: f64 = 1e-18;

/// Black-disk hit rule in the transverse plane
pub fn hit(nucleon_radius: f64, a: &TransversePoint, b: &TransversePoint) -> bool {
    (a - b).norm() <= 2.0 * nucleon_radius
}

/// Collision geometry of one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionRecord {
    pub binary_collisions: Vec<TransversePoint>, // pair midpoints, one per collision
    pub wounded: Vec<TransversePoint>, // one entry per wounded nucleon
    pub wounded_per_nucleus: [usize; 2],
}

impl CollisionRecord {
    pub fn collision_count(&self) -> usize {
        self.binary_collisions.len()
    }

    /// Participants of both nuclei
    pub fn wounded_count(&self) -> usize {
        self.wounded.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionEngine {
    pub impact_parameter: f64, // fm, along x
}

impl CollisionEngine {
    pub fn new(impact_parameter: f64) -> Self {
        Self { impact_parameter }
    }

    /// Shift nucleus 1 to `(-b/2, 0)` and nucleus 2 to `(+b/2, 0)`
    pub fn position(&self, nuc1: &mut Nucleus, nuc2: &mut Nucleus) {
        nuc1.translate(self.impact_parameter / 2.0, 0.0);
        nuc2.translate(-self.impact_parameter / 2.0, 0.0);
    }

    /// Run the pair scan on two positioned nuclei
    ///
    /// Collision counters of both nuclei are incremented in place. Fails with
    /// [`GlauberError::Configuration`] on mismatched nucleon radii and with
    /// [`GlauberError::NoCollision`] when no pair hits.
    pub fn collide(&self, nuc1: &mut Nucleus, nuc2: &mut Nucleus) -> GlauberResult<CollisionRecord> {
        let r1 = nuc1.nucleon_radius();
        let r2 = nuc2.nucleon_radius();
        if (r1 - r2).abs() > RADIUS_TOLERANCE {
            return Err(GlauberError::configuration(format!(
                "two different kinds of nucleon (radius {r1} fm vs {r2} fm)"
            )));
        }

        let p1: Vec<TransversePoint> = nuc1.nucleons().iter().map(|n| n.transverse()).collect();
        let p2: Vec<TransversePoint> = nuc2.nucleons().iter().map(|n| n.transverse()).collect();

        let mut record = CollisionRecord::default();
        for (i, a) in p1.iter().enumerate() {
            for (j, b) in p2.iter().enumerate() {
                if hit(r1, a, b) {
                    nuc1.mark_collision(i)?;
                    nuc2.mark_collision(j)?;
                    record.binary_collisions.push(NVec2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0));
                }
            }
        }

        // one pass over both nuclei, interleaved by nucleon index
        for i in 0..p1.len().max(p2.len()) {
            if nuc1.collision_count(i) > 0 {
                record.wounded_per_nucleus[0] += 1;
                record.wounded.push(p1[i]);
            }
            if nuc2.collision_count(i) > 0 {
                record.wounded_per_nucleus[1] += 1;
                record.wounded.push(p2[i]);
            }
        }

        if record.binary_collisions.is_empty() {
            debug!("No binary collision at b = {} fm", self.impact_parameter);
            return Err(GlauberError::NoCollision { impact_parameter: self.impact_parameter });
        }

        info!("Number of participants: {}", record.wounded_count());
        info!("Total binary collision: {}", record.collision_count());
        Ok(record)
    }
}
