//! One colliding nucleus: an ensemble of `A` sampled nucleons
//!
//! Nucleons are sampled independently from the Woods-Saxon table, then the
//! whole nucleus is shifted rigidly in the transverse plane to its place on the
//! impact-parameter axis. Collision counters only ever go up.

use log::debug;

use super::density::RadialDensityTable;
use super::error::{GlauberError, GlauberResult};
use super::random::EventRng;
use super::states::{NVec3, Nucleon};

#[derive(Debug, Clone)]
pub struct Nucleus {
    mass_number: u32,
    nucleon_radius: f64,
    nucleons: Vec<Nucleon>,
}

impl Nucleus {
    /// Empty nucleus of mass number `mass_number`; call [`Nucleus::generate`] next
    pub fn new(mass_number: u32, nucleon_radius: f64) -> Self {
        debug!("Atomic number is: {mass_number}");
        Self {
            mass_number,
            nucleon_radius,
            nucleons: Vec::new(),
        }
    }

    /// Nucleus with explicit nucleon positions, bypassing sampling
    pub fn from_positions(nucleon_radius: f64, positions: &[NVec3]) -> Self {
        Self {
            mass_number: positions.len() as u32,
            nucleon_radius,
            nucleons: positions.iter().map(|&x| Nucleon::new(x, nucleon_radius)).collect(),
        }
    }

    /// Sample all `A` nucleons from `table`, replacing any earlier configuration
    pub fn generate(&mut self, table: &RadialDensityTable, rng: &mut EventRng) -> GlauberResult<()> {
        let mut nucleons = Vec::with_capacity(self.mass_number as usize);
        for _ in 0..self.mass_number {
            let x = table.sample_position(rng)?;
            nucleons.push(Nucleon::new(x, self.nucleon_radius));
        }
        self.nucleons = nucleons;
        debug!("Nucleus configuration with {} nucleons has been generated", self.nucleons.len());
        Ok(())
    }

    /// Rigid transverse shift: every nucleon moves by `(-dx, -dy)`, z untouched
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for n in self.nucleons.iter_mut() {
            n.x.x -= dx;
            n.x.y -= dy;
        }
    }

    pub fn mark_collision(&mut self, index: usize) -> GlauberResult<()> {
        let len = self.nucleons.len();
        let nucleon = self.nucleons.get_mut(index).ok_or_else(|| {
            GlauberError::configuration(format!("nucleon index {index} out of range for {len} nucleons"))
        })?;
        nucleon.collisions += 1;
        Ok(())
    }

    /// Collisions recorded for nucleon `index` (0 when out of range)
    pub fn collision_count(&self, index: usize) -> u32 {
        self.nucleons.get(index).map_or(0, |n| n.collisions)
    }

    pub fn wounded_count(&self) -> usize {
        self.nucleons.iter().filter(|n| n.is_wounded()).count()
    }

    pub fn nucleon_radius(&self) -> f64 {
        self.nucleon_radius
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub fn len(&self) -> usize {
        self.nucleons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleons.is_empty()
    }
}
