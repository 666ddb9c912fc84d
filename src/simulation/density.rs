//! Woods-Saxon radial sampling by inverse CDF
//!
//! The radial weight `f(r) = r^2 rho0 / (1 + exp((r - R) / a))` is tabulated on
//! a fixed grid as a running sum. A radius is drawn by picking a uniform value
//! in `[0, cdf_max)` and binary-searching the first table entry that reaches it.

use std::f64::consts::PI;

use super::error::{GlauberError, GlauberResult};
use super::random::EventRng;
use super::states::NVec3;

/// Woods-Saxon shape parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WoodsSaxon {
    pub radius: f64, // half-density radius R (fm)
    pub diffuseness: f64, // surface diffuseness a (fm)
    pub rho0: f64, // central density
}

impl WoodsSaxon {
    /// Parameters for mass number `a`: R = 1.25 A^(1/3) fm, a = 0.5 fm, rho0 = 0.16
    pub fn for_mass_number(a: u32) -> Self {
        Self {
            radius: 1.25 * f64::from(a).powf(1.0 / 3.0),
            diffuseness: 0.5,
            rho0: 0.16,
        }
    }

    /// Radial sampling weight r^2 rho(r)
    pub fn radial_weight(&self, r: f64) -> f64 {
        r * r * self.rho0 / (1.0 + ((r - self.radius) / self.diffuseness).exp())
    }
}

/// Radial grid of the cumulative table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialTable {
    pub r_min: f64,
    pub r_max: f64,
    pub step: f64,
}

impl Default for RadialTable {
    fn default() -> Self {
        Self { r_min: 0.0, r_max: 20.0, step: 0.01 }
    }
}

impl RadialTable {
    /// Number of tabulated points, `r_min` and `r_max` included
    pub fn len(&self) -> usize {
        ((self.r_max - self.r_min) / self.step + 0.1) as usize + 1
    }

    pub fn radius_at(&self, index: usize) -> f64 {
        self.r_min + self.step * index as f64
    }
}

/// Cumulative Woods-Saxon table, shareable between the two nuclei of an event
#[derive(Debug, Clone)]
pub struct RadialDensityTable {
    grid: RadialTable,
    cdf: Vec<f64>,
    cdf_max: f64,
}

impl RadialDensityTable {
    /// Empty table; must be built before any inversion
    pub fn new(grid: RadialTable) -> Self {
        Self { grid, cdf: Vec::new(), cdf_max: 0.0 }
    }

    /// Built table for `profile` on the default radial grid
    pub fn for_profile(profile: &WoodsSaxon) -> Self {
        let mut table = Self::new(RadialTable::default());
        table.build(profile);
        table
    }

    /// Running sum of the radial weight: cdf[0] = 0, cdf[i] = cdf[i-1] + f(r_i)
    pub fn build(&mut self, profile: &WoodsSaxon) {
        let n = self.grid.len();
        let mut cdf = Vec::with_capacity(n);
        cdf.push(0.0);
        let mut acc = 0.0;
        for i in 1..n {
            acc += profile.radial_weight(self.grid.radius_at(i));
            cdf.push(acc);
        }
        self.cdf_max = acc;
        self.cdf = cdf;
    }

    pub fn is_built(&self) -> bool {
        !self.cdf.is_empty()
    }

    pub fn grid(&self) -> &RadialTable {
        &self.grid
    }

    pub fn values(&self) -> &[f64] {
        &self.cdf
    }

    pub fn max(&self) -> f64 {
        self.cdf_max
    }

    fn check(&self) -> GlauberResult<()> {
        if !self.is_built() {
            return Err(GlauberError::configuration("radial CDF table has not been built"));
        }
        if self.cdf_max == 0.0 {
            return Err(GlauberError::configuration("radial CDF table is zero everywhere"));
        }
        Ok(())
    }

    /// Radius for a cumulative value `u` in `[0, max]`: smallest index with cdf >= u
    pub fn invert(&self, u: f64) -> GlauberResult<f64> {
        self.check()?;
        let idx = self.cdf.partition_point(|&c| c < u).min(self.cdf.len() - 1);
        Ok(self.grid.radius_at(idx))
    }

    /// Draw one radius
    pub fn sample_radius(&self, rng: &mut EventRng) -> GlauberResult<f64> {
        self.check()?;
        let u = rng.uniform(0.0, self.cdf_max);
        self.invert(u)
    }

    /// Draw one nucleon position: Woods-Saxon radius, isotropic direction, z
    /// flattened to 0 by Lorentz contraction
    pub fn sample_position(&self, rng: &mut EventRng) -> GlauberResult<NVec3> {
        let r = self.sample_radius(rng)?;
        let cos_theta = rng.uniform(-1.0, 1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let phi = rng.uniform(0.0, 2.0 * PI);
        Ok(NVec3::new(r * sin_theta * phi.cos(), r * sin_theta * phi.sin(), 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_length_matches_grid() {
        assert_eq!(RadialTable::default().len(), 2001);
        let table = RadialDensityTable::for_profile(&WoodsSaxon::for_mass_number(208));
        assert_eq!(table.values().len(), 2001);
        assert_eq!(table.values()[0], 0.0);
        assert_eq!(table.max(), *table.values().last().unwrap());
    }

    #[test]
    fn unbuilt_table_is_rejected() {
        let table = RadialDensityTable::new(RadialTable::default());
        let mut rng = EventRng::from_seed(1);
        assert!(matches!(table.sample_radius(&mut rng), Err(GlauberError::Configuration { .. })));
        assert!(matches!(table.invert(0.5), Err(GlauberError::Configuration { .. })));
    }

    #[test]
    fn zero_density_is_rejected() {
        let flat = WoodsSaxon { radius: 6.0, diffuseness: 0.5, rho0: 0.0 };
        let table = RadialDensityTable::for_profile(&flat);
        let mut rng = EventRng::from_seed(1);
        assert!(matches!(table.sample_radius(&mut rng), Err(GlauberError::Configuration { .. })));
    }

    #[test]
    fn inversion_hits_table_ends() {
        let table = RadialDensityTable::for_profile(&WoodsSaxon::for_mass_number(63));
        assert_eq!(table.invert(0.0).unwrap(), 0.0);
        let r_last = table.invert(table.max()).unwrap();
        assert!(r_last <= 20.0 + 1e-9);
        // first non-zero weight sits at index 1
        assert_eq!(table.invert(1e-300).unwrap(), 0.01);
    }

    #[test]
    fn sampled_positions_are_flat_and_bounded() {
        let table = RadialDensityTable::for_profile(&WoodsSaxon::for_mass_number(197));
        let mut rng = EventRng::from_seed(5);
        for _ in 0..500 {
            let p = table.sample_position(&mut rng).unwrap();
            assert_eq!(p.z, 0.0);
            assert!(p.norm() <= 20.0 + 1e-9);
        }
    }
}
