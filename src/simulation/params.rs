//! Physical and numerical parameters of a Glauber run
//!
//! `Parameters` holds the per-event settings:
//! - colliding system (mass number, impact parameter),
//! - nucleon size derived from the inelastic nucleon-nucleon cross-section,
//! - entropy grid and deposition kernel,
//! - eccentricity orders to evaluate

use std::f64::consts::PI;

use super::error::{GlauberError, GlauberResult};
use super::field::{DepositionKernel, GridSpec};

/// Black-disk nucleon radius (fm) for a cross-section `sigma_nn` in mb
///
/// `r = sqrt(sigma / (2 pi)) / 2`, with 0.1 converting mb to fm^2.
pub fn nucleon_radius_from_cross_section(sigma_nn: f64) -> f64 {
    (0.1 / (2.0 * PI) * sigma_nn).sqrt() / 2.0
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub mass_number: u32, // A, same for both nuclei
    pub impact_parameter: f64, // b (fm)
    pub sigma_nn: f64, // mb
    pub nucleon_radius: f64, // fm, from sigma_nn
    pub grid: GridSpec, // entropy density table
    pub kernel: DepositionKernel, // deposition width and alpha
    pub orders: Vec<u32>, // eccentricity orders
}

impl Parameters {
    pub fn new(
        mass_number: u32,
        impact_parameter: f64,
        sigma_nn: f64,
        grid: GridSpec,
        kernel: DepositionKernel,
        orders: Vec<u32>,
    ) -> GlauberResult<Self> {
        if mass_number == 0 {
            return Err(GlauberError::configuration("atomic number must be positive"));
        }
        if !(sigma_nn > 0.0) {
            return Err(GlauberError::configuration(format!("sigma_nn must be positive, got {sigma_nn}")));
        }
        if !impact_parameter.is_finite() {
            return Err(GlauberError::configuration("impact parameter must be finite"));
        }
        if orders.contains(&0) {
            return Err(GlauberError::configuration("eccentricity orders start at 1"));
        }
        Ok(Self {
            mass_number,
            impact_parameter,
            sigma_nn,
            nucleon_radius: nucleon_radius_from_cross_section(sigma_nn),
            grid,
            kernel,
            orders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lhc_cross_section_radius() {
        assert_abs_diff_eq!(nucleon_radius_from_cross_section(60.0), 0.4886, epsilon = 1e-4);
    }

    #[test]
    fn rejects_bad_inputs() {
        let grid = GridSpec::new(-13.0, 13.0, 0.1).unwrap();
        let kernel = DepositionKernel::new(0.7, 0.3).unwrap();
        assert!(Parameters::new(0, 6.0, 60.0, grid, kernel, vec![2]).is_err());
        assert!(Parameters::new(208, 6.0, -1.0, grid, kernel, vec![2]).is_err());
        assert!(Parameters::new(208, 6.0, 60.0, grid, kernel, vec![0, 2]).is_err());
        assert!(Parameters::new(208, 6.0, 60.0, grid, kernel, vec![2, 3]).is_ok());
    }
}
