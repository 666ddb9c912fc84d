//! Entropy density deposition on the transverse grid
//!
//! Each wounded nucleon adds `alpha` and each binary collision adds
//! `1 - alpha` to every grid cell whose centre lies within `width` of it.
//! The profile is left unnormalized; scaling it to a measured multiplicity
//! is done downstream.

use log::info;
use rayon::prelude::*;

use super::engine::CollisionRecord;
use super::error::{GlauberError, GlauberResult};
use super::states::TransversePoint;

/// Square grid `[lower, upper]^2` with spacing `step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

impl GridSpec {
    pub fn new(lower: f64, upper: f64, step: f64) -> GlauberResult<Self> {
        if !(step > 0.0) {
            return Err(GlauberError::configuration(format!("grid step must be positive, got {step}")));
        }
        if !(upper > lower) {
            return Err(GlauberError::configuration(format!(
                "grid upper bound {upper} must exceed lower bound {lower}"
            )));
        }
        Ok(Self { lower, upper, step })
    }

    /// Points per axis
    pub fn len(&self) -> usize {
        ((self.upper - self.lower) / self.step + 0.1) as usize + 1
    }

    /// Physical coordinate of grid index `i`
    pub fn coordinate(&self, i: usize) -> f64 {
        self.lower + i as f64 * self.step
    }
}

/// Indicator kernel and the wounded/binary mixing weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepositionKernel {
    pub width: f64, // fm
    pub alpha: f64, // weight of a wounded nucleon; binary collisions get 1 - alpha
}

impl DepositionKernel {
    pub fn new(width: f64, alpha: f64) -> GlauberResult<Self> {
        if !(width > 0.0) {
            return Err(GlauberError::configuration(format!("deposition width must be positive, got {width}")));
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(GlauberError::configuration(format!("alpha must lie in [0, 1], got {alpha}")));
        }
        Ok(Self { width, alpha })
    }
}

/// Entropy density `field[i][j]` at `(lower + i step, lower + j step)`, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyField {
    grid: GridSpec,
    n: usize,
    values: Vec<f64>,
}

impl EntropyField {
    /// All-zero field on `grid`
    pub fn zeros(grid: GridSpec) -> Self {
        let n = grid.len();
        Self { grid, n, values: vec![0.0; n * n] }
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Points per axis
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
    }

    /// Row `i` (fixed x, varying y)
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `(x, y, value)` for every cell, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.values.iter().enumerate().map(move |(k, &v)| {
            let (i, j) = (k / self.n, k % self.n);
            (self.grid.coordinate(i), self.grid.coordinate(j), v)
        })
    }

    /// Sum of all cell values (no area factor)
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

fn within(x: f64, y: f64, p: &TransversePoint, width: f64) -> bool {
    ((x - p.x) * (x - p.x) + (y - p.y) * (y - p.y)).sqrt() <= width
}

/// Deposit the collision record on `grid`
///
/// Rows are filled in parallel; inside a cell wounded contributions are
/// summed before binary ones, in record order.
pub fn deposit(grid: GridSpec, kernel: &DepositionKernel, record: &CollisionRecord) -> EntropyField {
    let mut field = EntropyField::zeros(grid);
    let n = field.n;
    let wn_weight = kernel.alpha;
    let bc_weight = 1.0 - kernel.alpha;

    field.values.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
        let x = grid.coordinate(i);
        for (j, cell) in row.iter_mut().enumerate() {
            let y = grid.coordinate(j);
            for p in &record.wounded {
                if within(x, y, p, kernel.width) {
                    *cell += wn_weight;
                }
            }
            for p in &record.binary_collisions {
                if within(x, y, p, kernel.width) {
                    *cell += bc_weight;
                }
            }
        }
    });

    info!("Entropy profile is generated ({n} x {n} cells), fit to final multiplicity before use");
    field
}
