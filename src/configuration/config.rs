//! Configuration types for loading Glauber runs from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`CollisionConfig`] – colliding system and entropy deposition options
//! - [`GridConfig`]      – transverse entropy density table
//! - [`RunConfig`]       – event count, eccentricity orders, seed and output
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every key is optional; missing keys take the defaults shown here:
//!
//! ```yaml
//! collision:
//!   atomic_number: 208      # A of both nuclei
//!   impact_parameter: 6.0   # fm
//!   sigma_nn: 60.0          # inelastic NN cross-section, mb
//!   alpha: 0.3              # weight of a wounded nucleon
//!   entropy_width: 0.7      # deposition radius, fm
//!
//! grid:
//!   lower: -13.0
//!   upper: 13.0
//!   step: 0.1
//!
//! run:
//!   events: 10
//!   orders: [2]
//!   seed: 42                # omit for a clock seed
//!   max_retries: 0          # fresh samples tried after a no-collision event
//!   parallel: true
//!   output_dir: "data"
//!   dump_nucleons: false
//!   dump_entropy: true
//! ```
//!
//! The scenario is then mapped into runtime [`crate::Parameters`], which
//! validates the values.

use serde::Deserialize;

/// Colliding system and deposition options
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CollisionConfig {
    pub atomic_number: u32, // A, same for both nuclei
    pub impact_parameter: f64, // fm
    pub sigma_nn: f64, // mb, only used for the nucleon radius
    pub alpha: f64, // wounded weight, binary collisions get 1 - alpha
    pub entropy_width: f64, // fm
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            atomic_number: 208,
            impact_parameter: 6.0,
            sigma_nn: 60.0,
            alpha: 0.3,
            entropy_width: 0.7,
        }
    }
}

/// Square entropy density table `[lower, upper]^2`
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub lower: f64, // fm, large enough to hold all collisions
    pub upper: f64, // fm
    pub step: f64, // fm, precision vs speed
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { lower: -13.0, upper: 13.0, step: 0.1 }
    }
}

/// Event loop and output settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub events: u64, // number of independent events
    pub orders: Vec<u32>, // eccentricity orders written per event
    pub seed: Option<u64>, // run seed, clock-based when absent
    pub max_retries: u32, // resamples allowed after a no-collision event
    pub parallel: bool, // spread events over the rayon pool
    pub output_dir: String, // where dumps are written
    pub dump_nucleons: bool, // write sampled nucleon coordinates
    pub dump_entropy: bool, // write the entropy density table
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            events: 10,
            orders: vec![2],
            seed: None,
            max_retries: 0,
            parallel: true,
            output_dir: "data".to_string(),
            dump_nucleons: false,
            dump_entropy: true,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub collision: CollisionConfig,
    pub grid: GridConfig,
    pub run: RunConfig,
}
