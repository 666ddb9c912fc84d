//! Build Glauber runs from configuration and drive their events
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` bundle
//! containing:
//! - validated physics parameters (`Parameters`)
//! - run settings (event count, seed, retries, output)
//!
//! One event is a `GlauberEvent`: two sampled nuclei, one collision pass, one
//! entropy field. Events share nothing but the radial table and the run seed,
//! each drawing from its own stream, so they can run on a thread pool.

use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::configuration::config::ScenarioConfig;
use crate::output::dump;
use crate::simulation::density::{RadialDensityTable, WoodsSaxon};
use crate::simulation::engine::{CollisionEngine, CollisionRecord};
use crate::simulation::error::{GlauberError, GlauberResult};
use crate::simulation::field::{deposit, DepositionKernel, EntropyField, GridSpec};
use crate::simulation::geometry;
use crate::simulation::nucleus::Nucleus;
use crate::simulation::params::Parameters;
use crate::simulation::random::{EventRng, SeedSource};

/// Event loop and output options
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub events: u64,
    pub seed: SeedSource,
    pub max_retries: u32,
    pub parallel: bool,
    pub output_dir: PathBuf,
    pub dump_nucleons: bool,
    pub dump_entropy: bool,
}

/// Fully-initialized run: physics parameters plus event loop settings
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub run: RunSettings,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> GlauberResult<Self> {
        let grid = GridSpec::new(cfg.grid.lower, cfg.grid.upper, cfg.grid.step)?;
        let kernel = DepositionKernel::new(cfg.collision.entropy_width, cfg.collision.alpha)?;

        let ScenarioConfig { collision: c_cfg, run: r_cfg, .. } = cfg;
        let parameters = Parameters::new(
            c_cfg.atomic_number,
            c_cfg.impact_parameter,
            c_cfg.sigma_nn,
            grid,
            kernel,
            r_cfg.orders,
        )?;

        let run = RunSettings {
            events: r_cfg.events,
            seed: SeedSource::from(r_cfg.seed),
            max_retries: r_cfg.max_retries,
            parallel: r_cfg.parallel,
            output_dir: PathBuf::from(r_cfg.output_dir),
            dump_nucleons: r_cfg.dump_nucleons,
            dump_entropy: r_cfg.dump_entropy,
        };

        Ok(Self { parameters, run })
    }

    /// Run every event, write the dumps and the eccentricity files
    ///
    /// Events that still have no collision after `max_retries` resamples are
    /// skipped; any other error aborts the run.
    pub fn run(&self) -> GlauberResult<RunSummary> {
        let seed = self.run.seed.resolve();
        let p = &self.parameters;
        info!(
            "Monte-Carlo Glauber model: A = {}, b = {} fm, {} events, seed {seed}",
            p.mass_number, p.impact_parameter, self.run.events
        );
        fs::create_dir_all(&self.run.output_dir)?;

        // both nuclei have the same A and share one table
        let table = RadialDensityTable::for_profile(&WoodsSaxon::for_mass_number(p.mass_number));

        // events run batch by batch; each batch is appended in event order
        // before the next starts, so finished events survive a later failure
        let batch = if self.run.parallel { rayon::current_num_threads().max(1) as u64 } else { 1 };
        let mut events = Vec::new();
        let mut skipped = 0;
        let mut start = 0;
        while start < self.run.events {
            let end = (start + batch).min(self.run.events);
            let outcomes: Vec<GlauberResult<Option<EventSummary>>> = if self.run.parallel {
                (start..end)
                    .into_par_iter()
                    .map(|k| self.run_indexed_event(k, seed, &table))
                    .collect()
            } else {
                (start..end).map(|k| self.run_indexed_event(k, seed, &table)).collect()
            };

            for outcome in outcomes {
                match outcome? {
                    Some(summary) => {
                        self.append_eccentricities(&summary)?;
                        events.push(summary);
                    }
                    None => skipped += 1,
                }
            }
            start = end;
        }

        info!("{} events completed, {skipped} skipped", events.len());
        Ok(RunSummary { seed, events, skipped })
    }

    fn append_eccentricities(&self, summary: &EventSummary) -> GlauberResult<()> {
        let a = self.parameters.mass_number;
        for &(order, ecc) in &summary.eccentricities {
            let path = dump::eccentricity_path(&self.run.output_dir, a, order);
            dump::append_eccentricities(&path, order, &[ecc])?;
        }
        Ok(())
    }

    fn run_indexed_event(&self, k: u64, seed: u64, table: &RadialDensityTable) -> GlauberResult<Option<EventSummary>> {
        let mut rng = EventRng::for_event(seed, k);
        let event = match run_event(&self.parameters, table, &mut rng, self.run.max_retries) {
            Ok(event) => event,
            Err(GlauberError::NoCollision { impact_parameter }) => {
                warn!("Event {} skipped: no binary collision at b = {impact_parameter} fm", k + 1);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let summary = event.summarize(k + 1)?;

        let dir = &self.run.output_dir;
        let a = self.parameters.mass_number;
        if self.run.dump_nucleons {
            for (which, nucleus) in event.nuclei().iter().enumerate() {
                dump::dump_nucleons(&dump::nucleus_path(dir, which + 1, a, k + 1), nucleus)?;
            }
        }
        if self.run.dump_entropy {
            event.dump_entropy(&dump::entropy_path(dir, a, k + 1))?;
        }

        info!("Loop {} completed!", k + 1);
        Ok(Some(summary))
    }
}

/// One collision event: two nuclei, their collision record and entropy field
#[derive(Debug, Clone)]
pub struct GlauberEvent<'a> {
    params: &'a Parameters,
    nuclei: [Nucleus; 2],
    record: Option<CollisionRecord>,
    field: Option<EntropyField>,
}

impl<'a> GlauberEvent<'a> {
    pub fn new(params: &'a Parameters) -> Self {
        Self {
            params,
            nuclei: [
                Nucleus::new(params.mass_number, params.nucleon_radius),
                Nucleus::new(params.mass_number, params.nucleon_radius),
            ],
            record: None,
            field: None,
        }
    }

    /// Sample both nuclei, collide them and deposit the entropy profile
    pub fn overlap(&mut self, table: &RadialDensityTable, rng: &mut EventRng) -> GlauberResult<()> {
        self.record = None;
        self.field = None;

        let [nuc1, nuc2] = &mut self.nuclei;
        nuc1.generate(table, rng)?;
        nuc2.generate(table, rng)?;

        let engine = CollisionEngine::new(self.params.impact_parameter);
        engine.position(nuc1, nuc2);
        let record = engine.collide(nuc1, nuc2)?;

        self.field = Some(deposit(self.params.grid, &self.params.kernel, &record));
        self.record = Some(record);
        Ok(())
    }

    pub fn nuclei(&self) -> &[Nucleus; 2] {
        &self.nuclei
    }

    pub fn record(&self) -> Option<&CollisionRecord> {
        self.record.as_ref()
    }

    pub fn field(&self) -> GlauberResult<&EntropyField> {
        self.field.as_ref().ok_or(GlauberError::MissingField)
    }

    pub fn eccentricity(&self, order: u32) -> GlauberResult<f64> {
        Ok(geometry::eccentricity(self.field()?, order))
    }

    pub fn dump_entropy(&self, path: &std::path::Path) -> GlauberResult<()> {
        let field = self.field()?;
        let record = self.record.as_ref().ok_or(GlauberError::MissingField)?;
        dump::dump_entropy(path, field, record)?;
        debug!("Entropy density table dumped to file: {}", path.display());
        Ok(())
    }

    /// Counts and eccentricities at every configured order
    pub fn summarize(&self, index: u64) -> GlauberResult<EventSummary> {
        let record = self.record.as_ref().ok_or(GlauberError::MissingField)?;
        let eccentricities = self
            .params
            .orders
            .iter()
            .map(|&n| self.eccentricity(n).map(|e| (n, e)))
            .collect::<GlauberResult<Vec<_>>>()?;
        Ok(EventSummary {
            index,
            participants: record.wounded_count(),
            binary_collisions: record.collision_count(),
            eccentricities,
        })
    }
}

/// Run one event, resampling up to `max_retries` times after a no-collision geometry
pub fn run_event<'a>(
    params: &'a Parameters,
    table: &RadialDensityTable,
    rng: &mut EventRng,
    max_retries: u32,
) -> GlauberResult<GlauberEvent<'a>> {
    let mut attempt = 0;
    loop {
        let mut event = GlauberEvent::new(params);
        match event.overlap(table, rng) {
            Ok(()) => return Ok(event),
            Err(GlauberError::NoCollision { .. }) if attempt < max_retries => {
                attempt += 1;
                warn!("No binary collision, resampling (attempt {attempt} of {max_retries})");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Per-event numbers reported to the driver
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub index: u64, // 1-based event number
    pub participants: usize,
    pub binary_collisions: usize,
    pub eccentricities: Vec<(u32, f64)>, // (order, value)
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seed: u64,
    pub events: Vec<EventSummary>,
    pub skipped: usize,
}
