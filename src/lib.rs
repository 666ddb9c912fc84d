pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Nucleon, TransversePoint, NVec2, NVec3};
pub use simulation::error::{GlauberError, GlauberResult};
pub use simulation::random::{EventRng, SeedSource};
pub use simulation::density::{WoodsSaxon, RadialTable, RadialDensityTable};
pub use simulation::nucleus::Nucleus;
pub use simulation::engine::{CollisionEngine, CollisionRecord};
pub use simulation::field::{GridSpec, DepositionKernel, EntropyField, deposit};
pub use simulation::geometry::{centroid, eccentricity};
pub use simulation::params::{Parameters, nucleon_radius_from_cross_section};
pub use simulation::scenario::{Scenario, GlauberEvent, EventSummary, RunSummary, run_event};

pub use configuration::config::{CollisionConfig, GridConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_collision, bench_deposition};
