use mcglauber::{ScenarioConfig, Scenario};
use mcglauber::{bench_collision, bench_deposition};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Event-by-event Monte Carlo Glauber generator")]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, long, default_value = "pb_pb_b6.yaml")]
    file_name: String,

    /// Override the number of events
    #[arg(long)]
    events: Option<u64>,

    /// Override the run seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the output directory
    #[arg(long)]
    output_dir: Option<String>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_collision()?;
        bench_deposition()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(events) = args.events {
        scenario_cfg.run.events = events;
    }
    if let Some(seed) = args.seed {
        scenario_cfg.run.seed = Some(seed);
    }
    if let Some(dir) = args.output_dir {
        scenario_cfg.run.output_dir = dir;
    }

    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let summary = scenario.run()?;

    for event in &summary.events {
        let eccs: Vec<String> = event.eccentricities.iter().map(|(n, e)| format!("e{n}={e:.6}")).collect();
        info!(
            "event {}: N_part = {}, N_coll = {}, {}",
            event.index, event.participants, event.binary_collisions, eccs.join(", ")
        );
    }

    Ok(())
}
