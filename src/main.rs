use stardrift::{bench_gravity, bench_particles, run_game};
use stardrift::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML in the scenarios/ directory; built-in scene if omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Run the micro benchmarks instead of the game
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing {file_name}"))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_particles();
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => ScenarioConfig::default(),
    };

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    run_game(scenario);

    Ok(())
}
