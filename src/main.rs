use orbsim::{record_step, ChallengeProgress, Engine, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    steps: u64,

    /// Wall-clock seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Write the final state as a snapshot YAML to this path
    #[arg(long)]
    save: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let mut engine = Engine::new();
    engine.start();

    let mut progress = ChallengeProgress::default();
    for _ in 0..args.steps {
        let out = engine.tick(
            &scenario.system,
            &scenario.camera,
            &scenario.parameters,
            args.dt,
        );
        for ev in &out.events {
            log::info!("event: {:?}", ev);
        }
        progress = record_step(progress, &out.events, args.dt * scenario.parameters.time_scale);
        scenario.system = out.system;
        scenario.camera = out.camera;
    }

    println!(
        "t = {:.3}, bodies = {}, impacts = {}, absorptions = {}, origin offset = {:.3}",
        scenario.system.t,
        scenario.system.bodies.len(),
        progress.impacts,
        progress.absorptions,
        scenario.system.origin_offset.norm(),
    );

    if let Some(path) = args.save {
        let snapshot = scenario.to_config();
        serde_yaml::to_writer(File::create(&path)?, &snapshot)?;
        log::info!("snapshot written to {}", path.display());
    }

    Ok(())
}
