//! Conduct Simulator
//!
//! Replays a scripted scenario of player actions against a god and prints
//! what the god said and how the player's standing changed.

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use conduct_core::components::AttackConductTracker;
use conduct_core::config::{default_config_toml, ConductConfig, DEFAULT_CONFIG_PATH};
use conduct_core::engine::GodConduct;
use conduct_core::scenario::{run_scenario, Scenario, ScenarioReport};
use conduct_core::systems::turn_schedule;
use conduct_types::DeityId;

/// Command line arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "conduct_sim")]
#[command(about = "Replays player conduct against the gods")]
struct Args {
    /// Configuration file; conduct.toml is used when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario file to replay
    #[arg(long, default_value = "scenarios/beam_bounce.toml")]
    scenario: PathBuf,

    /// Random seed, overriding the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// God to worship, overriding the configuration (e.g. "shining_one")
    #[arg(long)]
    god: Option<String>,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.print_default_config {
        print!("{}", default_config_toml());
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.engine.seed = seed;
    }
    if let Some(god) = &args.god {
        config.player.religion = parse_god(god)?;
    }

    let scenario = Scenario::from_file(&args.scenario)?;
    tracing::info!(
        scenario = %args.scenario.display(),
        god = config.player.religion.name(),
        seed = config.engine.seed,
        "replaying scenario"
    );

    let mut world = World::new();
    world.insert_resource(GodConduct::from_config(&config)?);
    world.insert_resource(AttackConductTracker::new(config.engine.max_monsters));
    let mut schedule = turn_schedule();

    let report = run_scenario(&mut world, &mut schedule, &scenario)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&config, &report);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ConductConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ConductConfig::from_file(path)?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(ConductConfig::from_file(Path::new(DEFAULT_CONFIG_PATH))?)
        }
        None => Ok(ConductConfig::default()),
    }
}

fn parse_god(name: &str) -> Result<DeityId, serde_json::Error> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
}

fn print_report(config: &ConductConfig, report: &ScenarioReport) {
    println!("Conduct Simulator");
    println!("=================");
    println!("God: {}", config.player.religion.name());
    println!("Seed: {}", config.engine.seed);
    println!("Starting piety: {}", config.player.piety);
    println!();

    for turn in &report.turns {
        println!(
            "[Turn {:>3}] piety: {:>3}  penance: {:>3}",
            turn.turn, turn.piety, turn.penance
        );
        for message in &turn.messages {
            println!("    {}", message.text);
        }
        for effect in &turn.effects {
            println!("    effect: {:?}", effect);
        }
    }

    println!();
    println!(
        "Replay complete. Ran {} turns, {} god messages (piety {}, penance {}).",
        report.turns.len(),
        report.messages().count(),
        report.final_piety().unwrap_or(config.player.piety),
        report.final_penance().unwrap_or(0)
    );
}
