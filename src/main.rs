//! Spinward - Entry Point
//!
//! Generates one subsector (grid -> worlds -> trade lanes) and prints it
//! as a plain-text listing or as JSON.

use std::path::PathBuf;

use clap::Parser;

use spinward::core::config::GenerationConfig;
use spinward::core::error::Result;
use spinward::core::types::CellId;
use spinward::dice::SeededDice;
use spinward::sector::Subsector;
use spinward::worldgen::SubsectorGenerator;

/// Generate a Classic Traveller subsector
#[derive(Parser, Debug)]
#[command(name = "spinward")]
#[command(about = "Generate a Classic Traveller subsector with worlds and trade lanes")]
struct Args {
    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Subsector name
    #[arg(long)]
    name: Option<String>,

    /// TOML config file (name, seed, per-hex bias)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the full subsector as JSON instead of a text listing
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("spinward=info")
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };

    // CLI flags override the config file
    let name = args.name.unwrap_or(config.name);
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    tracing::info!("Generating subsector '{}' with seed {}", name, seed);

    let mut generator = SubsectorGenerator::new(SeededDice::new(seed));
    generator.initialize(name);
    for bias in &config.bias {
        generator.adjust_world_chance(&[CellId(bias.cell)], bias.modifier)?;
    }
    generator.generate_worlds()?;
    generator.build_space_lanes()?;
    let subsector = generator.into_subsector()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&subsector)?);
    } else {
        print_listing(&subsector);
    }

    Ok(())
}

/// Plain-text subsector listing, one world per line
fn print_listing(subsector: &Subsector) {
    println!("=== {} ===", subsector.name);
    println!("{} worlds in 80 hexes\n", subsector.world_count());
    println!("{:<5} {:<10} {:<5} {:<18} Lanes", "Hex", "UWP", "Base", "Trade");

    for (id, world) in subsector.worlds() {
        let mut bases = String::new();
        if world.has_naval_base {
            bases.push('N');
        }
        if world.has_scout_base {
            bases.push('S');
        }

        let lanes = world
            .lanes
            .iter()
            .map(|target| target.hex_label())
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{:<5} {:<10} {:<5} {:<18} {}",
            id.hex_label(),
            world.uwp_code(),
            bases,
            world.trade_codes().join(" "),
            lanes
        );
    }
}
