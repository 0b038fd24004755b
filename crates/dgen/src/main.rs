//! dgen: dungeon layout generator
//!
//! Places rooms, joins them along a minimum spanning tree and prints the
//! result as text or JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Env;
use log::info;
use serde::Serialize;

use dgen_core::{
    Dungeon, DungeonConfig, DungeonGenerator, RecordedStream, RecordingSource, SeededSource,
    UnitSource,
};

mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// ASCII map and summary
    Text,
    /// Full layout for a renderer
    Json,
}

/// Generate a dungeon of rooms joined by tunnels
#[derive(Parser, Debug)]
#[command(name = "dgen")]
#[command(author, version, about = "Generate a dungeon of rooms joined by tunnels", long_about = None)]
struct Args {
    /// Number of rooms
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Placement radius and grid size (default: rooms, at least 20)
    #[arg(short = 'r', long = "radius", allow_negative_numbers = true)]
    radius: Option<i32>,

    /// Seed for the random source
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Placement candidates per room before giving up
    #[arg(long = "max-attempts")]
    max_attempts: Option<u32>,

    /// Config file with OPTIONS= lines
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the consumed random draws to this file as a JSON array
    #[arg(long = "record")]
    record: Option<PathBuf>,

    /// Take random draws from a file written by --record
    #[arg(long = "replay", conflicts_with = "seed")]
    replay: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// JSON output: the dungeon, plus the seed that reproduces it when there is one
#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<&'a SeededSource>,
    #[serde(flatten)]
    dungeon: &'a Dungeon,
}

fn to_json(dungeon: &Dungeon, seed: Option<&SeededSource>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { seed, dungeon })
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default)).try_init();
}

/// Config file first, then command-line overrides
fn resolve_config(args: &Args) -> Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => DungeonConfig::load_from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DungeonConfig::default(),
    };

    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
        if args.config.is_none() {
            config.radius = DungeonConfig::for_room_count(rooms).radius;
        }
    }
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(attempts) = args.max_attempts {
        config.max_placement_attempts = attempts;
    }
    Ok(config)
}

fn load_stream(path: &Path) -> Result<RecordedStream> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading draws {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing draws {}", path.display()))
}

/// Generate from `source`, handing the source back afterwards
fn run<S: UnitSource>(
    generator: &DungeonGenerator,
    source: S,
    record: Option<&Path>,
) -> Result<(Dungeon, S)> {
    let mut recorder = RecordingSource::new(source);

    let started = Instant::now();
    let dungeon = generator.generate(&mut recorder)?;
    info!(
        "generated {} rooms in {} ms using {} draws",
        dungeon.rooms.len(),
        started.elapsed().as_millis(),
        recorder.call_count()
    );

    let (source, stream) = recorder.finish();
    if let Some(path) = record {
        let json = serde_json::to_string(&stream)?;
        fs::write(path, json).with_context(|| format!("writing draws {}", path.display()))?;
        info!("recorded draws to {}", path.display());
    }
    Ok((dungeon, source))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args)?;
    let generator = DungeonGenerator::new(config)?;
    info!(
        "{} rooms, radius {}, at most {} attempts per room",
        config.room_count, config.radius, config.max_placement_attempts
    );

    let record = args.record.as_deref();
    let (dungeon, seed) = match &args.replay {
        Some(path) => {
            let stream = load_stream(path)?;
            info!("replaying {} draws from {}", stream.len(), path.display());
            let (dungeon, _) = run(&generator, stream.replay(), record)?;
            (dungeon, None)
        }
        None => {
            let rng = args.seed.map_or_else(SeededSource::from_entropy, SeededSource::new);
            info!("seed {}", rng.seed());
            let (dungeon, rng) = run(&generator, rng, record)?;
            (dungeon, Some(rng))
        }
    };

    match args.format {
        OutputFormat::Text => print!("{}", render::render(&dungeon)),
        OutputFormat::Json => println!("{}", to_json(&dungeon, seed.as_ref())?),
    }
    Ok(())
}
