use std::path::PathBuf;

use anyhow::{Context, Result};
use cartograph::mapgen::GeneratedMap;
use cartograph::{Environment, MapGenerator, MapRequest};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::Serialize;

mod render;
mod request_file;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render seeded battle maps", long_about = None)]
struct Args {
    /// Seed string; identical inputs always produce the same map
    #[arg(short, long, default_value = "tavern-encounter-gen-0")]
    seed: String,

    /// Dungeon, Wilderness, Urban or Special
    #[arg(short, long, default_value = "Dungeon")]
    environment: String,

    #[arg(short, long, default_value = "Medium")]
    difficulty: String,

    /// Free text; "N floors" sets the floor count
    #[arg(short, long, default_value = "")]
    grid_size: String,

    /// Render a single floor instead of all of them
    #[arg(short, long)]
    floor: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// TOML file with `[[map]]` tables; overrides the generation flags
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct RenderedRequest<'a> {
    id: &'a str,
    name: &'a str,
    floors: Vec<GeneratedMap>,
}

fn initialize_logging(log_level: &str) -> Result<()> {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .parse_default_env()
        .format_target(false)
        .try_init()
        .context("Failed to initialize logging")
}

fn resolve_environment(name: &str) -> Environment {
    let environment = Environment::from_name(name);
    if !environment.name().eq_ignore_ascii_case(name) {
        warn!("unknown environment {name:?}, using {}", environment.name());
    }
    environment
}

fn floors_for(generator: &MapGenerator, floor: Option<u32>) -> Vec<GeneratedMap> {
    match floor {
        Some(floor_index) => vec![generator.generate(floor_index)],
        None => generator.generate_all_floors(),
    }
}

fn print_ascii(title: &str, floors: &[GeneratedMap]) {
    for map in floors {
        println!(
            "== {title} | {} | floor {}/{} ==",
            map.environment.name(),
            map.floor_index.saturating_add(1),
            map.total_floors
        );
        print!("{}", render::render_ascii(map));
        print!("{}", render::render_rooms(map));
        println!("{}", render::render_legend(map));
        println!();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level)?;

    let requests = match &args.request {
        Some(path) => request_file::load_requests(path)?,
        None => vec![MapRequest {
            id: args.seed.clone(),
            name: args.seed.clone(),
            environment: args.environment.clone(),
            difficulty: args.difficulty.clone(),
            grid_size: args.grid_size.clone(),
        }],
    };
    info!("rendering {} map request(s)", requests.len());

    let mut rendered = Vec::with_capacity(requests.len());
    for request in &requests {
        let generator = MapGenerator::new(
            request.id.as_str(),
            resolve_environment(&request.environment),
            &request.difficulty,
            &request.grid_size,
        );
        info!(
            "{}: {} floor(s), {} rooms per floor",
            request.id,
            generator.total_floors(),
            generator.rooms_per_floor()
        );
        let name = if request.name.is_empty() { &request.id } else { &request.name };
        rendered.push(RenderedRequest {
            id: &request.id,
            name,
            floors: floors_for(&generator, args.floor),
        });
    }

    match args.format {
        OutputFormat::Ascii => {
            for request in &rendered {
                print_ascii(request.name, &request.floors);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rendered)
                .context("Failed to serialize generated maps")?;
            println!("{json}");
        }
    }
    Ok(())
}
