//! marga-nav CLI: load a map description and run the search engines.
//!
//! ```text
//! marga-nav maps/board.txt --engine both
//! marga-nav maps/board.txt --engine weighted --epsilon 1.5
//! RUST_LOG=debug marga-nav maps/board.txt
//! ```

use clap::Parser;
use marga_nav::config::{Engine, MargaConfig};
use marga_nav::core::{Cell, Grid};
use marga_nav::io::MapDescription;
use marga_nav::{beam, DynamicWeightingConfig, DynamicWeightingPlanner, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Grid path search with beam and dynamic weighting engines.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map description file (size/agent/obstacles/target entities)
    map: PathBuf,

    /// Engine to run (overrides the config file)
    #[arg(long, value_enum)]
    engine: Option<Engine>,

    /// Starting heuristic weight for the dynamic weighting engine
    #[arg(long)]
    epsilon: Option<f64>,

    /// TOML configuration file (default: marga.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print an ASCII rendering of the board with the path overlaid
    #[arg(long)]
    show_grid: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MargaConfig::load(path)?
        }
        None if Path::new("marga.toml").exists() => {
            info!("Loading configuration from marga.toml");
            MargaConfig::load(Path::new("marga.toml"))?
        }
        None => MargaConfig::default(),
    };

    if let Some(engine) = args.engine {
        config.search.engine = engine;
    }
    if let Some(epsilon) = args.epsilon {
        config.search.epsilon = epsilon;
    }
    if args.show_grid {
        config.output.show_grid = true;
    }

    info!("marga-nav v{}", env!("CARGO_PKG_VERSION"));

    let map = MapDescription::load(&args.map)?;
    info!(
        "Loaded {}x{} board, start {}, target {}, {} obstacles",
        map.size,
        map.size,
        map.start,
        map.goal,
        map.obstacles.len()
    );
    let grid = map.grid();

    if matches!(config.search.engine, Engine::Beam | Engine::Both) {
        let path = beam::find_path(&grid, map.start, map.goal)?;
        report("beam search", &grid, &map, path.as_deref(), config.output.show_grid);
    }

    if matches!(config.search.engine, Engine::Weighted | Engine::Both) {
        let planner = DynamicWeightingPlanner::new(
            &grid,
            DynamicWeightingConfig::with_epsilon(config.search.epsilon),
        );
        let path = planner.find_path(map.start, map.goal)?;
        report(
            "dynamic weighting search",
            &grid,
            &map,
            path.as_deref(),
            config.output.show_grid,
        );
    }

    Ok(())
}

/// Print one engine's result.
fn report(name: &str, grid: &Grid, map: &MapDescription, path: Option<&[Cell]>, show_grid: bool) {
    match path {
        Some(path) => {
            println!("{name}: path found, {} cells", path.len());
            for (step, cell) in path.iter().enumerate() {
                println!("  step {step}: {cell}");
            }
            if show_grid {
                print!("{}", render(grid, map, path));
            }
        }
        None => println!("{name}: no path to target"),
    }
}

/// ASCII rendering of the board: '.' free, '#' obstacle, 'A' agent,
/// 'T' target, '*' path.
fn render(grid: &Grid, map: &MapDescription, path: &[Cell]) -> String {
    let on_path: std::collections::HashSet<&Cell> = path.iter().collect();
    let mut out = String::new();

    for row in 0..grid.side() {
        for col in 0..grid.side() {
            let cell = Cell::new(row, col);
            let glyph = if cell == map.start {
                'A'
            } else if cell == map.goal {
                'T'
            } else if on_path.contains(&cell) {
                '*'
            } else if grid.is_obstacle(cell) {
                '#'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}
