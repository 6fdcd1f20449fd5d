use anyhow::{Context, Result, bail};
use bevy_math::Vec2;
use clap::Parser;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

use carver::{ascii::render_ascii, config::init_tracing, svg::SvgCanvas};
use maze::{Bounds, DrawToggles, LevelConfig, WallCollision, generate_level};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Maze carver", long_about = None)]
struct Args {
    /// Level file (JSON) to start from; flags below override its fields
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Number of room rows
    #[arg(long)]
    rows: Option<i32>,

    /// Number of room columns
    #[arg(long)]
    cols: Option<i32>,

    /// Room width in world units
    #[arg(long)]
    room_width: Option<f32>,

    /// Room height in world units
    #[arg(long)]
    room_height: Option<f32>,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Chance (0..=1) of opening an extra wall in each dead end
    #[arg(long)]
    braid: Option<f64>,

    /// Rectangle probe "x,y,w,h" to test against the carved walls
    #[arg(long, value_parser = parse_probe)]
    probe: Vec<Bounds>,

    /// Write the maze as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Also draw every room's outer square in the SVG
    #[arg(long, default_value_t = false)]
    square_bounds: bool,

    /// Print the grid as JSON instead of ASCII
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn level_config(&self) -> Result<LevelConfig> {
        let mut config = match &self.level {
            Some(path) => {
                let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
                LevelConfig::from_json_str(&text).with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => LevelConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(width) = self.room_width {
            config.room_width = width;
        }
        if let Some(height) = self.room_height {
            config.room_height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(braid) = self.braid {
            config.braid = braid;
        }
        Ok(config)
    }
}

fn parse_probe(arg: &str) -> Result<Bounds, String> {
    let values = arg
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [x, y, w, h] => Ok(Bounds::rect(*x, *y, *w, *h)),
        _ => Err(format!("expected x,y,w,h but got {} values", values.len())),
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.level_config()?;
    let mut grid = generate_level(&config).context("Failed to generate level")?;
    info!(
        "carved {}x{} maze, {} passages, seed {:?}",
        grid.rows(),
        grid.cols(),
        grid.passage_count(),
        config.seed
    );
    if !grid.all_rooms_reachable() {
        bail!("carved maze is not connected");
    }

    for probe in &args.probe {
        let mut hits: Vec<WallCollision> = Vec::new();
        let rooms_hit = grid.collide(probe, &mut hits);
        if rooms_hit == 0 {
            info!(?probe, "probe is clear");
        }
        for hit in &hits {
            warn!(room = %hit.room_id, side = ?hit.side, "probe hits wall");
        }
    }

    if let Some(path) = &args.svg {
        let toggles = DrawToggles {
            square_bounds: args.square_bounds,
            ..DrawToggles::default()
        };
        let size = Vec2::new(grid.cols() as f32, grid.rows() as f32) * grid.room_size();
        let mut canvas = SvgCanvas::new(size);
        grid.draw(&mut canvas, &toggles);
        fs::write(path, canvas.finish()).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid).context("Failed to serialize grid")?);
    } else {
        print!("{}", render_ascii(&grid));
    }

    Ok(())
}
