use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    config::{LevelConfig, check_ratio},
    errors::MazeResult,
    grid::MazeGrid,
    sides::Side,
};

/// Carve a perfect maze (one path between any two rooms) with a randomized depth-first
/// walk. Expects a sealed grid; walls already removed are kept.
pub fn carve_maze<R: Rng>(grid: &mut MazeGrid, rng: &mut R) -> MazeResult<()> {
    if grid.is_empty() {
        return Ok(());
    }

    let mut visited = vec![false; grid.len()];
    let start = rng.random_range(0..grid.len());
    let mut stack = vec![start];
    visited[start] = true;
    let mut carved = 0;

    while let Some(&current) = stack.last() {
        let mut candidates = Vec::with_capacity(4);
        for side in Side::ALL {
            if let Some(next) = grid.neighbor(current, side)? {
                if !visited[next] {
                    candidates.push(next);
                }
            }
        }

        let Some(&next) = candidates.choose(rng) else {
            stack.pop();
            continue;
        };
        grid.carve_between(current, next)?;
        visited[next] = true;
        stack.push(next);
        carved += 1;
    }

    debug!("carved {} passages through {} rooms", carved, grid.len());
    Ok(())
}

/// Rooms with exactly one open passage.
pub fn dead_ends(grid: &MazeGrid) -> MazeResult<Vec<usize>> {
    let mut ends = Vec::new();
    for room_number in 0..grid.len() {
        if grid.open_neighbors(room_number)?.len() == 1 {
            ends.push(room_number);
        }
    }
    Ok(ends)
}

/// Give each dead end, with probability `ratio`, one extra passage to a neighbor it is
/// not yet connected to. Returns how many walls were opened. A `ratio` outside 0..=1
/// (NaN included) is rejected before anything is carved.
pub fn braid<R: Rng>(grid: &mut MazeGrid, ratio: f64, rng: &mut R) -> MazeResult<usize> {
    let ratio = check_ratio("braid", ratio)?;
    let mut opened = 0;

    for room_number in dead_ends(grid)? {
        // An earlier opening may already have fixed this one
        if grid.open_neighbors(room_number)?.len() != 1 || !rng.random_bool(ratio) {
            continue;
        }

        let mut closed = Vec::with_capacity(3);
        for side in Side::ALL {
            if let Some(next) = grid.neighbor(room_number, side)? {
                if !grid.is_passage_open(room_number, side)? {
                    closed.push(next);
                }
            }
        }
        if let Some(&next) = closed.choose(rng) {
            grid.carve_between(room_number, next)?;
            opened += 1;
        }
    }

    debug!("braided {} dead ends", opened);
    Ok(opened)
}

/// Validate the configuration, build a sealed grid and carve it into a connected maze.
pub fn generate_level(config: &LevelConfig) -> MazeResult<MazeGrid> {
    config.validate()?;

    let mut rng = config.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut grid = MazeGrid::build(config.rows, config.cols, config.room_width, config.room_height)?;
    carve_maze(&mut grid, &mut rng)?;
    if config.braid > 0.0 {
        braid(&mut grid, config.braid, &mut rng)?;
    }
    Ok(grid)
}
