use std::fmt::Write;

use maze::{MazeGrid, Side};

// A shared wall is drawn while either of its two sides still stands.
fn wall_between(grid: &MazeGrid, row: usize, col: usize, side: Side) -> bool {
    let Some(room) = grid.room_at_cell(row, col) else {
        return false;
    };
    if room.has_side(side) {
        return true;
    }
    room.neighbors()
        .across(side)
        .and_then(|n| grid.room(n).ok())
        .is_some_and(|neighbor| neighbor.has_side(side.opposite()))
}

/// Text picture of the grid, one `+--+` cell per room.
#[must_use]
pub fn render_ascii(grid: &MazeGrid) -> String {
    let mut out = String::new();
    if grid.is_empty() {
        return out;
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push('+');
            out.push_str(if wall_between(grid, row, col, Side::Top) { "--" } else { "  " });
        }
        out.push_str("+\n");

        for col in 0..grid.cols() {
            out.push(if wall_between(grid, row, col, Side::Left) { '|' } else { ' ' });
            out.push_str("  ");
        }
        let last = grid.cols() - 1;
        out.push(if wall_between(grid, row, last, Side::Right) { '|' } else { ' ' });
        out.push('\n');
    }

    let last = grid.rows() - 1;
    for col in 0..grid.cols() {
        let _ = write!(out, "+{}", if wall_between(grid, last, col, Side::Bottom) { "--" } else { "  " });
    }
    out.push_str("+\n");
    out
}
