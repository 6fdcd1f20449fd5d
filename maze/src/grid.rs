use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use bevy_math::Vec2;
use tracing::debug;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    collision::{Collider, CollisionSink},
    constants::MAX_ROOMS,
    errors::{ConfigProblem, Defect, MazeResult},
    room::{Neighbors, Room, check_dimension, check_index},
    sides::Side,
};

/// All rooms of a level in row-major order; `rooms[n].room_number() == n`.
#[derive(Resource, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    room_width: f32,
    room_height: f32,
    rooms: Vec<Room>,
}

impl MazeGrid {
    /// Build a sealed `rows x cols` grid. Any invalid input or failed room aborts the whole
    /// build. Zero rows or columns gives an empty grid. More than `MAX_ROOMS` rooms is
    /// rejected before anything is allocated.
    pub fn build(rows: i32, cols: i32, room_width: f32, room_height: f32) -> MazeResult<Self> {
        let row_count = check_index("rows", rows)?;
        let col_count = check_index("cols", cols)?;
        check_dimension("room_width", room_width)?;
        check_dimension("room_height", room_height)?;
        let total = row_count
            .checked_mul(col_count)
            .filter(|total| *total <= MAX_ROOMS)
            .ok_or(ConfigProblem::GridTooLarge { rows, cols })?;

        let mut rooms = Vec::with_capacity(total);
        for row in 0..rows {
            for col in 0..cols {
                let room_number = rooms.len();
                let mut room = Room::new(
                    col as f32 * room_width,
                    row as f32 * room_height,
                    room_width,
                    room_height,
                    room_number,
                    row,
                    col,
                )?;
                room.neighbors = neighbors_of(room_number, row as usize, col as usize, row_count, col_count);
                rooms.push(room);
            }
        }

        debug!("built {}x{} grid of {} rooms", row_count, col_count, rooms.len());

        Ok(Self {
            rows: row_count,
            cols: col_count,
            room_width,
            room_height,
            rooms,
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn room_size(&self) -> Vec2 {
        Vec2::new(self.room_width, self.room_height)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }

    pub fn room(&self, room_number: usize) -> MazeResult<&Room> {
        let room_count = self.rooms.len();
        self.rooms
            .get(room_number)
            .ok_or_else(|| Defect::NoSuchRoom { room_number, room_count }.into())
    }

    pub fn room_mut(&mut self, room_number: usize) -> MazeResult<&mut Room> {
        let room_count = self.rooms.len();
        self.rooms
            .get_mut(room_number)
            .ok_or_else(|| Defect::NoSuchRoom { room_number, room_count }.into())
    }

    #[must_use]
    pub fn room_at_cell(&self, row: usize, col: usize) -> Option<&Room> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.rooms.get(row * self.cols + col)
    }

    // Room whose rectangle contains the point; shared edges belong to the right/lower room.
    #[must_use]
    pub fn room_at(&self, point: Vec2) -> Option<&Room> {
        // NaN would otherwise saturate to cell 0
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        if self.room_width <= 0.0 || self.room_height <= 0.0 {
            return None;
        }
        let col = (point.x / self.room_width).floor() as usize;
        let row = (point.y / self.room_height).floor() as usize;
        self.room_at_cell(row, col)
    }

    /// Room number across `side`, or `None` at the boundary. A link to a room outside the
    /// grid (e.g. from a hand-edited dump) is a defect.
    pub fn neighbor(&self, room_number: usize, side: Side) -> MazeResult<Option<usize>> {
        self.room(room_number)?
            .neighbors()
            .across(side)
            .map(|next| self.room(next).map(Room::room_number))
            .transpose()
    }

    /// Knock down one wall of one room. The facing wall of the neighbor is left alone.
    pub fn remove_side(&mut self, room_number: usize, side: Side) -> MazeResult<()> {
        self.room_mut(room_number)?.remove_side(side);
        Ok(())
    }

    /// Open a passage between two adjacent rooms by removing both facing walls.
    pub fn carve_between(&mut self, a: usize, b: usize) -> MazeResult<()> {
        let side = self.side_towards(a, b)?;
        self.remove_side(a, side)?;
        self.remove_side(b, side.opposite())
    }

    /// Side of `a` that faces `b`.
    pub fn side_towards(&self, a: usize, b: usize) -> MazeResult<Side> {
        let room = self.room(a)?;
        self.room(b)?;
        Side::ALL
            .into_iter()
            .find(|side| room.neighbors().across(*side) == Some(b))
            .ok_or_else(|| Defect::NotAdjacent { a, b }.into())
    }

    /// Whether something can walk from `room_number` through `side` into the next room.
    pub fn is_passage_open(&self, room_number: usize, side: Side) -> MazeResult<bool> {
        let room = self.room(room_number)?;
        let Some(neighbor) = room.neighbors().across(side) else {
            return Ok(false);
        };
        Ok(!room.has_side(side) && !self.room(neighbor)?.has_side(side.opposite()))
    }

    /// Neighbors reachable through an open passage, in Top, Right, Bottom, Left order.
    pub fn open_neighbors(&self, room_number: usize) -> MazeResult<Vec<usize>> {
        let room = self.room(room_number)?;
        let mut open = Vec::new();
        for side in Side::ALL {
            if self.is_passage_open(room_number, side)? {
                if let Some(neighbor) = room.neighbors().across(side) {
                    open.push(neighbor);
                }
            }
        }
        Ok(open)
    }

    /// Check that every room can be reached from room 0 through open passages.
    #[must_use]
    pub fn all_rooms_reachable(&self) -> bool {
        if self.rooms.is_empty() {
            return true;
        }

        let mut visited = vec![false; self.rooms.len()];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);
        let mut reached = 1;

        while let Some(current) = queue.pop_front() {
            let Ok(open) = self.open_neighbors(current) else {
                return false;
            };
            for next in open {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        reached == self.rooms.len()
    }

    /// Straight, unobstructed view between two rooms in the same row or column: every
    /// passage between them must be open. Rooms never see past the grid boundary.
    pub fn line_of_sight(&self, from: usize, to: usize) -> MazeResult<bool> {
        let start = self.room(from)?;
        let end = self.room(to)?;

        if from == to {
            return Ok(true);
        }
        let side = if start.row() == end.row() {
            if start.col() < end.col() { Side::Right } else { Side::Left }
        } else if start.col() == end.col() {
            if start.row() < end.row() { Side::Bottom } else { Side::Top }
        } else {
            return Ok(false);
        };

        let mut current = from;
        while current != to {
            if !self.is_passage_open(current, side)? {
                return Ok(false);
            }
            match self.neighbor(current, side)? {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Run a probe against every room. Returns how many rooms reported a hit.
    pub fn collide<C, S>(&mut self, probe: &C, sink: &mut S) -> usize
    where
        C: Collider + ?Sized,
        S: CollisionSink + ?Sized,
    {
        self.rooms
            .iter_mut()
            .map(|room| room.is_colliding_with(probe, sink))
            .filter(|hit| *hit)
            .count()
    }

    pub fn reset_colors(&mut self) {
        for room in &mut self.rooms {
            room.reset_colors();
        }
    }

    // Number of open passages; a perfect maze has exactly len() - 1.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        (0..self.rooms.len())
            .map(|n| {
                [Side::Right, Side::Bottom]
                    .into_iter()
                    .filter(|side| self.is_passage_open(n, *side).unwrap_or(false))
                    .count()
            })
            .sum()
    }
}

fn neighbors_of(room_number: usize, row: usize, col: usize, rows: usize, cols: usize) -> Neighbors {
    Neighbors {
        above: (row > 0).then(|| room_number - cols),
        below: (row + 1 < rows).then(|| room_number + cols),
        left: (col > 0).then(|| room_number - 1),
        right: (col + 1 < cols).then(|| room_number + 1),
    }
}
