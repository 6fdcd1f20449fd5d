use bevy_math::{Rect, Vec2};
use tracing::trace;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    collision::{Collider, CollisionSink, WallCollision},
    errors::{ConfigProblem, MazeResult},
    rect::RectDetails,
    sides::{HIT_COLOR, Side, SideCharacteristic, SideRegistry},
};

// ============================================================================
// Game Object
// ============================================================================

// Identity shared by everything that lives in a level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct GameObject {
    pub id: String,
    pub active: bool,
}

impl GameObject {
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self { id, active: true }
    }
}

// ============================================================================
// Neighbors
// ============================================================================

/// Room numbers of the adjacent rooms; `None` at the grid boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Neighbors {
    pub above: Option<usize>,
    pub below: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Neighbors {
    #[must_use]
    pub const fn across(&self, side: Side) -> Option<usize> {
        match side {
            Side::Top => self.above,
            Side::Right => self.right,
            Side::Bottom => self.below,
            Side::Left => self.left,
        }
    }
}

// ============================================================================
// Room
// ============================================================================

/// One cell of the maze: a fixed rectangle with four removable walls.
///
/// Collision only looks at walls that are still standing, never at the room's outer
/// rectangle, so carving a wall lets things walk through while the room itself keeps its
/// shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Room {
    object: GameObject,
    row: usize,
    col: usize,
    room_number: usize,
    geometry: RectDetails,
    present: [bool; 4],
    sides: SideRegistry,
    pub(crate) neighbors: Neighbors,
}

impl Room {
    /// Validate, allocate, then register all four sides. Nothing is returned unless every
    /// step succeeded.
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        room_number: usize,
        row: i32,
        col: i32,
    ) -> MazeResult<Self> {
        check_dimension("x", x)?;
        check_dimension("y", y)?;
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        let row = check_index("row", row)?;
        let col = check_index("col", col)?;

        let geometry = RectDetails::new(x, y, width, height);
        let sides = SideRegistry::initialize(&geometry)?;

        Ok(Self {
            object: GameObject::new(format!("{row}x{col}")),
            row,
            col,
            room_number,
            geometry,
            present: [true; 4],
            sides,
            neighbors: Neighbors::default(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.object.id
    }

    #[must_use]
    pub const fn object(&self) -> &GameObject {
        &self.object
    }

    pub const fn set_active(&mut self, active: bool) {
        self.object.active = active;
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub const fn room_number(&self) -> usize {
        self.room_number
    }

    #[must_use]
    pub const fn geometry(&self) -> &RectDetails {
        &self.geometry
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.geometry.center()
    }

    #[must_use]
    pub const fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    #[must_use]
    pub const fn sides(&self) -> &SideRegistry {
        &self.sides
    }

    #[must_use]
    pub const fn side(&self, side: Side) -> &SideCharacteristic {
        self.sides.get(side)
    }

    #[must_use]
    pub const fn has_side(&self, side: Side) -> bool {
        self.present[side.index()]
    }

    // Presence flags in Top, Right, Bottom, Left order
    #[must_use]
    pub const fn present_sides(&self) -> [bool; 4] {
        self.present
    }

    // Bit i set when the side with index i is standing
    #[must_use]
    pub fn wall_mask(&self) -> u8 {
        Side::ALL
            .into_iter()
            .filter(|side| self.has_side(*side))
            .fold(0, |mask, side| mask | (1 << side.index()))
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.present.iter().all(|present| *present)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.present.iter().all(|present| !present)
    }

    /// Knock down one wall. Removing a wall that is already gone does nothing. The side's
    /// bounds and color stay in the registry.
    pub const fn remove_side(&mut self, side: Side) {
        self.present[side.index()] = false;
    }

    /// Test the probe against every standing wall, Top, Right, Bottom, Left.
    ///
    /// Each wall that is hit turns white and produces one notification in `sink`. All four
    /// walls are checked even after a hit, so a probe on a corner reports both walls.
    pub fn is_colliding_with<C, S>(&mut self, probe: &C, sink: &mut S) -> bool
    where
        C: Collider + ?Sized,
        S: CollisionSink + ?Sized,
    {
        let bounds = probe.bounds();
        let mut collided = false;

        for side in Side::ALL {
            if !self.has_side(side) || !bounds.intersects(&self.sides.get(side).bounds) {
                continue;
            }

            let characteristic = self.sides.get_mut(side);
            characteristic.color = HIT_COLOR;
            let characteristic = *characteristic;
            collided = true;

            trace!(room = %self.object.id, ?side, "wall hit");
            sink.on_collision(WallCollision {
                room_id: self.object.id.clone(),
                room_number: self.room_number,
                probe: bounds,
                side,
                characteristic,
            });
        }

        collided
    }

    // Back to neutral colors, e.g. at the start of a frame.
    pub fn reset_colors(&mut self) {
        self.sides.reset_colors();
    }
}

pub(crate) fn check_dimension(field: &'static str, value: f32) -> MazeResult<f32> {
    if !value.is_finite() {
        return Err(ConfigProblem::NotFinite { field, value }.into());
    }
    if value < 0.0 {
        return Err(ConfigProblem::NegativeDimension { field, value }.into());
    }
    Ok(value)
}

pub(crate) fn check_index(field: &'static str, value: i32) -> MazeResult<usize> {
    usize::try_from(value).map_err(|_| ConfigProblem::NegativeIndex { field, value }.into())
}
