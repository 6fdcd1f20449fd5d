use bevy_math::{Rect, Vec2};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{constants::WALL_COLLISION_THICKNESS, sides::Side};

/// Corners of an axis-aligned rectangle, y pointing down.
///
/// ```text
/// A ---- B
/// |      |
/// D ---- C
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct RectDetails {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub d: Vec2,
}

impl RectDetails {
    // Inputs are validated by the caller; width and height are expected to be >= 0.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            a: Vec2::new(x, y),
            b: Vec2::new(x + width, y),
            c: Vec2::new(x + width, y + height),
            d: Vec2::new(x, y + height),
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.b.x - self.a.x
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.d.y - self.a.y
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.a + self.c) / 2.0
    }

    /// The whole rectangle, A to C.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.a, self.c)
    }

    /// Endpoints of the line drawn for a side.
    #[must_use]
    pub const fn edge(&self, side: Side) -> (Vec2, Vec2) {
        match side {
            Side::Top => (self.a, self.b),
            Side::Right => (self.b, self.c),
            Side::Bottom => (self.d, self.c),
            Side::Left => (self.a, self.d),
        }
    }

    /// Collision strip for a side: starts at the edge origin, runs the edge length and is
    /// one unit thick, growing right (vertical edges) or down (horizontal edges).
    #[must_use]
    pub fn edge_bounds(&self, side: Side) -> Rect {
        let (origin, end) = self.edge(side);
        let length = origin.distance(end);
        let size = match side {
            Side::Top | Side::Bottom => Vec2::new(length, WALL_COLLISION_THICKNESS),
            Side::Right | Side::Left => Vec2::new(WALL_COLLISION_THICKNESS, length),
        };
        Rect::from_corners(origin, origin + size)
    }
}
