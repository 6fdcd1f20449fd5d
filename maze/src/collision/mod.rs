pub mod helpers;

use bevy_ecs::message::{Message, Messages};
use bevy_math::{Rect, Vec2};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::sides::{Side, SideCharacteristic};
pub use helpers::{overlap_circle_vs_rect, overlap_rect_vs_rect, ranges_overlap_1d};

// ============================================================================
// Probes
// ============================================================================

/// Bounding volume of something that can run into a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Bounds {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl Bounds {
    #[must_use]
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Rect(Rect::new(x, y, x + width, y + height))
    }

    #[must_use]
    pub const fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    #[must_use]
    pub fn intersects(&self, rect: &Rect) -> bool {
        match self {
            Self::Rect(bounds) => overlap_rect_vs_rect(bounds, rect),
            Self::Circle { center, radius } => overlap_circle_vs_rect(*center, *radius, rect),
        }
    }
}

/// Anything with a bounding volume can be tested against room walls.
pub trait Collider {
    fn bounds(&self) -> Bounds;
}

impl Collider for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

impl Collider for Rect {
    fn bounds(&self) -> Bounds {
        Bounds::Rect(*self)
    }
}

// ============================================================================
// Collision Notifications
// ============================================================================

/// A probe hit a wall that is still standing.
#[derive(Message, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct WallCollision {
    pub room_id: String,
    pub room_number: usize,
    pub probe: Bounds,
    pub side: Side,
    pub characteristic: SideCharacteristic,
}

/// Receiver for wall hits. The collision-response code decides what a hit means.
pub trait CollisionSink {
    fn on_collision(&mut self, collision: WallCollision);
}

impl CollisionSink for Vec<WallCollision> {
    fn on_collision(&mut self, collision: WallCollision) {
        self.push(collision);
    }
}

// Lets an ECS world queue hits for its systems to read on the next update.
impl CollisionSink for Messages<WallCollision> {
    fn on_collision(&mut self, collision: WallCollision) {
        self.write(collision);
    }
}

/// Sink for callers that only care about the boolean result.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreCollisions;

impl CollisionSink for IgnoreCollisions {
    fn on_collision(&mut self, _collision: WallCollision) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_rect_from_origin_and_size() {
        let bounds = Bounds::rect(20.0, 10.0, 1.0, 10.0);
        assert_eq!(bounds, Bounds::Rect(Rect::new(20.0, 10.0, 21.0, 20.0)));
        assert_eq!(Rect::new(0.0, 0.0, 1.0, 1.0).bounds(), Bounds::rect(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn bounds_dispatch_to_shape_tests() {
        let wall = Rect::new(0.0, 0.0, 10.0, 1.0);
        assert!(Bounds::rect(2.0, -1.0, 1.0, 1.5).intersects(&wall));
        assert!(!Bounds::rect(2.0, -1.0, 1.0, 1.0).intersects(&wall));
        assert!(Bounds::circle(Vec2::new(5.0, -0.5), 1.0).intersects(&wall));
        assert!(!Bounds::circle(Vec2::new(5.0, -2.0), 1.0).intersects(&wall));
    }

    #[test]
    fn ecs_message_queue_receives_hits() {
        let mut messages = Messages::<WallCollision>::default();
        let hit = WallCollision {
            room_id: "0x0".to_string(),
            room_number: 0,
            probe: Bounds::rect(0.0, 0.0, 1.0, 1.0),
            side: Side::Top,
            characteristic: SideCharacteristic::new(Rect::new(0.0, 0.0, 10.0, 1.0)),
        };

        messages.on_collision(hit.clone());
        let drained: Vec<WallCollision> = messages.drain().collect();
        assert_eq!(drained, vec![hit]);
    }
}
