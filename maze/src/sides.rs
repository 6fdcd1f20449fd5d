use bevy_math::Rect;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Defect, MazeError, MazeResult},
    rect::RectDetails,
};

// ============================================================================
// Side
// ============================================================================

/// One of the four walls of a room. The discriminant is the wall's slot in every
/// per-side array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn try_from_index(index: usize) -> MazeResult<Self> {
        match index {
            0 => Ok(Self::Top),
            1 => Ok(Self::Right),
            2 => Ok(Self::Bottom),
            3 => Ok(Self::Left),
            other => Err(MazeError::StructuralDefect(Defect::InvalidSideIndex(other))),
        }
    }

    // The wall of the adjacent room that faces this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

// ============================================================================
// Color
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    // "#rrggbb", alpha dropped
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Resting color of a wall
pub const NEUTRAL_COLOR: Color = Color::BLACK;
// Color of a wall that has just been hit
pub const HIT_COLOR: Color = Color::WHITE;

// ============================================================================
// Side Characteristics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct SideCharacteristic {
    pub bounds: Rect,
    pub color: Color,
}

impl SideCharacteristic {
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            color: NEUTRAL_COLOR,
        }
    }
}

/// Per-room side registry, always holding exactly one entry per side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct SideRegistry([SideCharacteristic; 4]);

impl SideRegistry {
    /// Register Top, Right, Bottom, Left in that order from the room geometry.
    pub fn initialize(geometry: &RectDetails) -> MazeResult<Self> {
        let mut builder = SideRegistryBuilder::default();
        let failures: Vec<MazeError> = Side::ALL
            .into_iter()
            .filter_map(|side| {
                builder
                    .register(side, SideCharacteristic::new(geometry.edge_bounds(side)))
                    .err()
            })
            .collect();
        MazeError::from_batch(failures)?;
        builder.finish()
    }

    #[must_use]
    pub const fn get(&self, side: Side) -> &SideCharacteristic {
        &self.0[side.index()]
    }

    pub const fn get_mut(&mut self, side: Side) -> &mut SideCharacteristic {
        &mut self.0[side.index()]
    }

    // Entries in Top, Right, Bottom, Left order
    pub fn iter(&self) -> impl Iterator<Item = (Side, &SideCharacteristic)> {
        Side::ALL.into_iter().zip(self.0.iter())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn reset_colors(&mut self) {
        for entry in &mut self.0 {
            entry.color = NEUTRAL_COLOR;
        }
    }
}

/// Staging area while a room's sides are registered. Only a complete builder turns into
/// a `SideRegistry`, so a half-filled registry never escapes.
#[derive(Debug, Default)]
pub struct SideRegistryBuilder {
    slots: [Option<SideCharacteristic>; 4],
}

impl SideRegistryBuilder {
    pub fn register(&mut self, side: Side, characteristic: SideCharacteristic) -> MazeResult<()> {
        let slot = &mut self.slots[side.index()];
        if slot.is_some() {
            return Err(Defect::DuplicateSide(side).into());
        }
        *slot = Some(characteristic);
        Ok(())
    }

    pub fn finish(self) -> MazeResult<SideRegistry> {
        let [Some(top), Some(right), Some(bottom), Some(left)] = self.slots else {
            let missing = Side::ALL
                .into_iter()
                .filter(|side| self.slots[side.index()].is_none())
                .map(|side| MazeError::from(Defect::MissingSide(side)))
                .collect();
            return Err(MazeError::batch(missing).unwrap_or_else(|| MazeError::Aggregate(Vec::new())));
        };
        Ok(SideRegistry([top, right, bottom, left]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn side_indices_are_fixed() {
        for (expected, side) in Side::ALL.into_iter().enumerate() {
            assert_eq!(side.index(), expected);
            assert_eq!(Side::try_from_index(expected), Ok(side));
        }
        assert_eq!(
            Side::try_from_index(4),
            Err(MazeError::StructuralDefect(Defect::InvalidSideIndex(4)))
        );
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn initialize_registers_all_sides_in_neutral_color() {
        let geometry = RectDetails::new(0.0, 0.0, 8.0, 4.0);
        let registry = SideRegistry::initialize(&geometry).unwrap();

        assert_eq!(registry.len(), 4);
        let sides: Vec<Side> = registry.iter().map(|(side, _)| side).collect();
        assert_eq!(sides, Side::ALL);
        for (side, entry) in registry.iter() {
            assert_eq!(entry.color, NEUTRAL_COLOR);
            assert_eq!(entry.bounds, geometry.edge_bounds(side));
        }
    }

    #[test]
    fn duplicate_registration_is_a_defect() {
        let geometry = RectDetails::new(0.0, 0.0, 8.0, 8.0);
        let mut builder = SideRegistryBuilder::default();
        builder
            .register(Side::Top, SideCharacteristic::new(geometry.edge_bounds(Side::Top)))
            .unwrap();

        let err = builder
            .register(Side::Top, SideCharacteristic::new(geometry.edge_bounds(Side::Top)))
            .unwrap_err();
        assert_eq!(err, MazeError::StructuralDefect(Defect::DuplicateSide(Side::Top)));
    }

    #[test]
    fn incomplete_builder_reports_every_missing_side() {
        let geometry = RectDetails::new(0.0, 0.0, 8.0, 8.0);
        let mut builder = SideRegistryBuilder::default();
        builder
            .register(Side::Right, SideCharacteristic::new(geometry.edge_bounds(Side::Right)))
            .unwrap();

        let err = builder.finish().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aggregate);
        assert_eq!(err.counts().get(&ErrorKind::StructuralDefect), Some(&3));
    }

    #[test]
    fn reset_colors_restores_neutral() {
        let geometry = RectDetails::new(0.0, 0.0, 8.0, 8.0);
        let mut registry = SideRegistry::initialize(&geometry).unwrap();
        registry.get_mut(Side::Bottom).color = HIT_COLOR;

        registry.reset_colors();
        assert!(registry.iter().all(|(_, entry)| entry.color == NEUTRAL_COLOR));
    }

    #[test]
    fn color_hex() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::rgb(255, 16, 1).to_hex(), "#ff1001");
    }
}
