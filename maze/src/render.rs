use bevy_math::{Rect, Vec2};

use crate::{
    constants::WALL_RENDER_THICKNESS,
    grid::MazeGrid,
    room::Room,
    sides::{Color, Side},
};

/// Drawing backend the maze hands its walls to.
pub trait LineRenderer {
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, thickness: f32);

    fn draw_rect(&mut self, rect: Rect, color: Color);
}

/// Per-side debug switches, supplied by whatever owns the debug UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawToggles {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    pub square_bounds: bool,
}

impl Default for DrawToggles {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
            square_bounds: false,
        }
    }
}

impl DrawToggles {
    #[must_use]
    pub const fn side(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }
}

impl Room {
    // One line per standing wall that is toggled on, plus the outer square if requested.
    pub fn draw<R: LineRenderer + ?Sized>(&self, renderer: &mut R, toggles: &DrawToggles) {
        if toggles.square_bounds {
            renderer.draw_rect(self.bounds(), self.side(Side::Top).color);
        }
        for side in Side::ALL {
            if !self.has_side(side) || !toggles.side(side) {
                continue;
            }
            let (start, end) = self.geometry().edge(side);
            renderer.draw_line(start, end, self.side(side).color, WALL_RENDER_THICKNESS);
        }
    }
}

impl MazeGrid {
    pub fn draw<R: LineRenderer + ?Sized>(&self, renderer: &mut R, toggles: &DrawToggles) {
        for room in self.rooms() {
            room.draw(renderer, toggles);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sides::NEUTRAL_COLOR;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Vec2, Vec2, Color, f32)>,
        rects: Vec<Rect>,
    }

    impl LineRenderer for Recorder {
        fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, thickness: f32) {
            self.lines.push((start, end, color, thickness));
        }

        fn draw_rect(&mut self, rect: Rect, _color: Color) {
            self.rects.push(rect);
        }
    }

    #[test]
    fn sealed_room_draws_four_lines() {
        let room = Room::new(0.0, 0.0, 10.0, 5.0, 0, 0, 0).unwrap();
        let mut recorder = Recorder::default();
        room.draw(&mut recorder, &DrawToggles::default());

        assert_eq!(
            recorder.lines,
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), NEUTRAL_COLOR, 3.0),
                (Vec2::new(10.0, 0.0), Vec2::new(10.0, 5.0), NEUTRAL_COLOR, 3.0),
                (Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), NEUTRAL_COLOR, 3.0),
                (Vec2::new(0.0, 0.0), Vec2::new(0.0, 5.0), NEUTRAL_COLOR, 3.0),
            ]
        );
        assert!(recorder.rects.is_empty());
    }

    #[test]
    fn removed_and_toggled_off_sides_are_skipped() {
        let mut room = Room::new(0.0, 0.0, 10.0, 10.0, 0, 0, 0).unwrap();
        room.remove_side(Side::Right);
        let toggles = DrawToggles {
            bottom: false,
            square_bounds: true,
            ..DrawToggles::default()
        };
        let mut recorder = Recorder::default();
        room.draw(&mut recorder, &toggles);

        assert_eq!(recorder.lines.len(), 2);
        assert_eq!(recorder.rects, vec![Rect::new(0.0, 0.0, 10.0, 10.0)]);
    }

    #[test]
    fn grid_draws_every_room() {
        let grid = MazeGrid::build(2, 3, 4.0, 4.0).unwrap();
        let mut recorder = Recorder::default();
        grid.draw(&mut recorder, &DrawToggles::default());
        assert_eq!(recorder.lines.len(), 24);
    }
}
