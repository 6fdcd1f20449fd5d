use std::fmt::Write;

use bevy_math::{Rect, Vec2};
use maze::{Color, LineRenderer};

// Room for half a wall stroke around the outer boundary
const MARGIN: f32 = 4.0;
// Gray so that both black and white walls stay visible
const BACKGROUND: &str = "#808080";

/// Collects maze walls as SVG elements.
pub struct SvgCanvas {
    size: Vec2,
    body: String,
}

impl SvgCanvas {
    #[must_use]
    pub const fn new(size: Vec2) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        let width = 2.0f32.mul_add(MARGIN, self.size.x);
        let height = 2.0f32.mul_add(MARGIN, self.size.y);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"{min} {min} {width} {height}\">\n\
             <rect x=\"{min}\" y=\"{min}\" width=\"{width}\" height=\"{height}\" fill=\"{BACKGROUND}\"/>\n\
             {body}</svg>\n",
            min = -MARGIN,
            body = self.body,
        )
    }
}

fn opacity(color: Color) -> f32 {
    f32::from(color.a) / 255.0
}

impl LineRenderer for SvgCanvas {
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, thickness: f32) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-opacity=\"{}\" \
             stroke-width=\"{thickness}\" stroke-linecap=\"square\"/>",
            start.x,
            start.y,
            end.x,
            end.y,
            color.to_hex(),
            opacity(color),
        );
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let size = rect.size();
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\"/>",
            rect.min.x,
            rect.min.y,
            size.x,
            size.y,
            color.to_hex(),
            opacity(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze::{DrawToggles, MazeGrid};

    #[test]
    fn empty_canvas_is_just_the_background() {
        let svg = SvgCanvas::new(Vec2::new(20.0, 10.0)).finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"28\" height=\"18\""));
        assert!(svg.contains("fill=\"#808080\""));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn line_uses_wall_color_and_thickness() {
        let mut canvas = SvgCanvas::new(Vec2::new(10.0, 10.0));
        canvas.draw_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Color::WHITE, 3.0);
        let svg = canvas.finish();
        assert!(svg.contains(
            "<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"0\" stroke=\"#ffffff\" stroke-opacity=\"1\" stroke-width=\"3\""
        ));
    }

    #[test]
    fn grid_walls_become_lines() {
        let grid = MazeGrid::build(2, 2, 8.0, 8.0).unwrap();
        let mut canvas = SvgCanvas::new(Vec2::new(16.0, 16.0));
        grid.draw(
            &mut canvas,
            &DrawToggles {
                square_bounds: true,
                ..DrawToggles::default()
            },
        );
        let svg = canvas.finish();
        assert_eq!(svg.matches("<line").count(), 16);
        // background plus one outline per room
        assert_eq!(svg.matches("<rect").count(), 5);
    }
}
