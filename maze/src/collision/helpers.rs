use bevy_math::{Rect, Vec2};

// Check if two 1D ranges share more than a single point.
#[must_use]
pub fn ranges_overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min && a_min < b_max
}

// Rectangles overlap only when the intersection has positive area; touching edges don't count.
#[must_use]
pub fn overlap_rect_vs_rect(a: &Rect, b: &Rect) -> bool {
    ranges_overlap_1d(a.min.x, a.max.x, b.min.x, b.max.x) && ranges_overlap_1d(a.min.y, a.max.y, b.min.y, b.max.y)
}

// Circle vs rectangle using the closest point of the rectangle to the circle center.
#[must_use]
pub fn overlap_circle_vs_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    closest.distance_squared(center) < radius * radius
}
