use super::tolerance::{clamp01, norm2};
use crate::model::Vec2;

/// Projection of `p` onto segment `a..b`: (x, y, t) with t clamped to [0,1].
pub fn seg_project(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32, f32) {
    let vx = x2 - x1; let vy = y2 - y1;
    let wx = px - x1; let wy = py - y1;
    let vv = vx*vx + vy*vy;
    let t = if vv > 0.0 { clamp01((wx*vx + wy*vy) / vv) } else { 0.0 };
    (x1 + t * vx, y1 + t * vy, t)
}

/// Segment between two circle centres, shortened by `radius` at both ends so
/// it starts and stops at the circle borders. Overlapping circles collapse to
/// the midpoint.
pub fn trimmed_segment(a: Vec2, b: Vec2, radius: f32) -> (Vec2, Vec2) {
    let ((ux, uy), len) = norm2(b.x - a.x, b.y - a.y);
    if len <= 2.0 * radius {
        let mid = Vec2::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y));
        return (mid, mid);
    }
    (
        Vec2::new(a.x + ux * radius, a.y + uy * radius),
        Vec2::new(b.x - ux * radius, b.y - uy * radius),
    )
}
