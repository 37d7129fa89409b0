// Centralized tolerances for hit testing and derived edge geometry

pub const EPS_LEN: f32 = 1e-6;            // zero-length vector threshold

// Presentation-space defaults, in canvas pixels
pub const DEFAULT_NODE_RADIUS: f32 = 35.0;
pub const DEFAULT_EDGE_SELECTION_WIDTH: f32 = 20.0;

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }

#[inline]
pub fn norm2(mut x: f32, mut y: f32) -> ((f32,f32), f32) {
    let len = (x*x + y*y).sqrt();
    if len > EPS_LEN { x/=len; y/=len; ((x,y), len) } else { ((0.0,0.0), 0.0) }
}
