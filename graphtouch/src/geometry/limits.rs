// Centralized ingestion limits to harden snapshot decoding against untrusted input

// Session size caps
pub const MAX_VERTICES: usize = 100_000;
pub const MAX_EDGES: usize = 400_000;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }
