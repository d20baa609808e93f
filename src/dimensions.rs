//! Room-count clamping and the room to grid size relationship
//!
//! Callers ask for rooms; the generator works on a grid that also
//! holds the wall slots between rooms. A request of `n` rooms along an
//! axis becomes `2n - 1` grid cells. The upper bounds come from the
//! rendered pixel budget: with at most [MAX_HEIGHT_PX] pixels and at
//! least [MIN_CELL_PX] pixels per cell, no more than
//! `(MAX_HEIGHT_PX / MIN_CELL_PX + 1) / 2` room rows fit.

/// Largest rendered maze width, pixels
pub const MAX_WIDTH_PX: usize = 600;
/// Largest rendered maze height, pixels
pub const MAX_HEIGHT_PX: usize = 600;
/// Smallest usable cell edge, pixels
pub const MIN_CELL_PX: usize = 3;

pub const MAX_ROWS: usize = (MAX_HEIGHT_PX / MIN_CELL_PX + 1) / 2;
pub const MAX_COLS: usize = (MAX_WIDTH_PX / MIN_CELL_PX + 1) / 2;
pub const MIN_ROWS: usize = 2;
pub const MIN_COLS: usize = 1;

/// Room counts used when the requested value is not a number
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;

/// Validated maze size in rooms, walls excluded.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RoomDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl RoomDimensions {
    /// Clamp requested room counts into the renderable range.
    pub fn clamped(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: cols.clamp(MIN_COLS, MAX_COLS),
        }
    }

    /// Full grid height, wall rows included
    pub fn grid_rows(&self) -> usize {
        2 * self.rows - 1
    }

    /// Full grid width, wall columns included
    pub fn grid_cols(&self) -> usize {
        2 * self.cols - 1
    }
}

/// Parse a room count from user-supplied text.
///
/// Non-numeric input falls back to the given default silently; the
/// original spinbox input behaves the same way.
pub fn parse_room_count(text: &str, default: usize) -> usize {
    text.trim().parse().unwrap_or(default)
}
