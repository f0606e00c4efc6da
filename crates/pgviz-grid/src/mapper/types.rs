use serde::{Deserialize, Serialize};

/// Cell size and canvas dimensions for one frame, all in pixels.
///
/// Every dimension is at least 1, so column and row math never divides
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    cell_size: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl GridConfig {
    pub fn new(cell_size: u32, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
            canvas_width: canvas_width.max(1),
            canvas_height: canvas_height.max(1),
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Cells per row: `max(1, floor(canvas_width / cell_size))`.
    pub fn columns(&self) -> usize {
        (self.canvas_width / self.cell_size).max(1) as usize
    }
}

/// Column/row position of a buffer in the grid. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    pub column: usize,
    pub row: usize,
}

/// A square cell in world pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CellRect {
    /// Whether the rect overlaps `[0, width) × [0, height)`.
    pub fn intersects_canvas(&self, width: f64, height: f64) -> bool {
        self.x < width && self.y < height && self.x + self.size > 0.0 && self.y + self.size > 0.0
    }
}

/// A pointer position in whole screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The pixel containing a fractional cursor position.
    pub fn from_cursor(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }
}
