//! Forward and inverse index math.

use std::ops::Range;

use pgviz_common::Vec2;

use crate::camera::CameraState;

use super::{CellAddress, CellRect, GridConfig, ScreenPoint};

/// Grid position of the buffer at `id`.
pub fn cell_of(id: usize, config: &GridConfig) -> CellAddress {
    let columns = config.columns();
    CellAddress {
        column: id % columns,
        row: id / columns,
    }
}

/// Top-left world pixel of the buffer at `id`, before any pan is applied.
pub fn cell_origin(id: usize, config: &GridConfig) -> Vec2 {
    let address = cell_of(id, config);
    let size = config.cell_size() as f64;
    Vec2::new(address.column as f64 * size, address.row as f64 * size)
}

/// World-space square occupied by the buffer at `id`.
pub fn cell_rect(id: usize, config: &GridConfig) -> CellRect {
    let origin = cell_origin(id, config);
    CellRect {
        x: origin.x,
        y: origin.y,
        size: config.cell_size() as f64,
    }
}

/// Nearest on-canvas pixel to `screen`.
pub fn clamp_to_canvas(screen: ScreenPoint, config: &GridConfig) -> ScreenPoint {
    let max_x = i32::try_from(config.canvas_width() - 1).unwrap_or(i32::MAX);
    let max_y = i32::try_from(config.canvas_height() - 1).unwrap_or(i32::MAX);
    ScreenPoint::new(screen.x.clamp(0, max_x), screen.y.clamp(0, max_y))
}

/// Resolve a screen pixel to the buffer drawn there.
///
/// The point is clamped to the canvas first, then moved into world space by
/// adding the camera pan. Points left of or above the world origin, in the
/// unused strip right of the last column, or past the last record resolve
/// to `None`.
pub fn index_of(
    screen: ScreenPoint,
    camera: &CameraState,
    config: &GridConfig,
    record_count: usize,
) -> Option<usize> {
    let screen = clamp_to_canvas(screen, config);
    let world_x = f64::from(screen.x) + camera.pan.x;
    let world_y = f64::from(screen.y) + camera.pan.y;
    if world_x < 0.0 || world_y < 0.0 {
        return None;
    }

    let size = config.cell_size() as f64;
    let column = (world_x / size).floor() as usize;
    let row = (world_y / size).floor() as usize;
    let columns = config.columns();
    if column >= columns {
        return None;
    }

    let index = row.checked_mul(columns)?.checked_add(column)?;
    (index < record_count).then_some(index)
}

/// Ids whose rows intersect the canvas under the current pan.
///
/// Rows are the clipping unit; cells in a returned row may still be
/// horizontally off-screen when the camera is panned sideways.
pub fn visible_range(camera: &CameraState, config: &GridConfig, record_count: usize) -> Range<usize> {
    let size = config.cell_size() as f64;
    let top = camera.pan.y;
    let bottom = top + config.canvas_height() as f64;
    if bottom <= 0.0 {
        return 0..0;
    }

    let columns = config.columns();
    let first_row = (top.max(0.0) / size).floor() as usize;
    let end_row = (bottom / size).ceil() as usize;
    let start = first_row.saturating_mul(columns).min(record_count);
    let end = end_row.saturating_mul(columns).min(record_count);
    start..end
}
