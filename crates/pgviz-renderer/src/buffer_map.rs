//! Buffer map drawing: one square per buffer plus the hover label.

use pgviz_common::{BufferRecord, BufferSnapshot, Color};
use pgviz_grid::mapper::{cell_rect, visible_range};
use pgviz_grid::{CameraState, CellRect, GridConfig, ScreenPoint};

use crate::canvas::Canvas;
use crate::palette::HeatPalette;

/// Label panel width before the relation name is added.
pub const LABEL_BASE_WIDTH: f64 = 100.0;
/// Label panel height; fits four lines at the default font size.
pub const LABEL_HEIGHT: f64 = 70.0;

const PANEL_OFFSET: f64 = 2.0;
const TEXT_OFFSET: f64 = 10.0;

/// Colors and font size of the hover label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub background: Color,
    pub text: Color,
    pub font_size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            text: Color::WHITE,
            font_size: 15.0,
        }
    }
}

/// Draws snapshots onto a [`Canvas`].
pub struct FrameRenderer {
    palette: HeatPalette,
    label: LabelStyle,
}

impl FrameRenderer {
    pub fn new(palette: HeatPalette, label: LabelStyle) -> Self {
        Self { palette, label }
    }

    pub fn palette(&self) -> &HeatPalette {
        &self.palette
    }

    /// Draw every on-canvas buffer of `snapshot`, returning how many were drawn.
    ///
    /// Cells are placed with the same mapping the picker inverts. A cell
    /// size of 1 draws single points.
    pub fn draw_cells<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        snapshot: &BufferSnapshot,
        camera: &CameraState,
        grid: &GridConfig,
    ) -> usize {
        let width = f64::from(grid.canvas_width());
        let height = f64::from(grid.canvas_height());
        let single_pixel = grid.cell_size() == 1;
        let mut drawn = 0;

        for id in visible_range(camera, grid, snapshot.len()) {
            let Some(record) = snapshot.get(id) else {
                break;
            };
            let world = cell_rect(id, grid);
            let rect = CellRect {
                x: world.x - camera.pan.x,
                y: world.y - camera.pan.y,
                size: world.size,
            };
            if !rect.intersects_canvas(width, height) {
                continue;
            }

            let color = self.palette.color_for(record.usage_count);
            if single_pixel {
                canvas.draw_point(rect.x, rect.y, color);
            } else {
                canvas.fill_rect(rect.x, rect.y, rect.size, rect.size, color);
            }
            drawn += 1;
        }

        drawn
    }

    /// Draw the detail panel for `record` next to the (clamped) pointer.
    pub fn draw_label<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        record: &BufferRecord,
        anchor: ScreenPoint,
    ) {
        let x = f64::from(anchor.x);
        let y = f64::from(anchor.y);
        let name_width = canvas.measure_text(&record.relation_name, self.label.font_size);

        canvas.fill_rect(
            x + PANEL_OFFSET,
            y + PANEL_OFFSET,
            LABEL_BASE_WIDTH + f64::from(name_width),
            LABEL_HEIGHT,
            self.label.background.opaque(),
        );
        canvas.draw_text(
            &label_text(record),
            x + TEXT_OFFSET,
            y + TEXT_OFFSET,
            self.label.font_size,
            self.label.text,
        );
    }
}

/// The four `key=value` lines shown for a hovered buffer.
pub fn label_text(record: &BufferRecord) -> String {
    format!(
        "bufferid={}\nrelfilenode={}\nusagecount={}\nrelname={}",
        record.buffer_id,
        record.relation_id_label(),
        record.usage_count,
        record.relation_name
    )
}
