use pgviz_common::{Action, PanAxis, Vec2};

use crate::mapper::GridConfig;

use super::types::{CameraState, PanState, NUDGE_CELLS};

/// Owns the camera and the current cell size, and applies user input to them.
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    cell_size: u32,
    initial_cell_size: u32,
    pan_axis: PanAxis,
    pan_state: PanState,
}

impl CameraController {
    pub fn new(cell_size: u32, pan_axis: PanAxis) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            state: CameraState::default(),
            cell_size,
            initial_cell_size: cell_size,
            pan_axis,
            pan_state: PanState::Idle,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn pan_axis(&self) -> PanAxis {
        self.pan_axis
    }

    pub fn pan_state(&self) -> PanState {
        self.pan_state
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.pan_state, PanState::Panning { .. })
    }

    /// Grid parameters for a canvas of the given size at the current cell size.
    pub fn grid_config(&self, canvas_width: u32, canvas_height: u32) -> GridConfig {
        GridConfig::new(self.cell_size, canvas_width, canvas_height)
    }

    pub fn increase_cell_size(&mut self) {
        self.cell_size = self.cell_size.saturating_add(1);
    }

    /// Shrink the cell by one pixel; no-op at 1.
    pub fn decrease_cell_size(&mut self) {
        if self.cell_size > 1 {
            self.cell_size -= 1;
        }
    }

    /// Return pan and zoom to their startup values. Cell size is untouched.
    pub fn reset_view(&mut self) {
        self.state = CameraState::default();
    }

    /// Restore the cell size given at construction.
    pub fn reset_cell_size(&mut self) {
        self.cell_size = self.initial_cell_size;
    }

    fn nudge_step(&self) -> f64 {
        NUDGE_CELLS * self.cell_size as f64
    }

    pub fn pan_left(&mut self) {
        self.state.pan.x -= self.nudge_step();
    }

    pub fn pan_right(&mut self) {
        self.state.pan.x += self.nudge_step();
    }

    pub fn pan_up(&mut self) {
        self.state.pan.y -= self.nudge_step();
    }

    pub fn pan_down(&mut self) {
        self.state.pan.y += self.nudge_step();
    }

    /// Move the camera opposite to a pointer drag of `delta` screen pixels.
    pub fn drag(&mut self, delta: Vec2) {
        let scaled = delta * (-1.0 / self.state.zoom);
        self.state.pan += self.pan_axis.restrict(scaled);
    }

    /// Feed the pointer position and pan-button state for this frame.
    pub fn apply_pointer(&mut self, position: Vec2, pan_button_down: bool) {
        self.pan_state = match (self.pan_state, pan_button_down) {
            (PanState::Idle, true) => PanState::Panning { last: position },
            (PanState::Panning { last }, true) => {
                self.drag(position - last);
                PanState::Panning { last: position }
            }
            (_, false) => PanState::Idle,
        };
    }

    /// Apply a discrete action. Returns `true` if camera or cell size changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let before = (self.state, self.cell_size);
        match action {
            Action::IncreaseCellSize => self.increase_cell_size(),
            Action::DecreaseCellSize => self.decrease_cell_size(),
            Action::ResetView => self.reset_view(),
            Action::PanLeft => self.pan_left(),
            Action::PanRight => self.pan_right(),
            Action::PanUp => self.pan_up(),
            Action::PanDown => self.pan_down(),
            Action::Quit | Action::None => {}
        }
        before != (self.state, self.cell_size)
    }
}
