//! One iteration of the visualizer: fetch, update camera, draw, pick.
//!
//! Kept free of winit and wgpu so the whole frame can be driven with a
//! [`DemoBufferSource`](pgviz_db::DemoBufferSource) and a
//! [`RecordingCanvas`](pgviz_renderer::RecordingCanvas).

use pgviz_common::{Action, Color, SnapshotStats, Vec2};
use pgviz_config::{resolve_palette, PgvizConfig};
use pgviz_db::BufferSource;
use pgviz_grid::mapper::clamp_to_canvas;
use pgviz_grid::{pick, CameraController, ScreenPoint};
use pgviz_renderer::{Canvas, FrameRenderer, HeatPalette, LabelStyle};

/// Lifecycle of the frame loop. `Failed` and `Stopped` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Failed(String),
    Stopped,
}

impl LoopState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoopState::Running)
    }

    /// Process exit code for a loop that ended in this state.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoopState::Failed(_) => 1,
            LoopState::Running | LoopState::Stopped => 0,
        }
    }
}

/// Input gathered since the previous frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub close_requested: bool,
    /// Pointer position, `None` while the cursor is outside the window.
    pub pointer: Option<ScreenPoint>,
    pub pan_button_down: bool,
    pub actions: Vec<Action>,
}

/// What a single [`FrameLoop::tick`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    pub state: LoopState,
    /// Counts for the snapshot drawn this frame, if one was fetched.
    pub stats: Option<SnapshotStats>,
    /// Index of the buffer under the pointer, if any.
    pub hovered: Option<usize>,
}

pub struct FrameLoop {
    camera: CameraController,
    renderer: FrameRenderer,
    background: Color,
    reset_restores_cell_size: bool,
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new(
        camera: CameraController,
        renderer: FrameRenderer,
        background: Color,
        reset_restores_cell_size: bool,
    ) -> Self {
        Self {
            camera,
            renderer,
            background,
            reset_restores_cell_size,
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Build from the `[grid]`, `[camera]`, `[palette]` and `[label]` sections.
    ///
    /// An unparsable palette falls back to black cells on a black background.
    pub fn from_config(config: &PgvizConfig) -> Self {
        let font_size = config.label.font_size as f32;
        let (palette, background, label) = match resolve_palette(&config.palette) {
            Ok(resolved) => (
                HeatPalette::new(resolved.cells),
                resolved.background,
                LabelStyle {
                    background: resolved.label_background,
                    text: resolved.label_text,
                    font_size,
                },
            ),
            Err(e) => {
                tracing::warn!("palette unusable, drawing without colors: {e}");
                (
                    HeatPalette::new(Vec::new()),
                    Color::BLACK,
                    LabelStyle {
                        font_size,
                        ..LabelStyle::default()
                    },
                )
            }
        };

        Self::new(
            CameraController::new(config.grid.cell_size, config.camera.pan_axis),
            FrameRenderer::new(palette, label),
            background,
            config.camera.reset_restores_cell_size,
        )
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Frames fully drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Does nothing once the loop is terminal.
    pub fn tick<S, C>(&mut self, source: &mut S, input: &FrameInput, canvas: &mut C) -> FrameOutcome
    where
        S: BufferSource + ?Sized,
        C: Canvas + ?Sized,
    {
        if self.state.is_terminal() {
            return self.outcome(None, None);
        }

        if input.close_requested || input.actions.contains(&Action::Quit) {
            tracing::info!("stop requested after {} frames", self.frames);
            self.state = LoopState::Stopped;
            return self.outcome(None, None);
        }

        let snapshot = match source.fetch() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("buffer cache query failed on frame {}: {e}", self.frames + 1);
                self.state = LoopState::Failed(e.to_string());
                return self.outcome(None, None);
            }
        };

        self.apply_input(input);

        let (width, height) = canvas.size();
        let grid = self.camera.grid_config(width, height);
        let camera = *self.camera.state();

        canvas.clear(self.background);
        let drawn = self
            .renderer
            .draw_cells(canvas, &snapshot, &camera, &grid);
        tracing::trace!("frame {}: drew {drawn} of {} cells", self.frames + 1, snapshot.len());

        let hovered = input.pointer.and_then(|pointer| {
            let picked = pick(pointer, &camera, &grid, snapshot.len());
            let record = picked.record(&snapshot)?;
            self.renderer
                .draw_label(canvas, record, clamp_to_canvas(pointer, &grid));
            picked.buffer_index
        });

        self.frames += 1;
        self.outcome(Some(snapshot.stats()), hovered)
    }

    fn apply_input(&mut self, input: &FrameInput) {
        for &action in input.actions.iter().filter(|a| a.is_camera_action()) {
            self.camera.apply(action);
            if action == Action::ResetView && self.reset_restores_cell_size {
                self.camera.reset_cell_size();
            }
        }

        match input.pointer {
            Some(p) => self
                .camera
                .apply_pointer(Vec2::new(f64::from(p.x), f64::from(p.y)), input.pan_button_down),
            // Leaving the window ends any drag in progress.
            None => self.camera.apply_pointer(Vec2::ZERO, false),
        }
    }

    fn outcome(&self, stats: Option<SnapshotStats>, hovered: Option<usize>) -> FrameOutcome {
        FrameOutcome {
            state: self.state.clone(),
            stats,
            hovered,
        }
    }
}
