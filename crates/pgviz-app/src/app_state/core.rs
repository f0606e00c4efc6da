//! PgvizApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use pgviz_common::{Action, SnapshotStats};
use pgviz_config::PgvizConfig;
use pgviz_db::BufferSource;
use pgviz_grid::ScreenPoint;
use pgviz_platform::{parse_pointer_button, KeybindRegistry, PointerButton};
use pgviz_renderer::{FrameTimer, RenderState};

use crate::frame_loop::FrameLoop;

/// Top-level application state.
pub struct PgvizApp {
    pub(super) config: PgvizConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) frame_loop: FrameLoop,
    pub(super) source: Option<Box<dyn BufferSource>>,
    pub(super) source_label: String,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Input collected since the last frame
    pub(super) modifiers: winit::keyboard::ModifiersState,
    pub(super) pan_button: PointerButton,
    pub(super) pan_button_down: bool,
    pub(super) pointer: Option<ScreenPoint>,
    pub(super) pending_actions: Vec<Action>,
    pub(super) close_requested: bool,

    // Frame pacing
    pub(super) frame_interval: Duration,
    pub(super) next_frame: Instant,
    pub(super) timer: FrameTimer,
    pub(super) last_stats: Option<SnapshotStats>,

    pub(super) exit_code: i32,
}

impl PgvizApp {
    pub fn new(config: PgvizConfig, registry: KeybindRegistry, source: Box<dyn BufferSource>) -> Self {
        let pan_button = parse_pointer_button(&config.camera.pan_button).unwrap_or_else(|e| {
            tracing::warn!("{e}, panning with the right button");
            PointerButton::Right
        });
        let frame_interval = config.performance.frame_interval();

        Self {
            frame_loop: FrameLoop::from_config(&config),
            source_label: source.describe(),
            source: Some(source),
            config,
            registry,
            window: None,
            render_state: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            pan_button,
            pan_button_down: false,
            pointer: None,
            pending_actions: Vec::new(),
            close_requested: false,
            frame_interval,
            next_frame: Instant::now(),
            timer: FrameTimer::new(),
            last_stats: None,
            exit_code: 0,
        }
    }

    /// Exit status once the event loop has returned: 0 after a user stop,
    /// 1 after a query or initialization failure.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Record an exit status. A failure is never downgraded to success.
    pub(super) fn set_exit_code(&mut self, code: i32) {
        self.exit_code = self.exit_code.max(code);
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::PgvizApp;
    use pgviz_config::PgvizConfig;
    use pgviz_db::DemoBufferSource;
    use pgviz_platform::KeybindRegistry;

    pub fn demo_app(config: PgvizConfig) -> PgvizApp {
        let registry = KeybindRegistry::from_config(&config.keybinds);
        PgvizApp::new(config, registry, Box::new(DemoBufferSource::seeded(16, 1)))
    }
}
