//! Driving the frame loop from the window.

use winit::event_loop::ActiveEventLoop;

use crate::frame_loop::{FrameInput, LoopState};

use super::core::PgvizApp;

impl PgvizApp {
    /// Hand everything collected since the last frame to the frame loop,
    /// present the result, and exit once the loop has ended.
    pub(super) fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let input = self.take_input();
        let (Some(source), Some(rs)) = (self.source.as_deref_mut(), self.render_state.as_mut())
        else {
            return;
        };

        self.timer.begin_frame();
        let outcome = self.frame_loop.tick(source, &input, rs);

        if outcome.state.is_terminal() {
            if let LoopState::Failed(ref message) = outcome.state {
                eprintln!("pgviz: {message}");
            }
            self.set_exit_code(outcome.state.exit_code());
            self.finish(event_loop);
            return;
        }

        if let Err(e) = rs.present() {
            tracing::error!("Render error: {e}");
            eprintln!("pgviz: {e}");
            self.set_exit_code(1);
            self.finish(event_loop);
            return;
        }
        tracing::trace!(hovered = ?outcome.hovered, "frame presented");
        self.last_stats = outcome.stats;
        self.update_window_title();
    }

    /// Drain pending input. Pointer and pan button state carry over.
    pub(super) fn take_input(&mut self) -> FrameInput {
        FrameInput {
            close_requested: std::mem::take(&mut self.close_requested),
            pointer: self.pointer,
            pan_button_down: self.pan_button_down,
            actions: std::mem::take(&mut self.pending_actions),
        }
    }

    fn finish(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown();
        event_loop.exit();
    }
}

#[cfg(test)]
mod tests {
    use pgviz_common::Action;
    use pgviz_config::PgvizConfig;
    use pgviz_grid::ScreenPoint;

    use crate::app_state::core::test_support::demo_app;

    #[test]
    fn take_input_drains_actions_and_close() {
        let mut app = demo_app(PgvizConfig::default());
        app.pending_actions.push(Action::PanDown);
        app.close_requested = true;
        app.pointer = Some(ScreenPoint::new(3, 4));
        app.pan_button_down = true;

        let input = app.take_input();
        assert_eq!(input.actions, vec![Action::PanDown]);
        assert!(input.close_requested);
        assert_eq!(input.pointer, Some(ScreenPoint::new(3, 4)));
        assert!(input.pan_button_down);

        let next = app.take_input();
        assert!(next.actions.is_empty());
        assert!(!next.close_requested);
        assert_eq!(next.pointer, Some(ScreenPoint::new(3, 4)));
        assert!(next.pan_button_down);
    }
}
