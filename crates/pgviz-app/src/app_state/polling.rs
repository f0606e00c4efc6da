//! Frame pacing: one redraw per `performance.frame_rate` interval.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::PgvizApp;

impl PgvizApp {
    /// Request a redraw if a frame is due and sleep until the next one.
    pub(super) fn schedule_next_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.frame_due(now) {
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    /// Advance the deadline past `now` if it has been reached.
    ///
    /// A late frame restarts the schedule from `now` instead of bursting to
    /// catch up.
    pub(super) fn frame_due(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.frame_interval;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_interval;
        }
        true
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use pgviz_config::PgvizConfig;

    use crate::app_state::core::test_support::demo_app;

    fn app_at(fps: u32, start: Instant) -> crate::app_state::PgvizApp {
        let mut config = PgvizConfig::default();
        config.performance.frame_rate = fps;
        let mut app = demo_app(config);
        app.next_frame = start;
        app
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let start = Instant::now();
        let mut app = app_at(5, start);
        assert!(app.frame_due(start));
        assert_eq!(app.next_frame, start + Duration::from_millis(200));
    }

    #[test]
    fn not_due_before_deadline() {
        let start = Instant::now();
        let mut app = app_at(5, start);
        assert!(app.frame_due(start));
        assert!(!app.frame_due(start + Duration::from_millis(100)));
        assert!(app.frame_due(start + Duration::from_millis(200)));
    }

    #[test]
    fn late_frame_does_not_burst() {
        let start = Instant::now();
        let mut app = app_at(10, start);
        assert!(app.frame_due(start));

        let late = start + Duration::from_secs(2);
        assert!(app.frame_due(late));
        assert_eq!(app.next_frame, late + Duration::from_millis(100));
        assert!(!app.frame_due(late + Duration::from_millis(50)));
    }
}
