//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use pgviz_common::Action;
use pgviz_grid::ScreenPoint;
use pgviz_platform::{normalize_winit_key, KeyCombo, PointerButton};

use super::core::PgvizApp;

impl ApplicationHandler for PgvizApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.set_exit_code(1);
            self.shutdown();
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.close_requested = true;
                self.run_frame(event_loop);
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Some(ScreenPoint::from_cursor(position.x, position.y));
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if pointer_button(button) == Some(self.pan_button) {
                    self.pan_button_down = state == ElementState::Pressed;
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                self.run_frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.schedule_next_frame(event_loop);
    }
}

impl PgvizApp {
    /// The pointer keeps its last in-window position, so the cell under the
    /// edge stays picked. A drag in progress ends.
    pub(super) fn pointer_left(&mut self) {
        self.pan_button_down = false;
    }

    /// Resolve a key press to an action and queue it for the next frame.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let (key_name, is_character) = match &logical_key {
            Key::Named(named) => (format!("{named:?}"), false),
            Key::Character(c) => (c.to_string(), true),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );

        let action = if is_character {
            self.registry.lookup_character(&combo)
        } else {
            self.registry.lookup(&combo)
        };
        match action {
            Action::None => tracing::trace!("unbound key {:?}", combo.key),
            action => {
                tracing::debug!("key {:?} -> {}", combo.key, action.label());
                self.pending_actions.push(action);
            }
        }
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Right => Some(PointerButton::Right),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}
