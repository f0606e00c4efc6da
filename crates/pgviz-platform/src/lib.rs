//! Input plumbing for pgviz: keybind parsing, the keybind-to-action
//! registry, winit key name normalization and pointer button names.

pub mod input;
pub mod mouse;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use pgviz_config::keymap::{keybind_to_display, parse_keybind, KeyBind, Modifier};
pub use mouse::{parse_pointer_button, PointerButton};
pub use winit_keys::normalize_winit_key;
