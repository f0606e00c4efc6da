//! Winit key name normalization.
//!
//! Converts winit's logical key names to the names produced by
//! [`parse_keybind`](pgviz_config::keymap::parse_keybind).

/// Convert a winit key name (`"ArrowUp"`, `" "`, `"r"`) to a keybind key name.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " => "Space".into(),
        // Single characters (letters, "=", "-") uppercase; named keys pass through.
        _ if key.chars().count() == 1 => key.to_uppercase(),
        _ => key.to_string(),
    }
}
