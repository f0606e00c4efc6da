use pgviz_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parse a keybind string such as `"R"`, `"="`, `"Ctrl+Up"` or
/// `"Shift+Equal"` into a [`KeyBind`].
///
/// Every token but the last must be a modifier. `Cmd` maps to `Super` on
/// macOS and to `Ctrl` elsewhere; `Option` maps to `Alt`.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    }

    // A lone "+" is the plus key, not a separator.
    if trimmed == "+" {
        return Ok(KeyBind {
            modifiers: Vec::new(),
            key: "+".into(),
        });
    }

    let mut tokens: Vec<&str> = trimmed.split('+').map(str::trim).collect();
    let key_token = tokens.pop().unwrap_or_default();
    if key_token.is_empty() {
        return Err(PlatformError::InvalidKeybind(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::InvalidKeybind(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" if cfg!(target_os = "macos") => Some(Modifier::Super),
        "cmd" | "command" => Some(Modifier::Ctrl),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Map a config key name onto the names the window layer reports for
/// key presses (`pgviz_platform::normalize_winit_key`).
pub(super) fn normalize_key_name(token: &str) -> String {
    if token.chars().count() == 1 {
        return token.to_uppercase();
    }

    let lower = token.to_ascii_lowercase();
    let named = match lower.as_str() {
        "equal" | "equals" => "=",
        "minus" => "-",
        "plus" => "+",
        "period" => ".",
        "comma" => ",",
        "space" => "Space",
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        _ => {
            // F-keys and anything else: capitalize the first letter.
            let mut chars = lower.chars();
            return match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => lower,
            };
        }
    };
    named.to_string()
}
