//! Keybind validation utilities.

use crate::keymap::parse_keybind;
use crate::schema::KeybindConfig;
use pgviz_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("increase_cell_size", &config.increase_cell_size),
        ("decrease_cell_size", &config.decrease_cell_size),
        ("reset_view", &config.reset_view),
        ("pan_left", &config.pan_left),
        ("pan_right", &config.pan_right),
        ("pan_up", &config.pan_up),
        ("pan_down", &config.pan_down),
        ("quit", &config.quit),
    ]
}

/// Validate that every keybind parses and no two resolve to the same key
/// combination.
///
/// Bindings are compared after parsing, so aliases collide: `"Equal"` and
/// `"="`, `"Esc"` and `"Escape"`, `"Ctrl+Shift+R"` and `"Shift+Ctrl+R"`.
pub fn validate_keybinds(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<(u8, String), (&str, &str)> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let kb = parse_keybind(binding)
            .map_err(|e| ConfigError::ValidationError(format!("keybinds.{name}: {e}")))?;

        let combo = (kb.modifier_mask(), kb.key);
        if let Some((existing_name, existing_binding)) = seen.get(&combo) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}' (same key as '{existing_binding}'): \
                 assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(combo, (name, binding));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_are_valid() {
        assert!(validate_keybinds(&KeybindConfig::default()).is_ok());
    }

    #[test]
    fn all_keybinds_returns_8_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 8);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            reset_view: "Escape".into(),
            ..Default::default()
        };
        let err = validate_keybinds(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("reset_view"));
        assert!(err.contains("quit"));
    }

    #[test]
    fn duplicates_ignore_case() {
        let config = KeybindConfig {
            reset_view: "q".into(),
            quit: "Q".into(),
            ..Default::default()
        };
        assert!(validate_keybinds(&config).is_err());
    }

    #[test]
    fn named_key_aliases_collide() {
        let config = KeybindConfig {
            increase_cell_size: "Equal".into(),
            quit: "=".into(),
            ..Default::default()
        };
        let err = validate_keybinds(&config).unwrap_err().to_string();
        assert!(err.contains("increase_cell_size"));
        assert!(err.contains("quit"));

        let config = KeybindConfig {
            reset_view: "Esc".into(),
            ..Default::default()
        };
        assert!(validate_keybinds(&config).is_err());
    }

    #[test]
    fn modifier_order_does_not_matter() {
        let config = KeybindConfig {
            reset_view: "Ctrl+Shift+R".into(),
            quit: "Shift+Ctrl+R".into(),
            ..Default::default()
        };
        assert!(validate_keybinds(&config).is_err());
    }

    #[test]
    fn cmd_collides_with_its_platform_modifier() {
        let same = if cfg!(target_os = "macos") { "Super+X" } else { "Ctrl+X" };
        let config = KeybindConfig {
            reset_view: "Cmd+X".into(),
            quit: same.into(),
            ..Default::default()
        };
        assert!(validate_keybinds(&config).is_err());
    }

    #[test]
    fn distinct_modifiers_do_not_collide() {
        let config = KeybindConfig {
            reset_view: "Ctrl+R".into(),
            quit: "Alt+R".into(),
            ..Default::default()
        };
        assert!(validate_keybinds(&config).is_ok());
    }

    #[test]
    fn unparseable_keybind_is_rejected() {
        let config = KeybindConfig {
            quit: "Hyper+Q".into(),
            ..Default::default()
        };
        let err = validate_keybinds(&config).unwrap_err().to_string();
        assert!(err.contains("keybinds.quit"));
    }
}
