//! Keybind registry: maps key presses to runtime `Action`s.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;

#[cfg(test)]
mod tests {
    use super::*;
    use pgviz_config::keymap::parse_keybind;
    use crate::winit_keys::normalize_winit_key;
    use pgviz_common::Action;
    use pgviz_config::schema::KeybindConfig;

    fn press(key: &str) -> KeyCombo {
        KeyCombo::from_winit(false, false, false, false, normalize_winit_key(key))
    }

    #[test]
    fn keycombo_from_keybind() {
        let combo = KeyCombo::from_keybind(&parse_keybind("Ctrl+Shift+R").unwrap());
        assert_eq!(combo.mods, 0b0101);
        assert_eq!(combo.key, "R");
    }

    #[test]
    fn keycombo_from_winit_matches_parsed() {
        let a = KeyCombo::from_winit(true, false, false, false, "G".into());
        let b = KeyCombo::from_keybind(&parse_keybind("Ctrl+G").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn keycombo_to_keybind_roundtrip() {
        let original = parse_keybind("Alt+Super+Up").unwrap();
        let combo = KeyCombo::from_keybind(&original);
        assert_eq!(combo.to_keybind(), original);
    }

    #[test]
    fn registry_from_default_config() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 8);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registry_resolves_winit_presses() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.lookup(&press("=")), Action::IncreaseCellSize);
        assert_eq!(registry.lookup(&press("-")), Action::DecreaseCellSize);
        assert_eq!(registry.lookup(&press("r")), Action::ResetView);
        assert_eq!(registry.lookup(&press("ArrowLeft")), Action::PanLeft);
        assert_eq!(registry.lookup(&press("ArrowRight")), Action::PanRight);
        assert_eq!(registry.lookup(&press("ArrowUp")), Action::PanUp);
        assert_eq!(registry.lookup(&press("ArrowDown")), Action::PanDown);
        assert_eq!(registry.lookup(&press("Escape")), Action::Quit);
    }

    #[test]
    fn registry_modifiers_must_match() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let combo = KeyCombo::from_winit(true, false, false, false, "R".into());
        assert_eq!(registry.lookup(&combo), Action::None);
    }

    #[test]
    fn registry_lookup_miss() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.lookup(&press("z")), Action::None);
    }

    #[test]
    fn registry_skips_invalid_binding() {
        let config = KeybindConfig {
            quit: "Hyper+Q".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 7);
        assert!(registry.keybind_for_action(Action::Quit).is_none());
    }

    #[test]
    fn registry_later_alias_replaces_earlier() {
        let config = KeybindConfig {
            increase_cell_size: "Equal".into(),
            quit: "=".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.lookup(&press("=")), Action::Quit);
    }

    #[test]
    fn shifted_character_falls_back_to_unshifted_binding() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let shifted_equal = KeyCombo::from_winit(false, false, true, false, "=".into());
        assert_eq!(registry.lookup(&shifted_equal), Action::None);
        assert_eq!(registry.lookup_character(&shifted_equal), Action::IncreaseCellSize);
    }

    #[test]
    fn explicit_shift_binding_wins_over_fallback() {
        let config = KeybindConfig {
            reset_view: "Shift+R".into(),
            quit: "R".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        let shift_r = KeyCombo::from_winit(false, false, true, false, "R".into());
        assert_eq!(registry.lookup_character(&shift_r), Action::ResetView);
        assert_eq!(registry.lookup_character(&press("r")), Action::Quit);
    }

    #[test]
    fn character_fallback_keeps_other_modifiers() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let ctrl_shift_equal = KeyCombo::from_winit(true, false, true, false, "=".into());
        assert_eq!(registry.lookup_character(&ctrl_shift_equal), Action::None);
    }

    #[test]
    fn registry_reverse_lookup() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(
            registry.keybind_for_action(Action::Quit).as_deref(),
            Some("Escape")
        );
    }
}
