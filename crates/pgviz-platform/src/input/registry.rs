use std::collections::HashMap;

use pgviz_common::Action;
use pgviz_config::keymap::{keybind_to_display, parse_keybind, Modifier};
use pgviz_config::schema::KeybindConfig;

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the `[keybinds]` config section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped. When two
    /// strings resolve to the same combo the later one wins, with a warning.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 8] = [
            (&config.increase_cell_size, Action::IncreaseCellSize),
            (&config.decrease_cell_size, Action::DecreaseCellSize),
            (&config.reset_view, Action::ResetView),
            (&config.pan_left, Action::PanLeft),
            (&config.pan_right, Action::PanRight),
            (&config.pan_up, Action::PanUp),
            (&config.pan_down, Action::PanDown),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    if let Some(shadowed) = bindings.insert(KeyCombo::from_keybind(&kb), action) {
                        tracing::warn!(
                            "keybind '{binding_str}' for {} replaces {}",
                            action.label(),
                            shadowed.label()
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "invalid keybind '{binding_str}' for {}: {e}",
                        action.label()
                    );
                }
            }
        }

        Self { bindings }
    }

    /// Action bound to `combo`, or [`Action::None`].
    pub fn lookup(&self, combo: &KeyCombo) -> Action {
        self.bindings.get(combo).copied().unwrap_or(Action::None)
    }

    /// Like [`lookup`](Self::lookup), for a press that produced a character.
    ///
    /// The character already reflects Shift (`+` is Shift+`=` on many
    /// layouts), so when the exact combo is unbound the lookup is retried
    /// without Shift. `Shift+X` bindings still take precedence.
    pub fn lookup_character(&self, combo: &KeyCombo) -> Action {
        match self.lookup(combo) {
            Action::None if combo.has(Modifier::Shift) => {
                self.lookup(&combo.without(Modifier::Shift))
            }
            action => action,
        }
    }

    /// Display string of the key bound to `action`, if any.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
