use pgviz_config::keymap::{KeyBind, Modifier};

/// Hashable lookup key: modifier bitmask plus normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifier_mask(),
            key: kb.key.clone(),
        }
    }

    /// Build from the modifier state of a winit keyboard event and a key
    /// name already passed through [`normalize_winit_key`].
    ///
    /// [`normalize_winit_key`]: crate::winit_keys::normalize_winit_key
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let held = [ctrl, alt, shift, super_key];
        let mods = Modifier::ALL
            .iter()
            .zip(held)
            .filter(|(_, down)| *down)
            .fold(0, |acc, (m, _)| acc | m.bit());
        Self { mods, key }
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.mods & modifier.bit() != 0
    }

    /// The same combo with `modifier` released.
    pub fn without(&self, modifier: Modifier) -> Self {
        Self {
            mods: self.mods & !modifier.bit(),
            key: self.key.clone(),
        }
    }

    pub(super) fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: Modifier::ALL
                .into_iter()
                .filter(|m| self.has(*m))
                .collect(),
            key: self.key.clone(),
        }
    }
}
