/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows.
    Super,
}

impl Modifier {
    /// Bit in a [`KeyBind::modifier_mask`].
    pub fn bit(self) -> u8 {
        match self {
            Modifier::Ctrl => 0b0001,
            Modifier::Alt => 0b0010,
            Modifier::Shift => 0b0100,
            Modifier::Super => 0b1000,
        }
    }

    pub const ALL: [Modifier; 4] =
        [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super];
}

/// A key binding: zero or more modifiers plus a normalized key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl KeyBind {
    /// Modifiers as a bitmask, so `Ctrl+Shift` and `Shift+Ctrl` compare equal.
    pub fn modifier_mask(&self) -> u8 {
        self.modifiers.iter().fold(0, |acc, m| acc | m.bit())
    }
}
