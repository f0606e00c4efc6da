//! Heat palette and overlay color types.

use serde::{Deserialize, Serialize};

/// Default cell colors, indexed by buffer usage count.
///
/// Index 0 is the unused-buffer color. The tail is a heat-metal ramp.
pub const DEFAULT_PALETTE: [&str; 16] = [
    "#000000", "#0052ac", "#0079f1", "#00e430", "#fdf900", "#e62937",
    "#5e0000", "#bd370a", "#ff9b35", "#f9f37c", "#765d5d",
    "#1d4877", "#1b8a5a", "#fbb021", "#f68838", "#ee3e32",
];

/// Palette configuration. All colors are `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Cell colors by usage count; index 0 means unused.
    pub colors: Vec<String>,
    pub background: String,
    pub label_background: String,
    pub label_text: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            background: "#161616".into(),
            label_background: "#000000".into(),
            label_text: "#ffffff".into(),
        }
    }
}
