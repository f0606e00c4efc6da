//! Usage-count heat palette.

use std::cell::Cell;

use pgviz_common::Color;
use tracing::warn;

/// Ordered cell colors indexed by buffer usage count; index 0 is unused.
///
/// Counts past the last index use the last color. The first such count is
/// logged once per palette.
#[derive(Debug, Clone)]
pub struct HeatPalette {
    colors: Vec<Color>,
    warned: Cell<bool>,
}

impl HeatPalette {
    /// An empty list falls back to a single black entry.
    pub fn new(colors: Vec<Color>) -> Self {
        let colors = if colors.is_empty() {
            vec![Color::BLACK]
        } else {
            colors
        };
        Self {
            colors,
            warned: Cell::new(false),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_for(&self, usage_count: u32) -> Color {
        let index = usage_count as usize;
        match self.colors.get(index) {
            Some(color) => *color,
            None => {
                if !self.warned.replace(true) {
                    warn!(
                        usage_count,
                        palette_len = self.colors.len(),
                        "usage count beyond palette, clamping to last color"
                    );
                }
                self.colors[self.colors.len() - 1]
            }
        }
    }

    /// Whether an out-of-range usage count has been seen.
    pub fn has_clamped(&self) -> bool {
        self.warned.get()
    }
}
