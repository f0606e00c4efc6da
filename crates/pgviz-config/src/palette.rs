//! Parsing of the `[palette]` section into concrete colors.

use crate::schema::PaletteConfig;
use pgviz_common::{Color, ConfigError};

/// Minimum number of cell colors: one for unused buffers plus one more.
pub const MIN_PALETTE_LEN: usize = 2;

/// Palette with every hex string parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPalette {
    /// Cell colors indexed by usage count.
    pub cells: Vec<Color>,
    pub background: Color,
    pub label_background: Color,
    pub label_text: Color,
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::from_hex(value).ok_or_else(|| format!("{field} = \"{value}\" is not a hex color"))
}

/// Collect one message per unparsable or missing color.
pub(crate) fn palette_errors(config: &PaletteConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if config.colors.len() < MIN_PALETTE_LEN {
        errors.push(format!(
            "palette.colors has {} entries, need at least {MIN_PALETTE_LEN}",
            config.colors.len()
        ));
    }
    for (i, value) in config.colors.iter().enumerate() {
        if let Err(e) = parse_color(&format!("palette.colors[{i}]"), value) {
            errors.push(e);
        }
    }
    for (field, value) in [
        ("palette.background", &config.background),
        ("palette.label_background", &config.label_background),
        ("palette.label_text", &config.label_text),
    ] {
        if let Err(e) = parse_color(field, value) {
            errors.push(e);
        }
    }
    errors
}

/// Parse every color in the palette section.
pub fn resolve_palette(config: &PaletteConfig) -> Result<ResolvedPalette, ConfigError> {
    let errors = palette_errors(config);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationError(errors.join("; ")));
    }

    let cells = config
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| parse_color(&format!("palette.colors[{i}]"), c))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ConfigError::ValidationError)?;

    Ok(ResolvedPalette {
        cells,
        background: parse_color("palette.background", &config.background)
            .map_err(ConfigError::ValidationError)?,
        label_background: parse_color("palette.label_background", &config.label_background)
            .map_err(ConfigError::ValidationError)?,
        label_text: parse_color("palette.label_text", &config.label_text)
            .map_err(ConfigError::ValidationError)?,
    })
}
