//! Pointer button names.

use pgviz_common::PlatformError;

/// Mouse button that can drive camera panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Parse `"left"`, `"right"` or `"middle"` (case-insensitive).
pub fn parse_pointer_button(name: &str) -> Result<PointerButton, PlatformError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "left" => Ok(PointerButton::Left),
        "right" => Ok(PointerButton::Right),
        "middle" => Ok(PointerButton::Middle),
        _ => Err(PlatformError::UnknownButton(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_buttons() {
        assert_eq!(parse_pointer_button("right").unwrap(), PointerButton::Right);
        assert_eq!(parse_pointer_button("Left").unwrap(), PointerButton::Left);
        assert_eq!(parse_pointer_button(" MIDDLE ").unwrap(), PointerButton::Middle);
    }

    #[test]
    fn rejects_unknown_button() {
        let err = parse_pointer_button("back").unwrap_err();
        assert_eq!(err.to_string(), "unknown pointer button: back");
    }
}
