use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the visualizer.
///
/// Keybinds resolve to an `Action`; the camera controller and the frame
/// loop match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Cell size --
    IncreaseCellSize,
    DecreaseCellSize,

    // -- Camera --
    ResetView,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,

    // -- Window --
    Quit,

    // -- Noop --
    None,
}
