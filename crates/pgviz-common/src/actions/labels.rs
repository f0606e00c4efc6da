use super::Action;

impl Action {
    /// Human-readable label, used in logs and the keybind listing.
    pub fn label(&self) -> &'static str {
        match self {
            Action::IncreaseCellSize => "Increase Cell Size",
            Action::DecreaseCellSize => "Decrease Cell Size",
            Action::ResetView => "Reset View",
            Action::PanLeft => "Pan Left",
            Action::PanRight => "Pan Right",
            Action::PanUp => "Pan Up",
            Action::PanDown => "Pan Down",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Actions that change the camera or cell size.
    pub fn is_camera_action(&self) -> bool {
        !matches!(self, Action::Quit | Action::None)
    }
}
