use super::types::KeyBind;

/// Render a [`KeyBind`] as `Mod+Mod+Key` for logs and the window title.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<&str> = kb
        .modifiers
        .iter()
        .map(|m| match m {
            super::Modifier::Ctrl => "Ctrl",
            super::Modifier::Alt => "Alt",
            super::Modifier::Shift => "Shift",
            super::Modifier::Super if cfg!(target_os = "macos") => "Cmd",
            super::Modifier::Super => "Super",
        })
        .collect();
    parts.push(&kb.key);
    parts.join("+")
}
