//! Default TOML config template with documentation comments.

/// Generate the default config TOML with comments.
pub fn default_config_toml() -> &'static str {
    r##"# pgviz configuration
# Every value shown is the default. Delete or comment out anything you
# do not want to override.

[grid]
# Initial side length of one buffer cell in pixels (1-512).
cell_size = 1

[camera]
# Axes a mouse drag pans along: "vertical", "horizontal" or "both".
pan_axis = "vertical"
# Mouse button held to pan: "left", "right" or "middle".
pan_button = "right"
# Whether the reset key also restores the startup cell size.
reset_restores_cell_size = false

[palette]
# Cell colors indexed by buffer usage count. Index 0 is unused buffers.
# Usage counts past the end use the last color.
colors = [
    "#000000", "#0052ac", "#0079f1", "#00e430", "#fdf900", "#e62937",
    "#5e0000", "#bd370a", "#ff9b35", "#f9f37c", "#765d5d",
    "#1d4877", "#1b8a5a", "#fbb021", "#f68838", "#ee3e32",
]
background = "#161616"
label_background = "#000000"
label_text = "#ffffff"

[label]
# Hover label font size in pixels (6-64).
font_size = 15

[database]
# libpq connection string, e.g. "host=localhost user=postgres dbname=postgres".
# Overridden by --conninfo. Falls back to $PGVIZ_CONNINFO when empty.
conninfo = ""

[performance]
# Frames (and buffer cache queries) per second (1-60).
frame_rate = 5

[window]
width = 100
height = 100
title = "PG Shared Buffer Visualizer"

[keybinds]
# Format: "Modifier+Key" with Modifier one of Cmd, Option, Control, Shift.
increase_cell_size = "="
decrease_cell_size = "-"
reset_view = "R"
pan_left = "Left"
pan_right = "Right"
pan_up = "Up"
pan_down = "Down"
quit = "Escape"

[logging]
# One of "trace", "debug", "info", "warn", "error".
level = "info"
"##
}
