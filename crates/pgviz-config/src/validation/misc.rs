//! Per-section validators.

use super::helpers::validate_range;
use crate::schema::PgvizConfig;

pub(crate) const POINTER_BUTTONS: [&str; 3] = ["left", "right", "middle"];

pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &PgvizConfig) {
    validate_range(errors, "grid.cell_size", config.grid.cell_size, 1, 512);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &PgvizConfig) {
    let button = config.camera.pan_button.to_ascii_lowercase();
    if !POINTER_BUTTONS.contains(&button.as_str()) {
        errors.push(format!(
            "camera.pan_button = \"{}\" must be one of {}",
            config.camera.pan_button,
            POINTER_BUTTONS.join(", ")
        ));
    }
}

pub(crate) fn validate_label(errors: &mut Vec<String>, config: &PgvizConfig) {
    validate_range(errors, "label.font_size", config.label.font_size, 6, 64);
}

pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &PgvizConfig) {
    validate_range(
        errors,
        "performance.frame_rate",
        config.performance.frame_rate,
        1,
        60,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &PgvizConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}
