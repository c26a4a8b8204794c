use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub rate_line: Color32,
    pub result: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(110, 170, 255),
        central_panel: Color32::from_rgb(24, 26, 30),
        top_panel: Color32::from_rgb(32, 35, 41),
        rate_line: Color32::from_rgb(110, 170, 255),
        result: Color32::from_rgb(130, 200, 140),
    },
};
