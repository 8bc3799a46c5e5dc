use crate::model::FileTypeIcon;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the config value; anything but "light" is dark.
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => {
                let mut visuals = egui::Visuals::dark();
                visuals.panel_fill = PAGE_BACKGROUND;
                visuals.window_fill = CARD_BACKGROUND;
                visuals
            }
        }
    }
}

// --- Colors ---
pub const PAGE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const CARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
pub const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

// --- Sizing ---
pub const FORM_WIDTH: f32 = 512.0;
pub const FIELD_HEIGHT: f32 = 40.0;
pub const SEARCH_BUTTON_SIZE: f32 = 40.0;
pub const TITLE_SIZE: f32 = 44.0;
pub const SUBTITLE_SIZE: f32 = 18.0;
pub const SECTION_SPACING: f32 = 24.0;
pub const LIST_GAP: f32 = 8.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

pub fn file_type_glyph(icon: FileTypeIcon) -> &'static str {
    match icon {
        FileTypeIcon::Video => "🎬",
        FileTypeIcon::Book => "📖",
        FileTypeIcon::Music => "🎵",
        FileTypeIcon::Archive => "📦",
        FileTypeIcon::Image => "🖼",
        FileTypeIcon::Generic => "📄",
    }
}

/// Apply theme and body font size.
pub fn apply(ctx: &egui::Context, theme: Theme, font_size: f32) {
    ctx.set_visuals(theme.visuals());
    ctx.style_mut(|style| {
        for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
            style
                .text_styles
                .insert(text_style, egui::FontId::proportional(font_size));
        }
    });
}

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
