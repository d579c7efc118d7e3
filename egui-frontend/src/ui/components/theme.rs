//! # Theme Configuration
//!
//! Centralized colors for the holiday calendar. All visual styling should use
//! these constants so the look can be changed in one place.

use eframe::egui;
use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    pub interactive: InteractiveColors,
    pub layout: LayoutColors,
    pub typography: TypographyColors,
    pub calendar: CalendarColors,
}

/// Colors for interactive elements (buttons, hover states)
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Outline used for hover on every interactive element
    pub hover_border: Color32,
    pub button_fill: Color32,
    pub danger: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    pub card_background: Color32,
    pub backdrop: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub white: Color32,
}

/// Calendar-specific colors, one set per cell state
#[derive(Debug, Clone)]
pub struct CalendarColors {
    pub today_border: Color32,
    pub header_background: Color32,
    pub empty_background: Color32,
    pub empty_border: Color32,
    pub holiday_background: Color32,
    pub holiday_border: Color32,
    pub pending_background: Color32,
    pub pending_border: Color32,
    pub padding_background: Color32,
}

/// The active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        hover_border: Color32::from_rgb(126, 120, 229),
        button_fill: Color32::from_rgb(79, 109, 245),
        danger: Color32::from_rgb(220, 50, 50),
    },
    layout: LayoutColors {
        background: Color32::from_rgb(240, 244, 250),
        card_background: Color32::WHITE,
        backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 128),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(120, 120, 120),
        heading: Color32::from_rgb(70, 70, 70),
        white: Color32::WHITE,
    },
    calendar: CalendarColors {
        today_border: Color32::from_rgb(232, 150, 199),
        header_background: Color32::from_rgb(186, 85, 211),
        empty_background: Color32::WHITE,
        empty_border: Color32::from_rgb(210, 210, 210),
        holiday_background: Color32::from_rgb(255, 228, 225),
        holiday_border: Color32::from_rgb(220, 20, 60),
        pending_background: Color32::from_rgb(230, 190, 235),
        pending_border: Color32::from_rgb(199, 112, 221),
        padding_background: Color32::from_rgb(235, 235, 235),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const HOVER_BORDER: Color32 = CURRENT_THEME.interactive.hover_border;
    pub const BUTTON_FILL: Color32 = CURRENT_THEME.interactive.button_fill;
    pub const DANGER: Color32 = CURRENT_THEME.interactive.danger;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const BACKDROP: Color32 = CURRENT_THEME.layout.backdrop;
}

/// Install global spacing, rounding and text sizes
pub fn setup_calendar_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = CURRENT_THEME.layout.background;
        style.visuals.button_frame = true;
        // In egui 0.28 text edits use extreme_bg_color
        style.visuals.extreme_bg_color = Color32::from_rgb(248, 248, 248);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, CURRENT_THEME.interactive.hover_border);

        style
    });
}
