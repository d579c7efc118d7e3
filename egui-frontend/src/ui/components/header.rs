//! # Header Module
//!
//! Application title plus the month navigation controls ("<", month label, ">").

use eframe::egui;

use crate::ui::app_state::HolidayCalendarApp;
use crate::ui::components::theme::colors;

impl HolidayCalendarApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Holiday Calendar")
                        .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_HEADING),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(10.0);
                self.draw_calendar_navigation_controls(ui);
                ui.add_space(20.0);
                self.draw_month_holiday_count(ui);
            });
        });
    }

    /// Draw calendar month navigation controls
    fn draw_calendar_navigation_controls(&mut self, ui: &mut egui::Ui) {
        // Right-to-left layout: widgets are added from the right edge
        if ui.add(navigation_button(">")).on_hover_text("Next month").clicked() {
            self.navigate_to_next_month();
        }

        ui.add_space(15.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new(self.calendar.navigation().label())
                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            )
            .selectable(false),
        );
        ui.add_space(15.0);

        if ui.add(navigation_button("<")).on_hover_text("Previous month").clicked() {
            self.navigate_to_previous_month();
        }
    }

    /// Number of holidays in the displayed month
    fn draw_month_holiday_count(&self, ui: &mut egui::Ui) {
        if !self.calendar.is_loaded() {
            return;
        }
        let count = self
            .calendar
            .holidays()
            .in_month(self.calendar.navigation())
            .count();
        ui.add(
            egui::Label::new(egui::RichText::new(holiday_count_label(count)).color(colors::TEXT_SECONDARY))
                .selectable(false),
        );
    }
}

/// Summary shown next to the month label
fn holiday_count_label(count: usize) -> String {
    match count {
        0 => "No holidays this month".to_string(),
        1 => "🎉 1 holiday this month".to_string(),
        n => format!("🎉 {} holidays this month", n),
    }
}

fn navigation_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(text.to_string())
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.5, colors::HOVER_BORDER))
        .rounding(egui::Rounding::same(6.0))
        .min_size(egui::vec2(35.0, 35.0))
}
