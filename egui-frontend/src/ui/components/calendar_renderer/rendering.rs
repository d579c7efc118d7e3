//! # Calendar Rendering
//!
//! Draws the month grid: a Sunday-first weekday header row followed by one
//! cell per `CalendarCell`. Each day cell reflects its `CellState` and reports
//! clicks back to the app; the state machine decides what a click means.

use eframe::egui;
use shared::date_key_for;

use crate::calendar::WEEKDAY_LABELS;
use crate::ui::app_state::HolidayCalendarApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::state::{CalendarCell, CellState};

use super::styling::*;

impl HolidayCalendarApp {
    /// Render the calendar grid for the displayed month
    pub fn render_calendar(&mut self, ui: &mut egui::Ui) {
        let cells = self.calendar.cells();
        let today_key = date_key_for(chrono::Local::now().date_naive());

        let available = ui.available_size();
        let rows = (cells.len() / 7).max(1) as f32;
        let cell_width = ((available.x - CALENDAR_CARD_SPACING * 6.0) / 7.0).max(MIN_CELL_SIZE.x);
        let grid_height = available.y - header::HEADER_HEIGHT - CALENDAR_CARD_SPACING * rows;
        let cell_height = (grid_height / rows).max(MIN_CELL_SIZE.y);
        let cell_size = egui::vec2(cell_width, cell_height);

        let mut clicked_date: Option<String> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(CALENDAR_CARD_SPACING, CALENDAR_CARD_SPACING);

            draw_day_headers(ui, cell_width);

            for week in cells.chunks(7) {
                ui.horizontal(|ui| {
                    for cell in week {
                        match cell {
                            CalendarCell::Padding => draw_padding_cell(ui, cell_size),
                            CalendarCell::Day { day, date_key, state } => {
                                let is_today = *date_key == today_key;
                                let response = draw_day_cell(ui, cell_size, *day, state, is_today);
                                if response.clicked() {
                                    clicked_date = Some(date_key.clone());
                                }
                            }
                        }
                    }
                });
            }
        });

        if let Some(date_key) = clicked_date {
            self.handle_calendar_day_click(&date_key);
        }
    }
}

fn draw_day_headers(ui: &mut egui::Ui, cell_width: f32) {
    ui.horizontal(|ui| {
        for label in WEEKDAY_LABELS {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(cell_width, header::HEADER_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(
                rect,
                egui::Rounding::same(4.0),
                CURRENT_THEME.calendar.header_background,
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::new(header::HEADER_FONT_SIZE, egui::FontFamily::Proportional),
                colors::TEXT_WHITE,
            );
        }
    });
}

fn draw_padding_cell(ui: &mut egui::Ui, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(
        rect,
        egui::Rounding::same(2.0),
        CURRENT_THEME.calendar.padding_background,
    );
}

fn draw_day_cell(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    day: u32,
    state: &CellState,
    is_today: bool,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let visuals = cell_visuals(state, response.hovered());
    let painter = ui.painter();

    painter.rect_filled(rect, egui::Rounding::same(2.0), visuals.fill);
    painter.rect_stroke(rect, egui::Rounding::same(2.0), visuals.stroke);

    if is_today {
        painter.rect_stroke(
            rect.expand(1.5),
            egui::Rounding::same(3.0),
            egui::Stroke::new(2.0, CURRENT_THEME.calendar.today_border),
        );
    }

    // Day number in the upper left
    painter.text(
        rect.left_top() + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        day.to_string(),
        egui::FontId::new(DAY_NUMBER_FONT_SIZE, egui::FontFamily::Proportional),
        colors::TEXT_PRIMARY,
    );

    if let Some(caption) = cell_caption(state) {
        let galley = painter.layout(
            caption.to_string(),
            egui::FontId::new(HOLIDAY_NAME_FONT_SIZE, egui::FontFamily::Proportional),
            CURRENT_THEME.calendar.holiday_border,
            rect.width() - 10.0,
        );
        let pos = egui::pos2(rect.left() + 5.0, rect.top() + DAY_NUMBER_FONT_SIZE + 10.0);
        painter.galley(pos, galley, colors::TEXT_PRIMARY);
    }

    let hint = cell_hint(state);
    if hint.is_empty() {
        response
    } else {
        response.on_hover_text(hint)
    }
}
