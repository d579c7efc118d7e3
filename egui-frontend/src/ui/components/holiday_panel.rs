//! # Holiday Panel
//!
//! Side panel with the "Add holiday" form (date picker, name, Add button) and
//! the list of every known holiday in date order, each with a delete button.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::ui::app_state::HolidayCalendarApp;
use crate::ui::components::modals::consume_enter;
use crate::ui::components::theme::colors;

impl HolidayCalendarApp {
    /// Render the whole side panel
    pub fn render_holiday_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        self.render_add_holiday_form(ui);
        ui.add_space(10.0);
        ui.separator();
        self.render_holiday_list(ui);
    }

    fn render_add_holiday_form(&mut self, ui: &mut egui::Ui) {
        let modal_open = self.calendar.is_modal_open();
        let mut submitted = false;

        ui.heading("Add holiday");
        ui.add_space(5.0);

        ui.add_enabled_ui(!modal_open, |ui| {
            ui.horizontal(|ui| {
                ui.label("Date:");
                let response = ui.add(
                    DatePickerButton::new(&mut self.form.picker_date).id_source("add_holiday_date"),
                );
                if response.changed() {
                    self.form.choose_picker_date();
                }
                if self.form.selected_date().is_none() {
                    ui.label(egui::RichText::new("(not chosen)").color(colors::TEXT_SECONDARY));
                }
            });

            let name_response = ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .hint_text("Holiday name")
                    .desired_width(f32::INFINITY),
            );
            if name_response.lost_focus() && consume_enter(ui.ctx()) {
                submitted = true;
            }

            if ui.button("Add").clicked() {
                submitted = true;
            }
        });

        if submitted {
            self.submit_holiday_form();
        }
    }

    fn render_holiday_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("Holidays");
        ui.add_space(5.0);

        if !self.calendar.is_loaded() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading holidays...");
            });
            return;
        }

        if self.calendar.holidays().is_empty() {
            ui.label(egui::RichText::new("No holidays added yet.").color(colors::TEXT_SECONDARY));
            return;
        }

        let mut delete_requested: Option<String> = None;
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (date, name) in self.calendar.holidays().iter() {
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(egui::RichText::new("🗑").color(colors::DANGER)).small())
                        .on_hover_text("Delete holiday")
                        .clicked()
                    {
                        delete_requested = Some(date.to_string());
                    }
                    ui.label(egui::RichText::new(format!("{} - {}", date, name)).color(colors::TEXT_PRIMARY));
                });
            }
        });

        if let Some(date) = delete_requested {
            self.calendar.request_delete(&date);
        }
    }
}
