//! # App Coordinator Module
//!
//! The main update loop.
//!
//! ## Application Flow:
//! 1. Apply finished sync calls (refresh results, create/delete outcomes)
//! 2. Handle global input (ESC closes the active dialog)
//! 3. Render header, side panel and calendar grid
//! 4. Render the active dialog, if any

use eframe::egui;

use crate::ui::app_state::HolidayCalendarApp;

const SIDE_PANEL_WIDTH: f32 = 280.0;

impl eframe::App for HolidayCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_sync_events();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.calendar.alert().is_some() {
                self.calendar.dismiss_alert();
            } else {
                self.calendar.cancel_pending();
            }
        }

        egui::TopBottomPanel::top("header")
            .exact_height(60.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                self.render_header(ui);
            });

        egui::SidePanel::right("holiday_panel")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.render_holiday_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.calendar.is_loaded() {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.spinner();
                    ui.label("Loading...");
                });
                return;
            }
            self.render_calendar(ui);
        });

        self.render_modals(ctx);
    }
}
