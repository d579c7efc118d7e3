//! # Modals
//!
//! Dialogs drawn over the calendar: the name prompt for an empty day, the
//! delete confirmation for a marked day, and the validation alert.
//!
//! At most one dialog is visible. A pending alert is shown in front of (and
//! instead of) the dialog that raised it; dismissing the alert brings that
//! dialog back. None of these block the update loop; they are ordinary
//! foreground areas redrawn every frame.

use eframe::egui;

use crate::ui::app_state::HolidayCalendarApp;
use crate::ui::components::theme::colors;
use crate::ui::state::{PendingAction, ValidationError};

const MODAL_WIDTH: f32 = 360.0;

impl HolidayCalendarApp {
    /// Render whichever dialog is currently active
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if let Some(alert) = self.calendar.alert() {
            self.render_validation_alert(ctx, alert);
            return;
        }

        match self.calendar.pending().cloned() {
            Some(PendingAction::NameHoliday { date, .. }) => self.render_name_prompt(ctx, &date),
            Some(PendingAction::ConfirmDelete { date, name }) => {
                self.render_delete_confirmation(ctx, &date, &name)
            }
            None => {}
        }
    }

    fn render_name_prompt(&mut self, ctx: &egui::Context, date: &str) {
        let mut submitted = false;
        let mut cancelled = false;

        show_modal(ctx, "holiday_name_prompt", colors::HOVER_BORDER, |ui| {
            modal_title(ui, "🎉 Add Holiday", colors::HOVER_BORDER);
            ui.label(
                egui::RichText::new(format!("Enter a name for the holiday on {}:", date))
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(8.0);

            if let Some(draft) = self.calendar.draft_mut() {
                let response = ui.add(
                    egui::TextEdit::singleline(draft)
                        .hint_text("Holiday name")
                        .desired_width(MODAL_WIDTH - 40.0),
                );
                if ui.memory(|memory| memory.focused().is_none()) {
                    response.request_focus();
                }
                if response.lost_focus() && consume_enter(ui.ctx()) {
                    submitted = true;
                }
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add(primary_button("Save", colors::BUTTON_FILL)).clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

        if submitted {
            self.submit_holiday_name();
        } else if cancelled {
            self.calendar.cancel_pending();
        }
    }

    fn render_delete_confirmation(&mut self, ctx: &egui::Context, date: &str, name: &str) {
        let mut confirmed = false;
        let mut cancelled = false;

        show_modal(ctx, "holiday_delete_confirmation", colors::DANGER, |ui| {
            modal_title(ui, "🗑 Delete Holiday", colors::DANGER);
            ui.label(
                egui::RichText::new(format!("Delete \"{}\" on {}?", name, date))
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add(primary_button("Delete", colors::DANGER)).clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

        if confirmed {
            self.confirm_holiday_deletion();
        } else if cancelled {
            self.calendar.cancel_pending();
        }
    }

    fn render_validation_alert(&mut self, ctx: &egui::Context, alert: ValidationError) {
        let mut dismissed = false;

        show_modal(ctx, "holiday_validation_alert", colors::DANGER, |ui| {
            modal_title(ui, "⚠ Missing information", colors::DANGER);
            ui.label(egui::RichText::new(alert.to_string()).color(colors::TEXT_PRIMARY));
            ui.add_space(12.0);
            if ui.add(primary_button("OK", colors::BUTTON_FILL)).clicked() || consume_enter(ui.ctx()) {
                dismissed = true;
            }
        });

        if dismissed {
            self.calendar.dismiss_alert();
        }
    }
}

/// Take this frame's Enter press, if any, so no later widget reacts to it as well
pub(crate) fn consume_enter(ctx: &egui::Context) -> bool {
    ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter))
}

/// Dim the screen, swallow clicks behind the dialog, and draw `add_contents` in a centered card
fn show_modal(ctx: &egui::Context, id: &str, accent: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let screen_rect = ctx.screen_rect();

    egui::Area::new(egui::Id::new(id).with("backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen_rect, egui::Rounding::ZERO, colors::BACKDROP);
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .fill(colors::CARD_BACKGROUND)
                .stroke(egui::Stroke::new(3.0, accent))
                .rounding(egui::Rounding::same(15.0))
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.set_width(MODAL_WIDTH);
                    ui.vertical_centered(add_contents);
                });
        });
}

fn modal_title(ui: &mut egui::Ui, title: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(title)
            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
            .strong()
            .color(color),
    );
    ui.add_space(10.0);
}

fn primary_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_WHITE))
        .fill(fill)
        .rounding(egui::Rounding::same(8.0))
        .min_size(egui::vec2(90.0, 32.0))
}
