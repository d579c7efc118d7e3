use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::CellState;

/// Gap between day cells and header cells
pub const CALENDAR_CARD_SPACING: f32 = 5.0;

/// Smallest size a day cell shrinks to before the grid scrolls
pub const MIN_CELL_SIZE: egui::Vec2 = egui::vec2(70.0, 60.0);

pub const DAY_NUMBER_FONT_SIZE: f32 = 16.0;
pub const HOLIDAY_NAME_FONT_SIZE: f32 = 11.0;

/// Day header row styling
pub mod header {
    pub const HEADER_HEIGHT: f32 = 30.0;
    pub const HEADER_FONT_SIZE: f32 = 13.0;
}

/// Fill and outline of a day cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisuals {
    pub fill: egui::Color32,
    pub stroke: egui::Stroke,
}

/// Colors for a cell in `state`, brightened on hover
pub fn cell_visuals(state: &CellState, is_hovered: bool) -> CellVisuals {
    let colors = &CURRENT_THEME.calendar;
    let (fill, border, width) = match state {
        CellState::Empty => (colors.empty_background, colors.empty_border, 0.5),
        CellState::Marked(_) => (colors.holiday_background, colors.holiday_border, 1.5),
        CellState::AwaitingInput(_) | CellState::AwaitingConfirm(_) => {
            (colors.pending_background, colors.pending_border, 2.0)
        }
    };

    if is_hovered && matches!(state, CellState::Empty | CellState::Marked(_)) {
        return CellVisuals {
            fill,
            stroke: egui::Stroke::new(2.0, CURRENT_THEME.interactive.hover_border),
        };
    }

    CellVisuals {
        fill,
        stroke: egui::Stroke::new(width, border),
    }
}

/// Text drawn under the day number, if any
pub fn cell_caption(state: &CellState) -> Option<&str> {
    match state {
        CellState::Empty => None,
        CellState::Marked(name) | CellState::AwaitingConfirm(name) => Some(name),
        CellState::AwaitingInput(draft) if draft.trim().is_empty() => Some("…"),
        CellState::AwaitingInput(draft) => Some(draft),
    }
}

/// Hover text describing what a click does
pub fn cell_hint(state: &CellState) -> &'static str {
    match state {
        CellState::Empty => "Click to add a holiday",
        CellState::Marked(_) => "Click to delete this holiday",
        CellState::AwaitingInput(_) | CellState::AwaitingConfirm(_) => "",
    }
}
