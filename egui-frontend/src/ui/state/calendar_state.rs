//! # Calendar State Module
//!
//! All state behind the calendar view, kept free of egui so it can be driven
//! and tested headlessly.
//!
//! ## Responsibilities:
//! - Month navigation (each move triggers a full refresh)
//! - The holiday map, replaced only by the latest refresh
//! - Per-day cell state, including the name prompt and delete confirmation
//! - Validation before anything is sent to the backend
//!
//! ## Data Flow:
//! 1. User interaction calls a method here, which may return a `SyncCommand`
//! 2. The app hands the command to the `SyncWorker`
//! 3. The resulting `SyncEvent` comes back through `apply_event()`
//! 4. Successful creates/deletes answer with a refresh command; refresh
//!    results replace the holiday map if they are not stale

use chrono::NaiveDate;
use log::{debug, error, info};
use shared::{date_key_for, Holiday};

use crate::calendar::{GridSlot, HolidayMap, NavigationState};
use crate::sync::{Generation, SyncCommand, SyncEvent};

/// Display state of a single day cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    /// No holiday on this date
    Empty,
    /// A holiday is present in the last refreshed map
    Marked(String),
    /// Name prompt open for this date; holds the current draft
    AwaitingInput(String),
    /// Delete confirmation open for this date; holds the holiday name
    AwaitingConfirm(String),
}

/// The dialog currently open over the calendar, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    NameHoliday { date: String, draft: String },
    ConfirmDelete { date: String, name: String },
}

impl PendingAction {
    pub fn date(&self) -> &str {
        match self {
            PendingAction::NameHoliday { date, .. } | PendingAction::ConfirmDelete { date, .. } => date,
        }
    }
}

/// Input problems caught before any network call
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid holiday name.")]
    EmptyName,
    #[error("Please select a date and enter a holiday name.")]
    MissingDate,
}

/// One rendered slot of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    Padding,
    Day {
        day: u32,
        date_key: String,
        state: CellState,
    },
}

/// Calendar-specific state for month navigation and display
#[derive(Debug)]
pub struct CalendarState {
    navigation: NavigationState,
    holidays: HolidayMap,
    pending: Option<PendingAction>,
    alert: Option<ValidationError>,
    latest_generation: Generation,
    loaded: bool,
}

impl CalendarState {
    /// Create calendar state showing `navigation` with an empty holiday map
    pub fn new(navigation: NavigationState) -> Self {
        Self {
            navigation,
            holidays: HolidayMap::new(),
            pending: None,
            alert: None,
            latest_generation: 0,
            loaded: false,
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn holidays(&self) -> &HolidayMap {
        &self.holidays
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Validation error waiting to be acknowledged by the user
    pub fn alert(&self) -> Option<ValidationError> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Whether at least one refresh has finished (successfully or not)
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether a dialog or alert currently owns user input
    pub fn is_modal_open(&self) -> bool {
        self.pending.is_some() || self.alert.is_some()
    }

    /// Issue a new refresh; any refresh issued earlier becomes stale
    pub fn begin_refresh(&mut self) -> SyncCommand {
        self.latest_generation += 1;
        SyncCommand::Refresh {
            generation: self.latest_generation,
        }
    }

    /// Navigate to the previous month and refresh
    pub fn go_to_previous_month(&mut self) -> SyncCommand {
        self.pending = None;
        self.navigation.go_to_previous_month();
        self.begin_refresh()
    }

    /// Navigate to the next month and refresh
    pub fn go_to_next_month(&mut self) -> SyncCommand {
        self.pending = None;
        self.navigation.go_to_next_month();
        self.begin_refresh()
    }

    /// State of a day in the displayed month
    pub fn cell_state(&self, day: u32) -> CellState {
        self.cell_state_for_key(&self.navigation.date_key(day))
    }

    /// State of the cell with `date_key`
    pub fn cell_state_for_key(&self, date_key: &str) -> CellState {
        match &self.pending {
            Some(PendingAction::NameHoliday { date, draft }) if date == date_key => {
                return CellState::AwaitingInput(draft.clone());
            }
            Some(PendingAction::ConfirmDelete { date, name }) if date == date_key => {
                return CellState::AwaitingConfirm(name.clone());
            }
            _ => {}
        }

        match self.holidays.get(date_key) {
            Some(name) => CellState::Marked(name.to_string()),
            None => CellState::Empty,
        }
    }

    /// Every slot of the displayed month with its cell state
    pub fn cells(&self) -> Vec<CalendarCell> {
        self.navigation
            .slots()
            .into_iter()
            .map(|slot| match slot {
                GridSlot::Padding => CalendarCell::Padding,
                GridSlot::Day { day, date_key } => {
                    let state = self.cell_state_for_key(&date_key);
                    CalendarCell::Day { day, date_key, state }
                }
            })
            .collect()
    }

    /// Click on a day: Empty opens the name prompt, Marked opens the delete confirmation.
    /// Ignored while another dialog is open.
    pub fn click_day(&mut self, day: u32) {
        let date_key = self.navigation.date_key(day);
        self.click_date_key(&date_key);
    }

    pub fn click_date_key(&mut self, date_key: &str) {
        if self.is_modal_open() {
            debug!("Ignoring click on {} while a dialog is open", date_key);
            return;
        }

        self.pending = Some(match self.holidays.get(date_key) {
            Some(name) => PendingAction::ConfirmDelete {
                date: date_key.to_string(),
                name: name.to_string(),
            },
            None => PendingAction::NameHoliday {
                date: date_key.to_string(),
                draft: String::new(),
            },
        });
        info!("📅 Selected day: {}", date_key);
    }

    /// Ask for confirmation before deleting the holiday on `date_key` (holiday list button)
    pub fn request_delete(&mut self, date_key: &str) {
        if self.is_modal_open() {
            return;
        }
        if let Some(name) = self.holidays.get(date_key) {
            self.pending = Some(PendingAction::ConfirmDelete {
                date: date_key.to_string(),
                name: name.to_string(),
            });
        }
    }

    /// Mutable access to the name prompt's draft, if the prompt is open
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        match &mut self.pending {
            Some(PendingAction::NameHoliday { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    /// Submit the name prompt.
    ///
    /// Returns `Ok(None)` when no prompt is open. An empty name raises an alert
    /// and leaves the prompt open.
    pub fn submit_name(&mut self) -> Result<Option<SyncCommand>, ValidationError> {
        let (date, name) = match &self.pending {
            Some(PendingAction::NameHoliday { date, draft }) => (date.clone(), draft.trim().to_string()),
            _ => return Ok(None),
        };

        if name.is_empty() {
            self.alert = Some(ValidationError::EmptyName);
            return Err(ValidationError::EmptyName);
        }

        self.pending = None;
        Ok(Some(SyncCommand::Create(Holiday::new(date, name))))
    }

    /// Confirm the open delete dialog
    pub fn confirm_delete(&mut self) -> Option<SyncCommand> {
        match self.pending.take() {
            Some(PendingAction::ConfirmDelete { date, .. }) => Some(SyncCommand::Delete { date }),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Close whichever dialog is open without doing anything
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Submit the side panel form (date picker + name)
    pub fn submit_form(&mut self, selected_date: Option<NaiveDate>, name: &str) -> Result<SyncCommand, ValidationError> {
        let result = match selected_date {
            None => Err(ValidationError::MissingDate),
            Some(_) if name.trim().is_empty() => Err(ValidationError::MissingDate),
            Some(date) => Ok(SyncCommand::Create(Holiday::new(date_key_for(date), name.trim()))),
        };

        if let Err(e) = result {
            self.alert = Some(e);
        }
        result
    }

    /// Apply a finished sync call. Returns the follow-up command, if any.
    ///
    /// Failures are logged and otherwise ignored; the holiday map keeps
    /// whatever the last successful refresh produced.
    pub fn apply_event(&mut self, event: SyncEvent) -> Option<SyncCommand> {
        match event {
            SyncEvent::Listed { generation, result } => {
                if generation != self.latest_generation {
                    debug!(
                        "Discarding stale holiday list (generation {}, latest {})",
                        generation, self.latest_generation
                    );
                    return None;
                }

                self.loaded = true;
                match result {
                    Ok(holidays) => {
                        self.holidays = HolidayMap::from_holidays(holidays);
                        info!("📊 Loaded {} holidays", self.holidays.len());
                    }
                    Err(e) => error!("❌ Error fetching holidays: {}", e),
                }
                None
            }
            SyncEvent::Created { holiday, result } => match result {
                Ok(()) => {
                    info!("✅ Holiday added successfully: {}", holiday);
                    Some(self.begin_refresh())
                }
                Err(e) => {
                    error!("❌ Error adding holiday {}: {}", holiday, e);
                    None
                }
            },
            SyncEvent::Deleted { date, result } => match result {
                Ok(()) => {
                    info!("🗑️ Holiday on {} deleted", date);
                    Some(self.begin_refresh())
                }
                Err(e) => {
                    error!("❌ Error deleting holiday on {}: {}", date, e);
                    None
                }
            },
        }
    }
}
