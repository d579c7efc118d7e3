use log::info;

use crate::ui::app_state::HolidayCalendarApp;
use crate::ui::state::ValidationError;

impl HolidayCalendarApp {
    /// Handle a click on a day cell
    pub fn handle_calendar_day_click(&mut self, date_key: &str) {
        self.calendar.click_date_key(date_key);
    }

    /// Navigate to the previous month and reload holidays
    pub fn navigate_to_previous_month(&mut self) {
        let refresh = self.calendar.go_to_previous_month();
        self.dispatch(refresh);
    }

    /// Navigate to the next month and reload holidays
    pub fn navigate_to_next_month(&mut self) {
        let refresh = self.calendar.go_to_next_month();
        self.dispatch(refresh);
    }

    /// Submit the name prompt opened from an empty cell
    pub fn submit_holiday_name(&mut self) {
        match self.calendar.submit_name() {
            Ok(Some(create)) => self.dispatch(create),
            Ok(None) => {}
            Err(ValidationError::EmptyName) | Err(ValidationError::MissingDate) => {
                info!("⚠️ Holiday name is empty, keeping the prompt open");
            }
        }
    }

    /// Confirm deletion of the holiday in the open confirmation dialog
    pub fn confirm_holiday_deletion(&mut self) {
        if let Some(delete) = self.calendar.confirm_delete() {
            self.dispatch(delete);
        }
    }

    /// Submit the side panel form; clears it once the create is on its way
    pub fn submit_holiday_form(&mut self) {
        let selected_date = self.form.selected_date();
        match self.calendar.submit_form(selected_date, &self.form.name) {
            Ok(create) => {
                self.dispatch(create);
                self.form.clear();
            }
            Err(e) => info!("⚠️ Holiday form rejected: {}", e),
        }
    }
}
