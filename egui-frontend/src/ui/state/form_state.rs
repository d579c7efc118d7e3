use chrono::NaiveDate;

/// Inputs of the side panel "Add holiday" form
#[derive(Debug, Clone)]
pub struct HolidayFormState {
    /// Date shown in the picker button; only counts once the user picks it
    pub picker_date: NaiveDate,
    selected_date: Option<NaiveDate>,
    pub name: String,
}

impl HolidayFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            picker_date: today,
            selected_date: None,
            name: String::new(),
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Record the date currently in the picker as the user's choice
    pub fn choose_picker_date(&mut self) {
        self.selected_date = Some(self.picker_date);
    }

    /// Reset after a successful submit
    pub fn clear(&mut self) {
        self.selected_date = None;
        self.name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_counts_only_after_choosing() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let mut form = HolidayFormState::new(today);
        assert_eq!(form.selected_date(), None);

        form.picker_date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        form.choose_picker_date();
        form.name.push_str("Christmas");
        assert_eq!(form.selected_date(), NaiveDate::from_ymd_opt(2025, 12, 25));

        form.clear();
        assert_eq!(form.selected_date(), None);
        assert!(form.name.is_empty());
    }
}
