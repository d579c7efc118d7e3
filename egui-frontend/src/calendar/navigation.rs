use chrono::Datelike;
use log::info;
use shared::{format_date_key, parse_date_key};

use super::month_grid::{month_name, month_slots, GridSlot};

/// First year that can be displayed
pub const MIN_YEAR: i32 = 1;
/// Last year that can be displayed; date keys only have room for four year digits
pub const MAX_YEAR: i32 = 9999;

/// The currently displayed month.
///
/// `month` is 0-based and always stays within `0..=11`; stepping past either
/// end carries into the year. The year stays within `MIN_YEAR..=MAX_YEAR`:
/// navigating before January of `MIN_YEAR` or after December of `MAX_YEAR`
/// does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    month: u32,
    year: i32,
}

impl NavigationState {
    /// Create a navigation state, carrying out-of-range months into the year
    /// and clamping to the displayable range
    pub fn new(month0: i32, year: i32) -> Self {
        let year = year.saturating_add(month0.div_euclid(12));
        if year < MIN_YEAR {
            return Self { month: 0, year: MIN_YEAR };
        }
        if year > MAX_YEAR {
            return Self { month: 11, year: MAX_YEAR };
        }
        Self {
            month: month0.rem_euclid(12) as u32,
            year,
        }
    }

    /// Navigation state for today's local month
    pub fn current() -> Self {
        let now = chrono::Local::now();
        Self::new(now.month0() as i32, now.year())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Navigate to the previous month
    pub fn go_to_previous_month(&mut self) {
        if self.month == 0 && self.year == MIN_YEAR {
            info!("📅 Already at the earliest month: {}", self.label());
            return;
        }
        if self.month == 0 {
            self.month = 11;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
        info!("📅 Navigated to previous month: {}", self.label());
    }

    /// Navigate to the next month
    pub fn go_to_next_month(&mut self) {
        if self.month == 11 && self.year == MAX_YEAR {
            info!("📅 Already at the latest month: {}", self.label());
            return;
        }
        if self.month == 11 {
            self.month = 0;
            self.year += 1;
        } else {
            self.month += 1;
        }
        info!("📅 Navigated to next month: {}", self.label());
    }

    /// Header text, e.g. "December 2025"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    /// Date key for a day of the displayed month
    pub fn date_key(&self, day: u32) -> String {
        format_date_key(self.year, self.month, day)
    }

    pub fn slots(&self) -> Vec<GridSlot> {
        month_slots(self.month, self.year)
    }

    /// Whether a date key falls inside the displayed month
    pub fn contains(&self, date_key: &str) -> bool {
        parse_date_key(date_key)
            .map(|date| date.year() == self.year && date.month0() == self.month)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_wraps_to_december() {
        let mut nav = NavigationState::new(0, 2025);
        nav.go_to_previous_month();
        assert_eq!((nav.month(), nav.year()), (11, 2024));
    }

    #[test]
    fn test_next_wraps_to_january() {
        let mut nav = NavigationState::new(11, 2025);
        nav.go_to_next_month();
        assert_eq!((nav.month(), nav.year()), (0, 2026));
    }

    #[test]
    fn test_round_trip_through_a_year() {
        let start = NavigationState::new(4, 2025);
        let mut nav = start;
        for _ in 0..12 {
            nav.go_to_next_month();
        }
        assert_eq!((nav.month(), nav.year()), (4, 2026));
        for _ in 0..12 {
            nav.go_to_previous_month();
        }
        assert_eq!(nav, start);
    }

    #[test]
    fn test_new_normalizes_month() {
        assert_eq!(NavigationState::new(12, 2025), NavigationState::new(0, 2026));
        assert_eq!(NavigationState::new(-1, 2025), NavigationState::new(11, 2024));
        assert_eq!(NavigationState::new(25, 2025), NavigationState::new(1, 2027));
    }

    #[test]
    fn test_label_and_keys() {
        let nav = NavigationState::new(11, 2025);
        assert_eq!(nav.label(), "December 2025");
        assert_eq!(nav.date_key(25), "2025-12-25");
        assert!(nav.contains("2025-12-01"));
        assert!(!nav.contains("2026-12-01"));
        assert!(!nav.contains("garbage"));
    }

    #[test]
    fn test_navigation_stops_at_four_digit_years() {
        let mut nav = NavigationState::new(11, MAX_YEAR);
        nav.go_to_next_month();
        assert_eq!((nav.month(), nav.year()), (11, MAX_YEAR));
        assert_eq!(nav.date_key(31), "9999-12-31");
        assert!(nav.contains("9999-12-31"));

        let mut nav = NavigationState::new(0, MIN_YEAR);
        nav.go_to_previous_month();
        assert_eq!((nav.month(), nav.year()), (0, MIN_YEAR));
        assert_eq!(nav.date_key(1), "0001-01-01");
        assert!(nav.contains("0001-01-01"));
    }

    #[test]
    fn test_new_clamps_out_of_range_years() {
        assert_eq!(NavigationState::new(0, 10_000), NavigationState::new(11, MAX_YEAR));
        assert_eq!(NavigationState::new(12, MAX_YEAR), NavigationState::new(11, MAX_YEAR));
        assert_eq!(NavigationState::new(5, 0), NavigationState::new(0, MIN_YEAR));
        assert_eq!(NavigationState::new(-1, MIN_YEAR), NavigationState::new(0, MIN_YEAR));
        assert_eq!(NavigationState::new(i32::MAX, i32::MAX), NavigationState::new(11, MAX_YEAR));
    }
}
