use chrono::{Datelike, NaiveDate};
use shared::format_date_key;

/// Column headers for the Sunday-first grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Gregorian leap year rule: divisible by 4, not by 100 unless by 400
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in a month. `month0` must be in `0..=11`.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    debug_assert!(month0 < 12, "month0 out of range: {}", month0);
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Day numbers of a month in display order, `1..=N`
pub fn month_days(month0: u32, year: i32) -> impl Iterator<Item = u32> {
    1..=days_in_month(month0, year)
}

/// Column of day 1 in a Sunday-first week (0 = Sunday, 6 = Saturday)
pub fn first_weekday_offset(month0: u32, year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        // Outside chrono's supported range; fall back to a Sunday start
        .unwrap_or(0)
}

/// Human-readable month name for a 0-based month
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("Unknown")
}

/// One slot of the rendered month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSlot {
    /// Empty slot before day 1 or after the last day, keeps weekday columns aligned
    Padding,
    /// An actual day of the month
    Day { day: u32, date_key: String },
}

/// All slots of a month grid, padded to whole weeks
pub fn month_slots(month0: u32, year: i32) -> Vec<GridSlot> {
    let leading = first_weekday_offset(month0, year) as usize;
    let mut slots: Vec<GridSlot> = std::iter::repeat(GridSlot::Padding).take(leading).collect();

    slots.extend(month_days(month0, year).map(|day| GridSlot::Day {
        day,
        date_key: format_date_key(year, month0, day),
    }));

    while slots.len() % 7 != 0 {
        slots.push(GridSlot::Padding);
    }
    slots
}
