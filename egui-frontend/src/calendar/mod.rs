//! # Calendar Core
//!
//! Pure calendar logic with no UI or network dependencies:
//! - `month_grid` - day counts, weekday alignment and grid slots for a month
//! - `navigation` - the displayed (month, year) pair with year wraparound
//! - `holiday_map` - date key → holiday name lookup rebuilt from the backend
//!
//! Months are 0-based throughout (`0` = January); date keys are produced by
//! `shared::format_date_key` so grid cells and holiday lookups always agree.

pub mod holiday_map;
pub mod month_grid;
pub mod navigation;

pub use holiday_map::HolidayMap;
pub use month_grid::*;
pub use navigation::{NavigationState, MAX_YEAR, MIN_YEAR};
