use serde::{Deserialize, Serialize};
use std::fmt;

pub mod date_key;

pub use date_key::{date_key_for, format_date_key, parse_date_key};

/// A user-marked calendar day.
///
/// `date` is the canonical date key and is unique across all holidays:
/// storing a second holiday under the same key replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Date key in `YYYY-MM-DD` format
    pub date: String,
    /// Display name of the holiday (never empty once stored)
    pub name: String,
}

impl Holiday {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.date, self.name)
    }
}

/// Body of `POST /holidays`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHolidayRequest {
    /// Date key in `YYYY-MM-DD` format
    pub date: String,
    /// Holiday name; surrounding whitespace is trimmed by the backend
    pub name: String,
}

impl From<Holiday> for CreateHolidayRequest {
    fn from(holiday: Holiday) -> Self {
        Self {
            date: holiday.date,
            name: holiday.name,
        }
    }
}

impl From<&Holiday> for CreateHolidayRequest {
    fn from(holiday: &Holiday) -> Self {
        Self {
            date: holiday.date.clone(),
            name: holiday.name.clone(),
        }
    }
}
