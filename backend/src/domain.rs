//! Holiday domain logic.
//!
//! Validates incoming holidays and applies the one-holiday-per-date rule on
//! top of whatever `HolidayStorage` the service was built with. The REST layer
//! only translates between HTTP and these calls.

use std::sync::Arc;

use shared::{parse_date_key, CreateHolidayRequest, Holiday};
use tracing::info;

use crate::storage::HolidayStorage;

#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    #[error("Invalid date key '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Holiday name cannot be empty")]
    EmptyName,
    #[error("No holiday on {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service that handles all holiday business rules
#[derive(Clone)]
pub struct HolidayService {
    storage: Arc<dyn HolidayStorage>,
}

impl HolidayService {
    pub fn new(storage: Arc<dyn HolidayStorage>) -> Self {
        Self { storage }
    }

    /// All holidays, ordered by date
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>, HolidayError> {
        let mut holidays = self.storage.list_holidays().await?;
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(holidays)
    }

    /// Store a holiday. An existing holiday on the same date is overwritten.
    pub async fn create_holiday(&self, request: CreateHolidayRequest) -> Result<Holiday, HolidayError> {
        validate_date_key(&request.date)?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(HolidayError::EmptyName);
        }

        let holiday = Holiday::new(request.date, name);
        match self.storage.store_holiday(&holiday).await? {
            Some(previous) => info!(
                "Replaced holiday on {}: '{}' -> '{}'",
                holiday.date, previous.name, holiday.name
            ),
            None => info!("Created holiday {}", holiday),
        }

        Ok(holiday)
    }

    /// Delete the holiday on `date`
    pub async fn delete_holiday(&self, date: &str) -> Result<(), HolidayError> {
        validate_date_key(date)?;

        if self.storage.delete_holiday(date).await? {
            info!("Deleted holiday on {}", date);
            Ok(())
        } else {
            Err(HolidayError::NotFound(date.to_string()))
        }
    }
}

fn validate_date_key(date: &str) -> Result<(), HolidayError> {
    match parse_date_key(date) {
        Some(_) => Ok(()),
        None => Err(HolidayError::InvalidDate(date.to_string())),
    }
}
