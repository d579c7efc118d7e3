//! # CSV Holiday Repository
//!
//! File-based holiday storage. All holidays live in a single
//! `{data_directory}/holidays.csv`:
//!
//! ```csv
//! date,name
//! 2025-01-01,New Year
//! 2025-12-25,Christmas
//! ```
//!
//! ## Features
//!
//! - Rows kept sorted by date
//! - Atomic file writes with temp files
//! - Read-modify-write cycles serialized through an async mutex

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::{Reader, Writer};
use tracing::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::HolidayStorage;
use shared::Holiday;

const HOLIDAYS_FILE: &str = "holidays.csv";

/// CSV record structure for a holiday row
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HolidayRecord {
    date: String,
    name: String,
}

impl From<HolidayRecord> for Holiday {
    fn from(record: HolidayRecord) -> Self {
        Holiday::new(record.date, record.name)
    }
}

impl From<&Holiday> for HolidayRecord {
    fn from(holiday: &Holiday) -> Self {
        HolidayRecord {
            date: holiday.date.clone(),
            name: holiday.name.clone(),
        }
    }
}

/// CSV-based holiday repository
#[derive(Clone)]
pub struct CsvHolidayRepository {
    file_path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl CsvHolidayRepository {
    /// Create a repository in `data_directory`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let data_directory = data_directory.as_ref();
        if !data_directory.exists() {
            std::fs::create_dir_all(data_directory).with_context(|| {
                format!("Failed to create data directory {}", data_directory.display())
            })?;
        }

        Ok(Self {
            file_path: data_directory.join(HOLIDAYS_FILE),
            lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the backing CSV file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_holidays(&self) -> Result<Vec<Holiday>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = Reader::from_path(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;

        let mut holidays = Vec::new();
        for result in reader.deserialize::<HolidayRecord>() {
            holidays.push(result?.into());
        }

        debug!("Read {} holidays from {}", holidays.len(), self.file_path.display());
        Ok(holidays)
    }

    fn write_holidays(&self, holidays: &mut Vec<Holiday>) -> Result<()> {
        holidays.sort_by(|a, b| a.date.cmp(&b.date));

        // Create a temporary file for atomic write
        let temp_path = self.file_path.with_extension("csv.tmp");
        {
            let mut writer = Writer::from_path(&temp_path)
                .with_context(|| format!("Failed to create {}", temp_path.display()))?;
            for holiday in holidays.iter() {
                writer.serialize(HolidayRecord::from(holiday))?;
            }
            writer.flush()?;
        }

        std::fs::rename(&temp_path, &self.file_path)?;
        debug!("Wrote {} holidays to {}", holidays.len(), self.file_path.display());
        Ok(())
    }
}

#[async_trait]
impl HolidayStorage for CsvHolidayRepository {
    async fn list_holidays(&self) -> Result<Vec<Holiday>> {
        let _guard = self.lock.lock().await;
        let mut holidays = self.read_holidays()?;
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(holidays)
    }

    async fn store_holiday(&self, holiday: &Holiday) -> Result<Option<Holiday>> {
        let _guard = self.lock.lock().await;
        let mut holidays = self.read_holidays()?;

        let replaced = match holidays.iter().position(|h| h.date == holiday.date) {
            Some(index) => Some(std::mem::replace(&mut holidays[index], holiday.clone())),
            None => {
                holidays.push(holiday.clone());
                None
            }
        };

        self.write_holidays(&mut holidays)?;
        Ok(replaced)
    }

    async fn delete_holiday(&self, date: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut holidays = self.read_holidays()?;
        let initial_len = holidays.len();
        holidays.retain(|h| h.date != date);

        if holidays.len() == initial_len {
            return Ok(false);
        }

        self.write_holidays(&mut holidays)?;
        Ok(true)
    }
}
