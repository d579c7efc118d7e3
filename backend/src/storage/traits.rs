//! # Storage Traits

use anyhow::Result;
use async_trait::async_trait;
use shared::Holiday;

/// Interface for holiday storage operations.
///
/// Holidays are keyed by their date key; there is never more than one per date.
#[async_trait]
pub trait HolidayStorage: Send + Sync {
    /// List all stored holidays ordered by date
    async fn list_holidays(&self) -> Result<Vec<Holiday>>;

    /// Insert a holiday, replacing any holiday already stored on the same date.
    /// Returns the replaced holiday, if there was one.
    async fn store_holiday(&self, holiday: &Holiday) -> Result<Option<Holiday>>;

    /// Delete the holiday on `date`.
    /// Returns true if a holiday was found and deleted, false otherwise
    async fn delete_holiday(&self, date: &str) -> Result<bool>;
}
