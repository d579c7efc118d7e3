//! # Storage Module
//!
//! Persistence for holidays. The domain layer only sees the `HolidayStorage`
//! trait; the shipped implementation keeps a single CSV file in the data
//! directory.

pub mod csv_holiday_repository;
pub mod traits;

pub use csv_holiday_repository::CsvHolidayRepository;
pub use traits::HolidayStorage;
