//! # Holiday Sync
//!
//! Everything that talks to the holiday backend:
//! - `client` - the `HolidaySync` trait and its reqwest implementation
//! - `worker` - runs sync calls on a tokio runtime and hands results back to
//!   the UI thread as `SyncEvent`s
//! - `error` - transport / server / decode failures

pub mod client;
pub mod error;
pub mod worker;

pub use client::{HolidaySync, HttpHolidayClient};
pub use error::SyncError;
pub use worker::{execute, Generation, SyncCommand, SyncEvent, SyncWorker};
