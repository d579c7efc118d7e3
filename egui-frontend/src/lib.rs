//! Holiday calendar desktop client.
//!
//! - `calendar` - month grid math, navigation and the holiday map
//! - `config` - backend URL and request timeout
//! - `sync` - HTTP client for the holiday REST API and the background worker
//! - `ui` - egui application

pub mod calendar;
pub mod config;
pub mod sync;
pub mod ui;
