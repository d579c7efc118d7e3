//! # UI Components Module
//!
//! ## Module Organization:
//! - `calendar_renderer` - month grid drawing, cell styling and click handling
//! - `header` - title and month navigation
//! - `holiday_panel` - "Add holiday" form and holiday list
//! - `modals` - name prompt, delete confirmation and validation alert
//! - `theme` - colors and global egui style

pub mod calendar_renderer;
pub mod header;
pub mod holiday_panel;
pub mod modals;
pub mod theme;

pub use theme::*;
