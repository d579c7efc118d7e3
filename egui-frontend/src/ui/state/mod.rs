//! # State Module
//!
//! Headless UI state, separated from rendering so it can be tested without egui.
//!
//! - `calendar_state` - month navigation, holiday map and per-day cell state
//! - `form_state` - the side panel "Add holiday" form

pub mod calendar_state;
pub mod form_state;

pub use calendar_state::*;
pub use form_state::*;
