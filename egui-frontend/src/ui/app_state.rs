//! # App State Module
//!
//! The top-level application struct and its initialization.
//!
//! ## Key Types:
//! - `HolidayCalendarApp` - owns the calendar state, the form, and the sync worker
//!
//! ## State Management:
//! All mutable UI state lives on the UI thread. Network calls run on the app's
//! tokio runtime and only come back as `SyncEvent`s, which are applied in
//! `process_sync_events()` at the start of every frame.

use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;
use log::info;
use tokio::runtime::Runtime;

use crate::calendar::NavigationState;
use crate::config::ClientConfig;
use crate::sync::{HolidaySync, HttpHolidayClient, SyncCommand, SyncWorker};
use crate::ui::components::theme::setup_calendar_style;
use crate::ui::state::{CalendarState, HolidayFormState};

/// Main application struct for the egui holiday calendar
pub struct HolidayCalendarApp {
    pub calendar: CalendarState,
    pub form: HolidayFormState,
    pub sync: SyncWorker,
    // Must be dropped after `sync`
    _runtime: Runtime,
}

impl HolidayCalendarApp {
    /// Create the app, connect it to the backend at `config.base_url`, and start the first refresh
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Result<Self> {
        info!("🚀 Initializing HolidayCalendarApp against {}", config.base_url);

        setup_calendar_style(&cc.egui_ctx);
        let client = HttpHolidayClient::new(config)?;
        Self::with_client(&cc.egui_ctx, Arc::new(client))
    }

    /// Create the app on top of any `HolidaySync` implementation and start the first refresh
    pub fn with_client(ctx: &egui::Context, client: Arc<dyn HolidaySync>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("holiday-sync")
            .enable_all()
            .build()
            .context("Failed to start the sync runtime")?;

        let repaint_ctx = ctx.clone();
        let sync = SyncWorker::new(client, runtime.handle().clone())
            .with_waker(move || repaint_ctx.request_repaint());

        let today = chrono::Local::now().date_naive();
        let mut app = Self {
            calendar: CalendarState::new(NavigationState::current()),
            form: HolidayFormState::new(today),
            sync,
            _runtime: runtime,
        };

        let refresh = app.calendar.begin_refresh();
        app.dispatch(refresh);
        Ok(app)
    }

    pub fn dispatch(&self, command: SyncCommand) {
        self.sync.dispatch(command);
    }

    /// Apply every finished sync call, dispatching any follow-up refresh
    pub fn process_sync_events(&mut self) {
        while let Some(event) = self.sync.try_next_event() {
            if let Some(follow_up) = self.calendar.apply_event(event) {
                self.dispatch(follow_up);
            }
        }
    }
}
