//! # Sync Worker
//!
//! Bridges the single-threaded egui update loop and the async HTTP client.
//! `dispatch()` spawns a request on the tokio runtime and returns immediately;
//! the finished result comes back as a `SyncEvent` that the UI drains on its
//! next frame. A waker (normally `egui::Context::request_repaint`) makes sure
//! that next frame happens.
//!
//! Refreshes carry the `Generation` they were issued under so the receiver can
//! drop responses that were overtaken by a newer refresh.

use std::sync::Arc;

use log::debug;
use shared::Holiday;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::client::HolidaySync;
use super::error::SyncError;

/// Monotonic refresh counter; only the latest issued generation may update state
pub type Generation = u64;

/// A backend request to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    /// Re-fetch all holidays
    Refresh { generation: Generation },
    /// Create (or overwrite) a holiday
    Create(Holiday),
    /// Delete the holiday on a date
    Delete { date: String },
}

/// The outcome of a `SyncCommand`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Listed {
        generation: Generation,
        result: Result<Vec<Holiday>, SyncError>,
    },
    Created {
        holiday: Holiday,
        result: Result<(), SyncError>,
    },
    Deleted {
        date: String,
        result: Result<(), SyncError>,
    },
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Run one command against the backend and wrap the outcome in an event
pub async fn execute(client: &dyn HolidaySync, command: SyncCommand) -> SyncEvent {
    match command {
        SyncCommand::Refresh { generation } => SyncEvent::Listed {
            generation,
            result: client.list().await,
        },
        SyncCommand::Create(holiday) => {
            let result = client.create(&holiday).await;
            SyncEvent::Created { holiday, result }
        }
        SyncCommand::Delete { date } => {
            let result = client.delete(&date).await;
            SyncEvent::Deleted { date, result }
        }
    }
}

/// Runs sync commands in the background and queues their results
pub struct SyncWorker {
    client: Arc<dyn HolidaySync>,
    runtime: Handle,
    events_tx: UnboundedSender<SyncEvent>,
    events_rx: UnboundedReceiver<SyncEvent>,
    waker: Option<Waker>,
}

impl SyncWorker {
    pub fn new(client: Arc<dyn HolidaySync>, runtime: Handle) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            client,
            runtime,
            events_tx,
            events_rx,
            waker: None,
        }
    }

    /// Call `waker` every time an event is queued
    pub fn with_waker<F>(mut self, waker: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.waker = Some(Arc::new(waker));
        self
    }

    /// Start a command in the background. Overlapping commands are not
    /// deduplicated; each one performs its own round trip.
    pub fn dispatch(&self, command: SyncCommand) {
        debug!("🔄 Dispatching {:?}", command);

        let client = Arc::clone(&self.client);
        let events_tx = self.events_tx.clone();
        let waker = self.waker.clone();

        self.runtime.spawn(async move {
            let event = execute(client.as_ref(), command).await;
            // The receiver lives as long as the worker; a send error means the app is gone
            if events_tx.send(event).is_ok() {
                if let Some(waker) = waker {
                    waker();
                }
            }
        });
    }

    /// Next finished event, if any, without blocking
    pub fn try_next_event(&mut self) -> Option<SyncEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Wait for the next finished event
    pub async fn next_event(&mut self) -> Option<SyncEvent> {
        self.events_rx.recv().await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// In-memory backend; `list()` can be held back until `release_list()` is called
    #[derive(Default)]
    pub(crate) struct MockBackend {
        holidays: Mutex<Vec<Holiday>>,
        list_gate: Option<Notify>,
        fail_with: Option<SyncError>,
        pub(crate) calls: AtomicUsize,
    }

    impl MockBackend {
        pub(crate) fn gated() -> Self {
            Self {
                list_gate: Some(Notify::new()),
                ..Self::default()
            }
        }

        pub(crate) fn failing(error: SyncError) -> Self {
            Self {
                fail_with: Some(error),
                ..Self::default()
            }
        }

        pub(crate) fn release_list(&self) {
            if let Some(gate) = &self.list_gate {
                gate.notify_one();
            }
        }

        fn check_failure(&self) -> Result<(), SyncError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl HolidaySync for MockBackend {
        async fn list(&self) -> Result<Vec<Holiday>, SyncError> {
            if let Some(gate) = &self.list_gate {
                gate.notified().await;
            }
            self.check_failure()?;
            Ok(self.holidays.lock().unwrap().clone())
        }

        async fn create(&self, holiday: &Holiday) -> Result<(), SyncError> {
            self.check_failure()?;
            let mut holidays = self.holidays.lock().unwrap();
            holidays.retain(|h| h.date != holiday.date);
            holidays.push(holiday.clone());
            Ok(())
        }

        async fn delete(&self, date: &str) -> Result<(), SyncError> {
            self.check_failure()?;
            let mut holidays = self.holidays.lock().unwrap();
            let before = holidays.len();
            holidays.retain(|h| h.date != date);
            if holidays.len() == before {
                return Err(SyncError::Server {
                    status: 404,
                    message: format!("No holiday on {}", date),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_execute_wraps_results() {
        let backend = MockBackend::default();

        let event = execute(&backend, SyncCommand::Create(Holiday::new("2025-12-25", "Christmas"))).await;
        assert!(matches!(event, SyncEvent::Created { result: Ok(()), .. }));

        let event = execute(&backend, SyncCommand::Refresh { generation: 7 }).await;
        assert_eq!(
            event,
            SyncEvent::Listed {
                generation: 7,
                result: Ok(vec![Holiday::new("2025-12-25", "Christmas")]),
            }
        );

        let event = execute(&backend, SyncCommand::Delete { date: "2025-01-01".to_string() }).await;
        assert!(matches!(
            event,
            SyncEvent::Deleted { result: Err(SyncError::Server { status: 404, .. }), .. }
        ));
    }

    #[tokio::test]
    async fn test_execute_reports_transport_failure() {
        let backend = MockBackend::failing(SyncError::Transport("connection refused".to_string()));
        let event = execute(&backend, SyncCommand::Refresh { generation: 1 }).await;
        assert_eq!(
            event,
            SyncEvent::Listed {
                generation: 1,
                result: Err(SyncError::Transport("connection refused".to_string())),
            }
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dispatch_delivers_event_and_wakes() {
        let woken = Arc::new(AtomicUsize::new(0));
        let woken_in_waker = Arc::clone(&woken);
        let mut worker = SyncWorker::new(Arc::new(MockBackend::default()), Handle::current())
            .with_waker(move || {
                woken_in_waker.fetch_add(1, Ordering::SeqCst);
            });

        assert!(worker.try_next_event().is_none());
        worker.dispatch(SyncCommand::Refresh { generation: 1 });

        let event = tokio::time::timeout(Duration::from_secs(5), worker.next_event())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event, SyncEvent::Listed { generation: 1, result: Ok(vec![]) });
        assert_eq!(woken.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_gated_list_is_held_back() {
        let backend = Arc::new(MockBackend::gated());
        let mut worker = SyncWorker::new(backend.clone(), Handle::current());

        worker.dispatch(SyncCommand::Refresh { generation: 1 });
        let early = tokio::time::timeout(Duration::from_millis(100), worker.next_event()).await;
        assert!(early.is_err(), "list should not complete before the gate opens");

        backend.release_list();
        let event = tokio::time::timeout(Duration::from_secs(5), worker.next_event())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, SyncEvent::Listed { generation: 1, result: Ok(_) }));
    }
}
