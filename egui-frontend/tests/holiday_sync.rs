//! End-to-end tests: the calendar state machine and sync worker driving the
//! real backend over HTTP.

use std::sync::Arc;
use std::time::Duration;

use holiday_calendar_backend::{initialize_backend, serve, BackendConfig};
use holiday_calendar_egui::calendar::{HolidayMap, NavigationState};
use holiday_calendar_egui::config::ClientConfig;
use holiday_calendar_egui::sync::{HolidaySync, HttpHolidayClient, SyncError, SyncEvent, SyncWorker};
use holiday_calendar_egui::ui::state::{CalendarState, CellState};
use shared::Holiday;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Start a backend on an ephemeral port; the returned TempDir must outlive the test
async fn start_backend() -> (ClientConfig, TempDir) {
    let data_dir = TempDir::new().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = BackendConfig {
        bind_addr: addr,
        data_directory: data_dir.path().to_path_buf(),
    };
    let app_state = initialize_backend(&config).unwrap();
    tokio::spawn(async move {
        serve(listener, app_state).await.unwrap();
    });

    let client_config = ClientConfig {
        base_url: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    (client_config, data_dir)
}

async fn next_event(worker: &mut SyncWorker) -> SyncEvent {
    tokio::time::timeout(Duration::from_secs(10), worker.next_event())
        .await
        .expect("sync event timed out")
        .expect("sync channel closed")
}

/// Feed events back into the state until no follow-up command is produced
async fn settle(state: &mut CalendarState, worker: &mut SyncWorker) {
    loop {
        let event = next_event(worker).await;
        match state.apply_event(event) {
            Some(follow_up) => worker.dispatch(follow_up),
            None => return,
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_and_delete_christmas_through_the_grid() {
    let (config, _data_dir) = start_backend().await;
    let client = HttpHolidayClient::new(config).unwrap();
    let mut worker = SyncWorker::new(Arc::new(client), tokio::runtime::Handle::current());
    let mut state = CalendarState::new(NavigationState::new(11, 2025));

    worker.dispatch(state.begin_refresh());
    settle(&mut state, &mut worker).await;
    assert!(state.is_loaded());
    assert_eq!(state.cell_state(25), CellState::Empty);

    // Empty -> AwaitingInput -> Create -> refresh -> Marked
    state.click_day(25);
    state.draft_mut().unwrap().push_str("Christmas");
    let create = state.submit_name().unwrap().unwrap();
    assert_eq!(state.cell_state(25), CellState::Empty);
    worker.dispatch(create);
    settle(&mut state, &mut worker).await;
    assert_eq!(state.cell_state(25), CellState::Marked("Christmas".to_string()));

    // Marked -> AwaitingConfirm -> Delete -> refresh -> Empty
    state.click_day(25);
    assert_eq!(state.cell_state(25), CellState::AwaitingConfirm("Christmas".to_string()));
    let delete = state.confirm_delete().unwrap();
    worker.dispatch(delete);
    settle(&mut state, &mut worker).await;
    assert_eq!(state.cell_state(25), CellState::Empty);
    assert!(state.holidays().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_duplicate_date_keeps_latest_name() {
    let (config, _data_dir) = start_backend().await;
    let client = HttpHolidayClient::new(config).unwrap();

    client.create(&Holiday::new("2025-01-01", "New Year")).await.unwrap();
    client.create(&Holiday::new("2025-01-01", "New Year's Day")).await.unwrap();

    let holidays = client.list().await.unwrap();
    assert_eq!(holidays, vec![Holiday::new("2025-01-01", "New Year's Day")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_refresh_is_idempotent() {
    let (config, _data_dir) = start_backend().await;
    let client = HttpHolidayClient::new(config).unwrap();
    client.create(&Holiday::new("2025-12-25", "Christmas")).await.unwrap();
    client.create(&Holiday::new("2025-07-04", "Independence Day")).await.unwrap();

    let first = HolidayMap::from_holidays(client.list().await.unwrap());
    let second = HolidayMap::from_holidays(client.list().await.unwrap());
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_deleting_missing_date_is_a_server_error() {
    let (config, _data_dir) = start_backend().await;
    let client = HttpHolidayClient::new(config).unwrap();

    match client.delete("2025-03-17").await {
        Err(SyncError::Server { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected 404, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unreachable_backend_is_a_transport_error() {
    // Bind and immediately drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpHolidayClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: 2,
    })
    .unwrap();

    assert!(matches!(client.list().await, Err(SyncError::Transport(_))));

    // The grid absorbs the failure and shows an empty, loaded month
    let mut worker = SyncWorker::new(Arc::new(client), tokio::runtime::Handle::current());
    let mut state = CalendarState::new(NavigationState::new(11, 2025));
    worker.dispatch(state.begin_refresh());
    settle(&mut state, &mut worker).await;
    assert!(state.is_loaded());
    assert!(state.holidays().is_empty());
}
