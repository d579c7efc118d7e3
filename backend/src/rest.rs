//! # REST API for Holidays
//!
//! - `GET /holidays` → JSON array of `{date, name}`
//! - `POST /holidays` with `{date, name}` → 201 and the stored holiday
//! - `DELETE /holidays/{date}` → 204

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use crate::domain::HolidayError;
use crate::AppState;
use shared::CreateHolidayRequest;

/// List all holidays
pub async fn list_holidays(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /holidays");

    match state.holiday_service.list_holidays().await {
        Ok(holidays) => (StatusCode::OK, Json(holidays)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Create or overwrite the holiday on a date
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(request): Json<CreateHolidayRequest>,
) -> impl IntoResponse {
    info!("POST /holidays - request: {:?}", request);

    match state.holiday_service.create_holiday(request).await {
        Ok(holiday) => (StatusCode::CREATED, Json(holiday)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Delete the holiday on a date
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /holidays/{}", date);

    match state.holiday_service.delete_holiday(&date).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: HolidayError) -> Response {
    let status = match &e {
        HolidayError::InvalidDate(_) | HolidayError::EmptyName => StatusCode::BAD_REQUEST,
        HolidayError::NotFound(_) => StatusCode::NOT_FOUND,
        HolidayError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Holiday request failed: {}", e);
    } else {
        warn!("Holiday request rejected: {}", e);
    }

    (status, e.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_router, CsvHolidayRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use axum::Router;
    use shared::Holiday;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_router() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvHolidayRepository::new(dir.path()).unwrap();
        (create_router(AppState::new(Arc::new(repo))), dir)
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn list(router: &Router) -> Vec<Holiday> {
        let (status, body) = send(router, Method::GET, "/holidays", None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let (router, _dir) = setup_router();
        assert!(list(&router).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (router, _dir) = setup_router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/holidays",
            Some(serde_json::json!({"date": "2025-12-25", "name": "Christmas"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Holiday = serde_json::from_slice(&body).unwrap();
        assert_eq!(created, Holiday::new("2025-12-25", "Christmas"));

        assert_eq!(list(&router).await, vec![created]);
    }

    #[tokio::test]
    async fn test_create_with_empty_name_is_bad_request() {
        let (router, _dir) = setup_router();
        let (status, _) = send(
            &router,
            Method::POST,
            "/holidays",
            Some(serde_json::json!({"date": "2025-12-25", "name": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(list(&router).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let (router, _dir) = setup_router();
        send(
            &router,
            Method::POST,
            "/holidays",
            Some(serde_json::json!({"date": "2025-05-01", "name": "May Day"})),
        )
        .await;

        let (status, _) = send(&router, Method::DELETE, "/holidays/2025-05-01", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&router, Method::DELETE, "/holidays/2025-05-01", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::DELETE, "/holidays/not-a-date", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
